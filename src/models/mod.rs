pub mod payroll_entry;
pub mod session_event;
pub mod summary;
