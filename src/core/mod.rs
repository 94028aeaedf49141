pub mod config;
pub mod list;
pub mod log;
pub mod pay;
pub mod payroll;
pub mod session;
pub mod week;
