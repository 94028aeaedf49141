pub mod config;
pub mod db;
pub mod end;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod payroll;
pub mod start;
