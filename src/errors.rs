//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored amount is not a valid decimal: {0}")]
    Decimal(#[from] rust_decimal::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Please enter an employee name.")]
    MissingName,

    #[error("Please enter hourly rate before ending session.")]
    MissingRate,

    #[error("Hourly rate must be a number, got '{0}'.")]
    InvalidRate(String),

    #[error("Hourly rate cannot be negative ({0}).")]
    NegativeRate(String),

    #[error("Hourly rate {0} exceeds the maximum of {1}.")]
    RateTooHigh(String, String),

    #[error("Pay amount out of range: {0}")]
    AmountOverflow(String),

    #[error("Hours cannot be negative ({0}).")]
    NegativeHours(String),

    #[error("Session end {end} is before its start {start}.")]
    EndBeforeStart { start: String, end: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Lookup / conflict errors
    // ---------------------------
    #[error("No active session found for {0}")]
    NoActiveSession(String),

    #[error("{name} already has an open session started at {started}")]
    SessionAlreadyOpen { name: String, started: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for problems caused by the user's input or the current session
    /// state, as opposed to storage or filesystem failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingName
                | AppError::MissingRate
                | AppError::InvalidRate(_)
                | AppError::NegativeRate(_)
                | AppError::RateTooHigh(..)
                | AppError::AmountOverflow(_)
                | AppError::NegativeHours(_)
                | AppError::EndBeforeStart { .. }
                | AppError::InvalidTimestamp(_)
                | AppError::InvalidDate(_)
                | AppError::NoActiveSession(_)
                | AppError::SessionAlreadyOpen { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
