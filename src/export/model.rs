// src/export/model.rs

use crate::models::payroll_entry::PayrollEntry;
use crate::utils::formatting::{fixed2, rate_text};
use crate::utils::time::format_ts;
use serde::Serialize;

/// Flat, denormalized form of a payroll entry for CSV / JSON output.
/// Field order is the column order of the export file.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PayrollExport {
    pub name: String,
    pub rate: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: String,
    pub gross: String,
    pub tax: String,
    pub net: String,
    pub created_at: String,
}

impl From<&PayrollEntry> for PayrollExport {
    fn from(e: &PayrollEntry) -> Self {
        Self {
            name: e.employee_name.clone(),
            rate: rate_text(e.rate),
            start_time: format_ts(&e.start_time),
            end_time: format_ts(&e.end_time),
            hours: fixed2(e.hours),
            gross: fixed2(e.gross),
            tax: fixed2(e.tax),
            net: fixed2(e.net),
            created_at: format_ts(&e.created_at),
        }
    }
}
