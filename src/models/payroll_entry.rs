use crate::core::pay::PayBreakdown;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// A finalized, immutable payroll line derived from one closed session.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollEntry {
    pub id: i64,
    pub employee_name: String,
    pub rate: Decimal,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub hours: Decimal,
    pub gross: Decimal,
    pub tax: Decimal,
    pub net: Decimal,
    pub created_at: NaiveDateTime,
}

impl PayrollEntry {
    pub fn new(
        employee_name: &str,
        rate: Decimal,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        pay: PayBreakdown,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: 0,
            employee_name: employee_name.to_string(),
            rate,
            start_time,
            end_time,
            hours: pay.hours,
            gross: pay.gross,
            tax: pay.tax,
            net: pay.net,
            created_at,
        }
    }
}
