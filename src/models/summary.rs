use crate::core::week::WeekWindow;
use rust_decimal::Decimal;

/// Pay classification of a weekly group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayClass {
    Paid,
    Unpaid,
}

impl PayClass {
    pub fn for_rate(rate: Decimal) -> Self {
        if rate > Decimal::ZERO {
            PayClass::Paid
        } else {
            PayClass::Unpaid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayClass::Paid => "Paid",
            PayClass::Unpaid => "Unpaid",
        }
    }
}

/// Aggregate of every payroll entry for one (employee, rate) pair in a week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummaryRow {
    pub employee_name: String,
    pub rate: Decimal,
    pub total_hours: Decimal,
    pub total_gross: Decimal,
    pub total_tax: Decimal,
    pub total_net: Decimal,
}

impl WeeklySummaryRow {
    pub fn class(&self) -> PayClass {
        PayClass::for_rate(self.rate)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyTotals {
    pub paid_hours: Decimal,
    pub unpaid_hours: Decimal,
    pub gross: Decimal,
    pub tax: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub window: WeekWindow,
    pub rows: Vec<WeeklySummaryRow>,
    pub totals: WeeklyTotals,
}
