use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// One clock-in/clock-out interval.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    pub id: i64,
    pub employee_name: String,          // ⇔ session_log.name (lower-case)
    pub start_time: NaiveDateTime,      // ⇔ session_log.start_time
    pub end_time: Option<NaiveDateTime>, // ⇔ session_log.end_time (NULL while open)
    pub rate: Option<Decimal>,          // ⇔ session_log.rate (NULL until end)
    pub logged: bool,                   // ⇔ session_log.logged
}

impl SessionEvent {
    /// A freshly started session, not yet persisted (`id = 0`).
    pub fn open(employee_name: &str, start_time: NaiveDateTime) -> Self {
        Self {
            id: 0,
            employee_name: employee_name.to_string(),
            start_time,
            end_time: None,
            rate: None,
            logged: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}
