//! Fixed Sunday-to-Saturday reporting window and ISO week naming.

use chrono::{Datelike, Duration, NaiveDate};

/// Half-open `[start, end)` range of dates, `start` always a Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start && d < self.end
    }

    /// Last day included in the window (the Saturday).
    pub fn last_day(&self) -> NaiveDate {
        self.end - Duration::days(1)
    }
}

/// Window anchored on the most recent Sunday on or before `today`.
pub fn week_window(today: NaiveDate) -> WeekWindow {
    // 0 = Monday .. 6 = Sunday
    let weekday = today.weekday().num_days_from_monday() as i64;
    let days_since_sunday = (weekday + 1) % 7;

    let start = today - Duration::days(days_since_sunday);
    WeekWindow {
        start,
        end: start + Duration::days(7),
    }
}

/// `YYYY-Www` using the ISO week-numbering year.
pub fn iso_week_id(d: NaiveDate) -> String {
    let w = d.iso_week();
    format!("{}-W{:02}", w.year(), w.week())
}

/// File name of the weekly report for the ISO week containing `d`.
pub fn report_file_name(d: NaiveDate) -> String {
    format!("weekly_summary_{}.md", iso_week_id(d))
}
