//! Relative formatting for due dates shown in the to-do list.

use chrono::{Duration, NaiveDate};

/// Format a due date relative to `today`: "Today", "Tomorrow", or a plain
/// calendar date for anything else.
pub fn format_due(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%-d %b %Y").to_string()
    }
}

/// An assignment is overdue once its due date is strictly before the start
/// of the current calendar day. Due today is not overdue.
pub fn is_overdue(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
