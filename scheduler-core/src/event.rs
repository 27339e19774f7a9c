//! The event record and the overrides an edit applies to it.

use std::cmp::Ordering;
use std::fmt;

use crate::validate::{validate_date, validate_time};

/// A scheduled item.
///
/// `date` is `YYYY-MM-DD` and `time` is `HH:MM`. Both are kept as strings and
/// ordered lexicographically, which matches chronological order for
/// well-shaped values. The title doubles as the lookup key, so two events may
/// share one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub time: String,
}

impl Event {
    pub fn new(title: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Event {
            title: title.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Compare by `(date, time)` only. The title does not take part, so a
    /// stable sort keeps same-slot events in insertion order.
    pub fn cmp_schedule(&self, other: &Event) -> Ordering {
        (&self.date, &self.time).cmp(&(&other.date, &other.time))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.date, self.time, self.title)
    }
}

/// Field overrides for an existing event.
///
/// `None` and empty strings both mean "keep the current value". A date or
/// time that fails validation is dropped without error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl EventUpdate {
    /// Build an update from raw user input, treating empty strings as absent.
    pub fn from_input(title: &str, date: &str, time: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        EventUpdate {
            title: non_empty(title),
            date: non_empty(date),
            time: non_empty(time),
        }
    }

    /// Apply the overrides that survive the emptiness and shape checks.
    pub fn apply(&self, event: &mut Event) {
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            event.title = title.to_string();
        }
        if let Some(date) = self.date.as_deref().filter(|d| validate_date(d)) {
            event.date = date.to_string();
        }
        if let Some(time) = self.time.as_deref().filter(|t| validate_time(t)) {
            event.time = time.to_string();
        }
    }
}
