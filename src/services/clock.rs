//! Timestamp source for contact records.

use chrono::Local;

/// Format used for `created_at` / `updated_at`: local time, microseconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Produces the timestamps written into contact records.
pub trait Clock {
    /// Current time as sortable ISO-8601 text.
    fn now(&self) -> String;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// A clock that always returns the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
