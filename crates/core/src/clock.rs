//! Time source for `registered_at` stamps.

use chrono::{Local, NaiveDateTime};

use crate::constants::TIMESTAMP_FORMAT;

/// Supplies the current local time.
///
/// Classification takes a `&dyn Clock` so tests can pin the timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Current time rendered as a `registered_at` cell.
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Wall clock in the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
