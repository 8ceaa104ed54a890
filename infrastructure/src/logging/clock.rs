//! Local wall-clock time.

use chrono::{Local, NaiveDateTime};
use daylog_application::Clock;

/// Real system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
