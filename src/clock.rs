//! Wall clock used for backup and audit log names

use chrono::{Local, NaiveDateTime};

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The real local clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl FixedClock {
    /// Clock frozen at the given local date and time
    #[allow(clippy::unwrap_used)]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let date = chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap();
        Self(date.and_hms_opt(hour, min, sec).unwrap())
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
