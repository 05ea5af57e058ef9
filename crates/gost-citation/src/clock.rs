//! Date source for the "дата обращения" (access date) stamp.
//!
//! Rendering reads the current date only through [`Clock`]; the binaries pass [`SystemClock`],
//! tests pass [`FixedClock`].

use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Format of the access date: `DD.MM.YYYY`.
pub const ACCESS_DATE_FORMAT: &str = "%d.%m.%Y";

pub trait Clock: Send + Sync {
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Today's date from `clock`, formatted as [`ACCESS_DATE_FORMAT`].
pub fn access_date(clock: &dyn Clock) -> String {
    clock.today().format(ACCESS_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_date_zero_padded() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(access_date(&clock), "07.03.2024");
    }

    #[test]
    fn test_arc_clock_delegates() {
        let clock: Arc<dyn Clock> =
            Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
        assert_eq!(access_date(&clock), "31.12.2023");
    }
}
