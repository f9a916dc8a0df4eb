//! Source of "today" for date-based computations.
//!
//! The streak engine never reads the wall clock itself; it asks a `Clock`.

use chrono::{Local, NaiveDate};

/// Provides the current calendar day in the local time zone
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock backed clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single day
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
