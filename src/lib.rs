#[macro_use]
mod logging;

mod clock;
mod consts;
mod convert;
mod names;
mod prelude;
mod types;

pub use clock::{Clock, ClockConfig, ClockError, FixedClock, SystemClock};
pub use consts::*;
pub use convert::{
    gregorian_day_number, gregorian_days_in_month, gregorian_to_jalali, is_gregorian_leap_year,
    is_jalali_leap_year, jalali_days_in_month, jalali_to_gregorian,
};
pub use names::{PersianMonth, PersianWeekday};
pub use types::{Calendar, GregorianDate, JalaliDate};

use crate::prelude::*;

/// Error raised when a date triple cannot be turned into a valid date.
///
/// The conversion functions never produce this; it comes from the validating
/// constructors before any conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        calendar: Calendar,
        year: i32,
        month: u8,
        day: u8,
    },
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "{calendar} date {year}-{month:02}-{day:02} is outside the supported range")]
    UnsupportedRange {
        calendar: Calendar,
        year: i32,
        month: u8,
        day: u8,
    },
}

impl std::error::Error for DateError {}
