use crate::consts::{
    MAX_GREGORIAN_DATE, MAX_JALALI_DATE, MAX_MONTH, MIN_DAY, MIN_GREGORIAN_DATE, MIN_JALALI_DATE,
};
use crate::convert::{
    gregorian_days_in_month, gregorian_to_jalali, is_gregorian_leap_year, is_jalali_leap_year,
    jalali_days_in_month, jalali_to_gregorian, weekday_index,
};
use crate::names::{PersianMonth, PersianWeekday};
use crate::prelude::*;
use crate::DateError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The calendar a date triple is numbered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Calendar {
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Jalali")]
    Jalali,
}

impl Calendar {
    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Gregorian => is_gregorian_leap_year(year),
            Self::Jalali => is_jalali_leap_year(year),
        }
    }

    pub const fn days_in_month(self, year: i32, month: u8) -> u8 {
        match self {
            Self::Gregorian => gregorian_days_in_month(year, month),
            Self::Jalali => jalali_days_in_month(year, month),
        }
    }

    /// Earliest and latest supported dates, both inclusive
    pub const fn supported_range(self) -> ((i32, u8, u8), (i32, u8, u8)) {
        match self {
            Self::Gregorian => (MIN_GREGORIAN_DATE, MAX_GREGORIAN_DATE),
            Self::Jalali => (MIN_JALALI_DATE, MAX_JALALI_DATE),
        }
    }

    /// Checks the month and day against this calendar's rules, then the
    /// triple against the supported range.
    fn validate(self, year: i32, month: u8, day: u8) -> Result<(), DateError> {
        if month == 0
            || month > MAX_MONTH
            || day < MIN_DAY
            || day > self.days_in_month(year, month)
        {
            return Err(DateError::InvalidDate {
                calendar: self,
                year,
                month,
                day,
            });
        }

        let (min, max) = self.supported_range();
        if (year, month, day) < min || (year, month, day) > max {
            return Err(DateError::UnsupportedRange {
                calendar: self,
                year,
                month,
                day,
            });
        }

        Ok(())
    }
}

/// A proleptic Gregorian date within `MIN_GREGORIAN_DATE..=MAX_GREGORIAN_DATE`.
///
/// Ordering is chronological.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
#[serde(try_from = "(i32, u8, u8)", into = "(i32, u8, u8)")]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new Gregorian date, validating month, day and leap day
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the month or day is invalid for the year,
    /// or `DateError::UnsupportedRange` if the date lies outside years 1-9999.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Calendar::Gregorian.validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(self) -> bool {
        is_gregorian_leap_year(self.year)
    }

    pub const fn days_in_month(self) -> u8 {
        gregorian_days_in_month(self.year, self.month)
    }

    /// Converts to the equivalent Jalali date
    pub const fn to_jalali(self) -> JalaliDate {
        let (year, month, day) = gregorian_to_jalali(self.year, self.month, self.day);
        JalaliDate { year, month, day }
    }

    /// Day of the week, Saturday first
    pub const fn weekday(self) -> PersianWeekday {
        PersianWeekday::from_index(weekday_index(self.year, self.month, self.day))
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        // chrono keeps month in 1..=12 and day in 1..=31
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

/// A Jalali (Solar Hijri) date within `MIN_JALALI_DATE..=MAX_JALALI_DATE`.
///
/// Ordering is chronological.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
#[serde(try_from = "(i32, u8, u8)", into = "(i32, u8, u8)")]
pub struct JalaliDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl JalaliDate {
    /// Creates a new Jalali date, validating month, day and Esfand 30
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the month or day is invalid for the year,
    /// or `DateError::UnsupportedRange` if the date has no Gregorian counterpart in years 1-9999.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Calendar::Jalali.validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    pub const fn persian_month(self) -> PersianMonth {
        PersianMonth::ALL[(self.month - 1) as usize]
    }

    pub const fn is_leap_year(self) -> bool {
        is_jalali_leap_year(self.year)
    }

    pub const fn days_in_month(self) -> u8 {
        jalali_days_in_month(self.year, self.month)
    }

    /// Converts to the equivalent Gregorian date
    pub const fn to_gregorian(self) -> GregorianDate {
        let (year, month, day) = jalali_to_gregorian(self.year, self.month, self.day);
        GregorianDate { year, month, day }
    }

    /// Day of the week, derived from the actual date rather than the day of month
    pub const fn weekday(self) -> PersianWeekday {
        self.to_gregorian().weekday()
    }
}

impl TryFrom<(i32, u8, u8)> for JalaliDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        date.to_jalali()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_new_cases() {
        struct TestCase {
            date:        (i32, u8, u8),
            is_valid:    bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        (2024, 2, 29),
                is_valid:    true,
                description: "leap day in leap year",
            },
            TestCase {
                date:        (2023, 2, 29),
                is_valid:    false,
                description: "leap day in common year",
            },
            TestCase {
                date:        (1900, 2, 29),
                is_valid:    false,
                description: "century not divisible by 400",
            },
            TestCase {
                date:        (2000, 2, 29),
                is_valid:    true,
                description: "century divisible by 400",
            },
            TestCase {
                date:        (2024, 4, 31),
                is_valid:    false,
                description: "day 31 in a 30-day month",
            },
            TestCase {
                date:        (2024, 0, 1),
                is_valid:    false,
                description: "month zero",
            },
            TestCase {
                date:        (2024, 1, 0),
                is_valid:    false,
                description: "day zero",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let result = GregorianDate::new(y, m, d);
            if case.is_valid {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(
                    matches!(result, Err(DateError::InvalidDate { .. })),
                    "Expected InvalidDate for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_jalali_new_cases() {
        // 31-day months
        assert!(JalaliDate::new(1403, 6, 31).is_ok());
        // 30-day months
        assert!(JalaliDate::new(1403, 7, 30).is_ok());
        assert!(matches!(
            JalaliDate::new(1403, 7, 31),
            Err(DateError::InvalidDate { .. })
        ));
        // Esfand
        assert!(JalaliDate::new(1402, 12, 29).is_ok());
        assert!(JalaliDate::new(1403, 12, 30).is_ok());
        assert!(matches!(
            JalaliDate::new(1403, 12, 31),
            Err(DateError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_supported_range() {
        assert!(GregorianDate::new(1, 1, 1).is_ok());
        assert!(GregorianDate::new(9999, 12, 31).is_ok());
        assert!(matches!(
            GregorianDate::new(0, 12, 31),
            Err(DateError::UnsupportedRange { year: 0, .. })
        ));

        assert!(JalaliDate::new(-621, 10, 11).is_ok());
        assert!(JalaliDate::new(9378, 10, 10).is_ok());
        assert!(matches!(
            JalaliDate::new(-621, 10, 10),
            Err(DateError::UnsupportedRange {
                calendar: Calendar::Jalali,
                ..
            })
        ));
        assert!(matches!(
            JalaliDate::new(9378, 10, 11),
            Err(DateError::UnsupportedRange { .. })
        ));
    }

    #[test]
    fn test_range_extremes_convert() {
        let first = GregorianDate::new(1, 1, 1).unwrap();
        assert_eq!(first.to_jalali(), JalaliDate::new(-621, 10, 11).unwrap());

        let last = JalaliDate::new(9378, 10, 10).unwrap();
        assert_eq!(last.to_gregorian(), GregorianDate::new(9999, 12, 31).unwrap());
    }

    #[test]
    fn test_accessors() {
        let date = JalaliDate::new(1357, 11, 22).unwrap();
        assert_eq!(date.year(), 1357);
        assert_eq!(date.month(), 11);
        assert_eq!(date.day(), 22);
        assert_eq!(date.persian_month(), PersianMonth::Bahman);
        assert_eq!(date.days_in_month(), 30);
        assert!(!date.is_leap_year());

        let date = GregorianDate::new(2024, 2, 10).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 10));
        assert_eq!(date.days_in_month(), 29);
        assert!(date.is_leap_year());
    }

    #[test]
    fn test_weekday() {
        let y2k = GregorianDate::new(2000, 1, 1).unwrap();
        assert_eq!(y2k.weekday(), PersianWeekday::Shanbe);
        assert_eq!(y2k.to_jalali().weekday(), PersianWeekday::Shanbe);

        // Nowruz 1403 fell on a Wednesday
        let nowruz = JalaliDate::new(1403, 1, 1).unwrap();
        assert_eq!(nowruz.weekday(), PersianWeekday::Chaharshanbe);

        // Same day of month, different weekday
        let next_month = JalaliDate::new(1403, 2, 1).unwrap();
        assert_eq!(next_month.weekday(), PersianWeekday::Shanbe);
    }

    #[test]
    fn test_ordering() {
        let d1 = JalaliDate::new(1402, 12, 29).unwrap();
        let d2 = JalaliDate::new(1403, 1, 1).unwrap();
        let d3 = JalaliDate::new(1403, 1, 2).unwrap();
        assert!(d1 < d2);
        assert!(d2 < d3);
        assert!(d1.to_gregorian() < d2.to_gregorian());
    }

    #[test]
    fn test_display() {
        assert_eq!(JalaliDate::new(1403, 1, 1).unwrap().to_string(), "1403-01-01");
        assert_eq!(GregorianDate::new(33, 8, 5).unwrap().to_string(), "0033-08-05");
        assert_eq!(JalaliDate::new(-500, 7, 9).unwrap().to_string(), "-500-07-09");
        assert_eq!(Calendar::Jalali.to_string(), "Jalali");
    }

    #[test]
    fn test_tuple_conversions() {
        let date: JalaliDate = (1400, 1, 1).try_into().unwrap();
        let value: (i32, u8, u8) = date.into();
        assert_eq!(value, (1400, 1, 1));

        let result: Result<GregorianDate, _> = (2021, 2, 29).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_conversions() {
        let gregorian = GregorianDate::new(2021, 3, 21).unwrap();
        let jalali = JalaliDate::from(gregorian);
        assert_eq!(jalali, JalaliDate::new(1400, 1, 1).unwrap());
        assert_eq!(GregorianDate::from(jalali), gregorian);
    }

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let date = GregorianDate::try_from(naive).unwrap();
        assert_eq!(date, GregorianDate::new(2024, 3, 20).unwrap());

        let naive = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert!(matches!(
            GregorianDate::try_from(naive),
            Err(DateError::UnsupportedRange { .. })
        ));
    }

    #[test]
    fn test_serde() {
        let date = JalaliDate::new(1403, 12, 30).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "[1403,12,30]");

        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Esfand 30 in a common year
        let result: Result<JalaliDate, _> = serde_json::from_str("[1402,12,30]");
        assert!(result.is_err());

        // Month 13
        let result: Result<GregorianDate, _> = serde_json::from_str("[2024,13,1]");
        assert!(result.is_err());

        let result: Result<GregorianDate, _> = serde_json::from_str("[2024,2,29]");
        assert!(result.is_ok());
    }

    #[test]
    fn test_calendar_rules() {
        assert!(Calendar::Jalali.is_leap_year(1403));
        assert!(!Calendar::Gregorian.is_leap_year(1900));
        assert_eq!(Calendar::Jalali.days_in_month(1403, 12), 30);
        assert_eq!(Calendar::Gregorian.days_in_month(2023, 2), 28);
        assert_eq!(
            Calendar::Jalali.supported_range(),
            (MIN_JALALI_DATE, MAX_JALALI_DATE)
        );
    }
}
