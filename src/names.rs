//! Month and weekday enumerations of the Jalali calendar.
//!
//! Each carries its Persian-script name and an English transliteration.

use std::fmt;

use crate::consts::{ESFAND_DAYS_LEAP, JALALI_DAYS_IN_MONTH};
use crate::DateError;

/// A month of the Jalali calendar, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PersianMonth {
    Farvardin = 1,
    Ordibehesht = 2,
    Khordad = 3,
    Tir = 4,
    Mordad = 5,
    Shahrivar = 6,
    Mehr = 7,
    Aban = 8,
    Azar = 9,
    Dey = 10,
    Bahman = 11,
    Esfand = 12,
}

impl PersianMonth {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::Farvardin,
        Self::Ordibehesht,
        Self::Khordad,
        Self::Tir,
        Self::Mordad,
        Self::Shahrivar,
        Self::Mehr,
        Self::Aban,
        Self::Azar,
        Self::Dey,
        Self::Bahman,
        Self::Esfand,
    ];

    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Persian-script name, e.g. `فروردین`
    pub const fn persian_name(self) -> &'static str {
        match self {
            Self::Farvardin => "فروردین",
            Self::Ordibehesht => "اردیبهشت",
            Self::Khordad => "خرداد",
            Self::Tir => "تیر",
            Self::Mordad => "مرداد",
            Self::Shahrivar => "شهریور",
            Self::Mehr => "مهر",
            Self::Aban => "آبان",
            Self::Azar => "آذر",
            Self::Dey => "دی",
            Self::Bahman => "بهمن",
            Self::Esfand => "اسفند",
        }
    }

    /// English transliteration, e.g. `Farvardin`
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Farvardin => "Farvardin",
            Self::Ordibehesht => "Ordibehesht",
            Self::Khordad => "Khordad",
            Self::Tir => "Tir",
            Self::Mordad => "Mordad",
            Self::Shahrivar => "Shahrivar",
            Self::Mehr => "Mehr",
            Self::Aban => "Aban",
            Self::Azar => "Azar",
            Self::Dey => "Dey",
            Self::Bahman => "Bahman",
            Self::Esfand => "Esfand",
        }
    }

    /// Length of the month; only Esfand depends on `is_leap`
    pub const fn days(self, is_leap: bool) -> u8 {
        match self {
            Self::Esfand if is_leap => ESFAND_DAYS_LEAP,
            _ => JALALI_DAYS_IN_MONTH[self as usize],
        }
    }
}

impl TryFrom<u8> for PersianMonth {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=12 => Ok(Self::ALL[(value - 1) as usize]),
            _ => Err(DateError::InvalidMonth(value)),
        }
    }
}

impl From<PersianMonth> for u8 {
    fn from(month: PersianMonth) -> Self {
        month.number()
    }
}

impl fmt::Display for PersianMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.persian_name())
    }
}

/// A day of the Persian week, which starts on Saturday (index 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PersianWeekday {
    /// Saturday
    Shanbe = 0,
    /// Sunday
    Yekshanbe = 1,
    /// Monday
    Doshanbe = 2,
    /// Tuesday
    Seshanbe = 3,
    /// Wednesday
    Chaharshanbe = 4,
    /// Thursday
    Panjshanbe = 5,
    /// Friday
    Jome = 6,
}

impl PersianWeekday {
    /// All weekdays starting from Saturday
    pub const ALL: [Self; 7] = [
        Self::Shanbe,
        Self::Yekshanbe,
        Self::Doshanbe,
        Self::Seshanbe,
        Self::Chaharshanbe,
        Self::Panjshanbe,
        Self::Jome,
    ];

    /// Weekday for an index counted from Saturday; wraps modulo 7
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Persian-script name, e.g. `شنبه`
    pub const fn persian_name(self) -> &'static str {
        match self {
            Self::Shanbe => "شنبه",
            Self::Yekshanbe => "یکشنبه",
            Self::Doshanbe => "دوشنبه",
            Self::Seshanbe => "سه\u{200c}شنبه",
            Self::Chaharshanbe => "چهارشنبه",
            Self::Panjshanbe => "پنجشنبه",
            Self::Jome => "جمعه",
        }
    }

    /// English transliteration, e.g. `Shanbe`
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Shanbe => "Shanbe",
            Self::Yekshanbe => "Yekshanbe",
            Self::Doshanbe => "Doshanbe",
            Self::Seshanbe => "Seshanbe",
            Self::Chaharshanbe => "Chaharshanbe",
            Self::Panjshanbe => "Panjshanbe",
            Self::Jome => "Jome",
        }
    }
}

impl From<chrono::Weekday> for PersianWeekday {
    fn from(weekday: chrono::Weekday) -> Self {
        // Monday is 0 in chrono and 2 here
        Self::from_index(weekday.num_days_from_monday() as u8 + 2)
    }
}

impl fmt::Display for PersianWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.persian_name())
    }
}
