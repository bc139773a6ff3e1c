/// Earliest supported Gregorian date (inclusive)
pub const MIN_GREGORIAN_DATE: (i32, u8, u8) = (1, 1, 1);
/// Latest supported Gregorian date (inclusive)
pub const MAX_GREGORIAN_DATE: (i32, u8, u8) = (9999, 12, 31);

/// Jalali image of `MIN_GREGORIAN_DATE`
pub const MIN_JALALI_DATE: (i32, u8, u8) = (-621, 10, 11);
/// Jalali image of `MAX_GREGORIAN_DATE`
pub const MAX_JALALI_DATE: (i32, u8, u8) = (9378, 10, 10);

/// Maximum valid month in both calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Esfand, the last Jalali month
pub const ESFAND: u8 = 12;

/// Days in February for Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for Jalali leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Maximum days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_jalali_leap_year check)
];

/// Days elapsed in a common Gregorian year before the first of each month
pub const GREGORIAN_DAYS_BEFORE_MONTH: [u16; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days elapsed in a Jalali year before the first of each month
pub const JALALI_DAYS_BEFORE_MONTH: [u16; 12] =
    [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Length of the Jalali leap cycle in years
pub(crate) const JALALI_CYCLE: i32 = 33;
/// Leap years in each Jalali cycle
pub(crate) const JALALI_LEAPS_PER_CYCLE: i32 = 8;

pub(crate) const DAYS_PER_YEAR: i32 = 365;
pub(crate) const DAYS_PER_4_YEARS: i32 = 1461;
pub(crate) const DAYS_PER_CENTURY: i32 = 36_524;
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;
/// `33 * 365 + 8`
pub(crate) const DAYS_PER_JALALI_CYCLE: i32 = 12_053;
/// Days in the six 31-day months opening the Jalali year
pub(crate) const JALALI_FIRST_HALF_DAYS: i32 = 186;
pub(crate) const JALALI_LONG_MONTH: i32 = 31;
pub(crate) const JALALI_SHORT_MONTH: i32 = 30;

/// Aligns Gregorian day 0 with the Jalali day count
pub(crate) const GREGORIAN_EPOCH_OFFSET: i32 = 355_666;
/// Aligns the Jalali day count with the Gregorian proleptic day count
pub(crate) const JALALI_EPOCH_OFFSET: i32 = -355_668;
/// Shifts Jalali years so the 33-year cycle arithmetic starts at zero
pub(crate) const JALALI_YEAR_SHIFT: i32 = 1595;

/// Shifts `gregorian_day_number` so that Saturday lands on 0
pub(crate) const WEEKDAY_SHIFT: i32 = 3;
pub(crate) const DAYS_PER_WEEK: i32 = 7;
