//! Day-counting conversion between the Gregorian and Jalali calendars.
//!
//! Every function here is a pure `const fn` over raw `(year, month, day)`
//! triples. Nothing is validated: callers go through [`GregorianDate`] or
//! [`JalaliDate`] to reject invalid or out-of-range input first.
//!
//! [`GregorianDate`]: crate::GregorianDate
//! [`JalaliDate`]: crate::JalaliDate

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_4_YEARS, DAYS_PER_400_YEARS, DAYS_PER_CENTURY, DAYS_PER_JALALI_CYCLE,
    DAYS_PER_WEEK, DAYS_PER_YEAR, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, GREGORIAN_DAYS_BEFORE_MONTH, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH_OFFSET,
    JALALI_CYCLE, JALALI_DAYS_BEFORE_MONTH, JALALI_DAYS_IN_MONTH, JALALI_EPOCH_OFFSET,
    JALALI_FIRST_HALF_DAYS, JALALI_LEAPS_PER_CYCLE, JALALI_LONG_MONTH, JALALI_SHORT_MONTH,
    JALALI_YEAR_SHIFT, LEAP_YEAR_CYCLE, MAX_MONTH, WEEKDAY_SHIFT,
};

/// Converts a Gregorian `(year, month, day)` to the equivalent Jalali date.
pub const fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    let mut days = gregorian_day_number(year, month, day);

    let mut jy = -JALALI_YEAR_SHIFT + JALALI_CYCLE * (days / DAYS_PER_JALALI_CYCLE);
    days %= DAYS_PER_JALALI_CYCLE;

    jy += LEAP_YEAR_CYCLE * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;

    // The first year of each 4-year block carries the extra day
    if days > DAYS_PER_YEAR {
        jy += (days - 1) / DAYS_PER_YEAR;
        days = (days - 1) % DAYS_PER_YEAR;
    }

    let (jm, jd) = if days < JALALI_FIRST_HALF_DAYS {
        (1 + days / JALALI_LONG_MONTH, 1 + days % JALALI_LONG_MONTH)
    } else {
        let rest = days - JALALI_FIRST_HALF_DAYS;
        (7 + rest / JALALI_SHORT_MONTH, 1 + rest % JALALI_SHORT_MONTH)
    };

    (jy, jm as u8, jd as u8)
}

/// Converts a Jalali `(year, month, day)` to the equivalent Gregorian date.
///
/// Exact inverse of [`gregorian_to_jalali`] over the supported range.
pub const fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    let shifted = year + JALALI_YEAR_SHIFT;

    let mut days = JALALI_EPOCH_OFFSET
        + DAYS_PER_YEAR * shifted
        + (shifted / JALALI_CYCLE) * JALALI_LEAPS_PER_CYCLE
        + ((shifted % JALALI_CYCLE) + 3) / LEAP_YEAR_CYCLE
        + day as i32
        + JALALI_DAYS_BEFORE_MONTH[(month - 1) as usize] as i32;

    let mut gy = GREGORIAN_CYCLE * (days / DAYS_PER_400_YEARS);
    days %= DAYS_PER_400_YEARS;

    // Only the first century of a 400-year block has a leap year at its start
    if days > DAYS_PER_CENTURY {
        days -= 1;
        gy += CENTURY_CYCLE * (days / DAYS_PER_CENTURY);
        days %= DAYS_PER_CENTURY;
        if days >= DAYS_PER_YEAR {
            days += 1;
        }
    }

    gy += LEAP_YEAR_CYCLE * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;

    if days > DAYS_PER_YEAR {
        gy += (days - 1) / DAYS_PER_YEAR;
        days = (days - 1) % DAYS_PER_YEAR;
    }

    let mut gd = days + 1;
    let mut gm = 1;
    while gm < MAX_MONTH && gd > gregorian_days_in_month(gy, gm) as i32 {
        gd -= gregorian_days_in_month(gy, gm) as i32;
        gm += 1;
    }

    (gy, gm, gd as u8)
}

/// Reports whether a Jalali year has 366 days (Esfand has 30 days).
///
/// Leap years sit at positions 1, 5, 9, 13, 17, 22, 26 and 30 of each
/// 33-year cycle. Negative years use the non-negative residue.
pub const fn is_jalali_leap_year(year: i32) -> bool {
    matches!(
        year.rem_euclid(JALALI_CYCLE),
        1 | 5 | 9 | 13 | 17 | 22 | 26 | 30
    )
}

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

pub const fn jalali_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_jalali_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month as usize]
    }
}

/// Absolute day count of a Gregorian date, aligned with the Jalali epoch.
///
/// Consecutive dates differ by exactly one. The leap correction counts
/// February of `year` only once March has started.
pub const fn gregorian_day_number(year: i32, month: u8, day: u8) -> i32 {
    let leap_year = if month > FEBRUARY { year + 1 } else { year };

    GREGORIAN_EPOCH_OFFSET
        + DAYS_PER_YEAR * year
        + (leap_year + 3) / LEAP_YEAR_CYCLE
        - (leap_year + 99) / CENTURY_CYCLE
        + (leap_year + 399) / GREGORIAN_CYCLE
        + day as i32
        + GREGORIAN_DAYS_BEFORE_MONTH[(month - 1) as usize] as i32
}

/// Day of week of a Gregorian date, Saturday = 0 through Friday = 6.
pub(crate) const fn weekday_index(year: i32, month: u8, day: u8) -> u8 {
    (gregorian_day_number(year, month, day) + WEEKDAY_SHIFT).rem_euclid(DAYS_PER_WEEK) as u8
}
