//! Sources of the current civil date.
//!
//! The time zone is explicit configuration handed to [`SystemClock::new`];
//! nothing here reads or caches process-wide state. Tests inject a
//! [`FixedClock`] instead.

use chrono::{FixedOffset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{DateError, GregorianDate, JalaliDate};

/// Time zone used when none is configured
pub const DEFAULT_TIME_ZONE: &str = "Asia/Tehran";

/// Iran Standard Time, +03:30
pub const DEFAULT_FALLBACK_OFFSET_SECONDS: i32 = 12_600;

/// Where "today" is observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// IANA time zone name, e.g. `Asia/Tehran`
    pub time_zone: String,
    /// Fixed UTC offset used when `time_zone` is not a known IANA name
    pub fallback_offset_seconds: i32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_owned(),
            fallback_offset_seconds: DEFAULT_FALLBACK_OFFSET_SECONDS,
        }
    }
}

/// Error type for clock construction and reads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Fallback offset is not strictly within one day of UTC.
    #[error("Invalid fallback offset: {0} seconds")]
    InvalidOffset(i32),

    /// The clock's date has no valid representation.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// A source of the current Gregorian civil date.
pub trait Clock {
    /// Returns today's date in this clock's time zone
    ///
    /// # Errors
    /// Returns `ClockError::Date` if today lies outside the supported range.
    fn today(&self) -> Result<GregorianDate, ClockError>;

    /// Returns today's date converted to the Jalali calendar
    ///
    /// # Errors
    /// Same as [`Clock::today`].
    fn today_jalali(&self) -> Result<JalaliDate, ClockError> {
        self.today().map(JalaliDate::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Named(Tz),
    Fixed(FixedOffset),
}

/// Reads the system wall clock in a configured time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    zone: Zone,
}

impl SystemClock {
    /// Resolves the configured time zone.
    /// An unknown zone name falls back to the fixed offset.
    ///
    /// # Errors
    /// Returns `ClockError::InvalidOffset` if the fallback offset is out of range.
    pub fn new(config: &ClockConfig) -> Result<Self, ClockError> {
        let fallback = FixedOffset::east_opt(config.fallback_offset_seconds)
            .ok_or(ClockError::InvalidOffset(config.fallback_offset_seconds))?;

        let zone = match config.time_zone.parse::<Tz>() {
            Ok(tz) => {
                debug!("resolved time zone {}", tz.name());
                Zone::Named(tz)
            }
            Err(_) => {
                warn!(
                    "unknown time zone {:?}, using fixed offset {}",
                    config.time_zone, fallback
                );
                Zone::Fixed(fallback)
            }
        };

        Ok(Self { zone })
    }

    /// Whether the configured zone name failed to resolve
    pub const fn is_fallback(&self) -> bool {
        matches!(self.zone, Zone::Fixed(_))
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Result<GregorianDate, ClockError> {
        let now = Utc::now();
        let date = match self.zone {
            Zone::Named(tz) => now.with_timezone(&tz).date_naive(),
            Zone::Fixed(offset) => now.with_timezone(&offset).date_naive(),
        };
        trace!("system clock reads {date}");
        Ok(GregorianDate::try_from(date)?)
    }
}

/// A clock frozen on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: GregorianDate,
}

impl FixedClock {
    pub const fn new(date: GregorianDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<GregorianDate, ClockError> {
        Ok(self.date)
    }
}
