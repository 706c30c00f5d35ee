//! Simulated instants.
//!
//! An instant is a Julian day held in one `f64`. That gives microsecond
//! resolution across the whole modern era, which is far below the day-level
//! granularity anything in the engine cares about, while keeping instant
//! arithmetic (offset by fractional days, difference in days, clamping to a
//! range) single-operation cheap.
//!
//! Calendar conversion is proleptic Gregorian at midnight UTC. Leap seconds
//! are ignored; the engine simulates calendar time, not atomic time.
//!
//! ```
//! use orrery_core::SimInstant;
//!
//! let epoch = SimInstant::from_calendar(1970, 1, 1).unwrap();
//! assert_eq!(epoch, SimInstant::UNIX_EPOCH);
//!
//! let later = epoch.add_days(365.25);
//! assert_eq!(later.days_since(epoch), 365.25);
//! ```

use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, MILLISECONDS_PER_DAY, MJD_ZERO_POINT, UNIX_EPOCH_JD,
};
use crate::errors::{TimeError, TimeResult};
use std::fmt;
use std::time::SystemTime;

/// One simulated instant, as a Julian day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimInstant {
    jd: f64,
}

impl SimInstant {
    /// 2000-01-01T12:00:00 TT, the epoch the mean-element tables are fit at.
    pub const J2000: SimInstant = SimInstant { jd: J2000_JD };

    /// 1970-01-01T00:00:00 UTC.
    pub const UNIX_EPOCH: SimInstant = SimInstant { jd: UNIX_EPOCH_JD };

    /// Creates an instant from a raw Julian day value.
    #[inline]
    pub const fn from_julian_day(jd: f64) -> Self {
        Self { jd }
    }

    /// Creates an instant at midnight UTC of a proleptic Gregorian date.
    ///
    /// Validates the month and the day-of-month (including leap years)
    /// before converting with the standard integer Julian-day algorithm.
    ///
    /// ```
    /// use orrery_core::SimInstant;
    ///
    /// let d = SimInstant::from_calendar(2000, 1, 1).unwrap();
    /// assert_eq!(d.julian_day(), 2451544.5);
    ///
    /// assert!(SimInstant::from_calendar(2023, 2, 29).is_err());
    /// ```
    pub fn from_calendar(year: i32, month: u32, day: u32) -> TimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::invalid_month(month));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::invalid_day(year, month, day));
        }

        let my = (month as i64 - 14) / 12;
        let iypmy = year as i64 + my;
        let mjd = (1461 * (iypmy + 4800)) / 4
            + (367 * (month as i64 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i64
            - 2432076;

        Ok(Self {
            jd: MJD_ZERO_POINT + mjd as f64,
        })
    }

    /// Creates an instant from milliseconds since the Unix epoch.
    #[inline]
    pub fn from_unix_ms(ms: f64) -> Self {
        Self {
            jd: UNIX_EPOCH_JD + ms / MILLISECONDS_PER_DAY,
        }
    }

    /// The current wall-clock instant.
    pub fn now() -> Self {
        match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
            Ok(since) => Self::from_unix_ms(since.as_secs_f64() * 1_000.0),
            Err(before) => Self::from_unix_ms(-before.duration().as_secs_f64() * 1_000.0),
        }
    }

    /// The raw Julian day value.
    #[inline]
    pub const fn julian_day(self) -> f64 {
        self.jd
    }

    /// Julian centuries elapsed since J2000, the time argument of
    /// mean-element ephemerides.
    #[inline]
    pub fn julian_centuries(self) -> f64 {
        (self.jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }

    /// This instant shifted by a (possibly fractional, possibly negative)
    /// number of days.
    #[inline]
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd: self.jd + days,
        }
    }

    /// Days elapsed from `earlier` to this instant (negative if this
    /// instant comes first).
    #[inline]
    pub fn days_since(self, earlier: SimInstant) -> f64 {
        self.jd - earlier.jd
    }

    /// This instant clamped into `[lo, hi]`.
    #[inline]
    #[must_use]
    pub fn clamp(self, lo: SimInstant, hi: SimInstant) -> Self {
        if self.jd < lo.jd {
            lo
        } else if self.jd > hi.jd {
            hi
        } else {
            self
        }
    }

    /// The proleptic Gregorian `(year, month, day)` containing this
    /// instant.
    ///
    /// Valid for the AD era (the integer divisions assume a positive
    /// shifted day number).
    pub fn to_calendar(self) -> (i32, u32, u32) {
        let jdn = libm::floor(self.jd + 0.5) as i64;
        let a = jdn + 32044;
        let b = (4 * a + 3) / 146097;
        let c = a - (146097 * b) / 4;
        let d = (4 * c + 3) / 1461;
        let e = c - (1461 * d) / 4;
        let m = (5 * e + 2) / 153;

        let day = (e - (153 * m + 2) / 5 + 1) as u32;
        let month = (m + 3 - 12 * (m / 10)) as u32;
        let year = (100 * b + d - 4800 + m / 10) as i32;

        (year, month, day)
    }
}

impl fmt::Display for SimInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_calendar();
        write!(f, "{:04}-{:02}-{:02}", year, month, day)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
