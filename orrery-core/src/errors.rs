//! Error types shared across the orrery crates.
//!
//! Each layer gets a small structured enum rather than a stringly-typed
//! catch-all: callers can match on the variant and tests can assert on the
//! offending values. Higher layers wrap lower ones with `#[from]` (see
//! `orrery-engine`'s error type).

use crate::Body;
use thiserror::Error;

/// Errors from calendar arithmetic on [`SimInstant`](crate::SimInstant).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    #[error("month {month} out of range (valid range: 1-12)")]
    InvalidMonth { month: u32 },

    #[error("day {day} invalid for {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
}

impl TimeError {
    pub fn invalid_month(month: u32) -> Self {
        Self::InvalidMonth { month }
    }

    pub fn invalid_day(year: i32, month: u32, day: u32) -> Self {
        Self::InvalidDay { year, month, day }
    }
}

/// Errors an [`Ephemeris`](crate::Ephemeris) implementation may report.
///
/// The Kepler backend shipped in `orrery-ephemeris` is total and never
/// returns these; backends with bounded data coverage (numerical series,
/// file-based ephemerides) use them to refuse a lookup instead of
/// extrapolating silently.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EphemerisError {
    #[error("no ephemeris model for body {body}")]
    UnsupportedBody { body: Body },

    #[error("JD {jd} outside ephemeris coverage for {body} (valid range: {min_jd}-{max_jd})")]
    OutOfRange {
        body: Body,
        jd: f64,
        min_jd: f64,
        max_jd: f64,
    },
}

impl EphemerisError {
    pub fn unsupported_body(body: Body) -> Self {
        Self::UnsupportedBody { body }
    }

    pub fn out_of_range(body: Body, jd: f64, min_jd: f64, max_jd: f64) -> Self {
        Self::OutOfRange {
            body,
            jd,
            min_jd,
            max_jd,
        }
    }
}

pub type TimeResult<T> = Result<T, TimeError>;

pub type EphemerisResult<T> = Result<T, EphemerisError>;
