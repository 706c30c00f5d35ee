pub const J2000_JD: f64 = 2451545.0;

/// Julian day of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWO_PI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Mean obliquity of the ecliptic at J2000, in degrees.
///
/// Fixed display-convention value; the slow secular drift is irrelevant at
/// schematic-layout precision.
pub const MEAN_OBLIQUITY_DEG: f64 = 23.43928;

#[allow(clippy::excessive_precision)]
pub const MEAN_OBLIQUITY_RAD: f64 = MEAN_OBLIQUITY_DEG * PI / 180.0;
