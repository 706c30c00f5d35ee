//! Tuning constants for projection geometry, trail sampling and playback.

/// Schematic ring radius of the innermost planet, in render units.
pub const SCHEMATIC_BASE_RADIUS: f64 = 90.0;

/// Radial spacing between adjacent schematic rings, in render units.
pub const SCHEMATIC_RING_GAP: f64 = 65.0;

/// Trail window at playback speed 1, in simulated days.
pub const BASE_TRAIL_DURATION_DAYS: f64 = 50.0;

/// Trail sample spacing at playback speed 1, in simulated days.
pub const BASE_TRAIL_STEP_DAYS: f64 = 1.0;

/// Hard cap on historical trail samples per body.
pub const MAX_TRAIL_STEPS: usize = 300;

/// Floor applied to the playback speed before cadence math.
pub const MIN_CADENCE_SPEED: f64 = 0.1;

/// Lookback used for the retrograde test, in simulated days.
pub const RETROGRADE_SAMPLE_DAYS: f64 = 1.0;

/// Wall-clock milliseconds that one simulated year occupies at speed 1.
pub const REALTIME_MS_PER_YEAR: f64 = 3000.0;

/// Below this heliocentric distance a bearing is treated as undefined.
pub const DIRECTION_EPSILON: f64 = 1e-6;

/// Playback speeds offered by the stock control surface.
pub const SPEED_PRESETS: [f64; 5] = [0.1, 0.5, 1.0, 2.0, 5.0];
