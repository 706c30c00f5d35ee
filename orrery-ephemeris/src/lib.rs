//! Self-contained Kepler ephemeris.
//!
//! [`KeplerEphemeris`] implements [`Ephemeris`] from J2000 mean orbital
//! elements with linear secular rates: no data files, no network, no
//! per-lookup state. Accuracy is in the arcminute class within the
//! 1800-2050 element fit, which is orders of magnitude tighter than the
//! schematic projections consuming it; outside that range positions stay
//! smooth and plausible but drift from the true orbits.
//!
//! ```
//! use orrery_core::{Body, Ephemeris, SimInstant};
//! use orrery_ephemeris::KeplerEphemeris;
//!
//! let ephemeris = KeplerEphemeris::new();
//! let earth = ephemeris
//!     .heliocentric_position(Body::Earth, SimInstant::J2000)
//!     .unwrap();
//!
//! let distance = earth.magnitude();
//! assert!(distance > 0.97 && distance < 1.03);
//! ```

mod elements;
mod kepler;

use orrery_core::{Body, Ephemeris, EphemerisResult, SimInstant, Vector3};

/// Mean-element heliocentric ephemeris for the ten catalog bodies.
///
/// Total over `(body, instant)`: every lookup succeeds, for any calendar
/// date. The Sun is the frame origin and returns the zero vector without
/// computation.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeplerEphemeris;

impl KeplerEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl Ephemeris for KeplerEphemeris {
    fn heliocentric_position(&self, body: Body, instant: SimInstant) -> EphemerisResult<Vector3> {
        Ok(match elements::lookup(body) {
            Some(el) => kepler::position_au(el, instant),
            None => Vector3::zeros(),
        })
    }
}
