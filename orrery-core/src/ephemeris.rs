//! The ephemeris seam.
//!
//! The engine never computes orbital positions itself; it asks an
//! [`Ephemeris`] for them. `orrery-ephemeris` ships a self-contained
//! mean-element implementation, tests substitute synthetic ones, and a
//! deployment wanting higher accuracy can wrap a numerical series behind
//! the same trait without touching the engine.

use crate::errors::EphemerisResult;
use crate::{Body, SimInstant, Vector3};

/// Source of heliocentric body positions.
///
/// Implementations return the body's position relative to the Sun in
/// astronomical units on J2000 equatorial axes. The Sun itself is the
/// frame origin, so `heliocentric_position(Body::Sun, _)` is `(0, 0, 0)`
/// for every conforming implementation (callers may rely on it and skip
/// the lookup).
///
/// A lookup is a pure function of `(body, instant)`: same inputs, same
/// vector, no interior state. The engine's determinism guarantee is built
/// on that.
pub trait Ephemeris {
    /// Heliocentric position of `body` at `instant`, in AU.
    fn heliocentric_position(&self, body: Body, instant: SimInstant) -> EphemerisResult<Vector3>;
}

/// References to an implementation are implementations themselves, so a
/// borrowed or boxed backend can be handed to the engine unchanged.
impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn heliocentric_position(&self, body: Body, instant: SimInstant) -> EphemerisResult<Vector3> {
        (**self).heliocentric_position(body, instant)
    }
}
