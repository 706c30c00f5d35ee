//! Plane positions for the whole catalog at one instant.

use crate::errors::EngineResult;
use orrery_core::constants::MEAN_OBLIQUITY_RAD;
use orrery_core::{Body, Ephemeris, SimInstant, Vec2};

/// Heliocentric plane positions of every catalog body at one instant.
///
/// Building a snapshot flattens each 3D ephemeris vector onto the viewing
/// plane. With ecliptic alignment on, the equatorial y/z components are
/// rotated by the mean obliquity so orbits lie flat in the view; with it
/// off, the equatorial y is kept as-is and orbit circles render with their
/// 23.4 degree tilt foreshortening.
///
/// The Sun is the heliocentric origin by definition, so its entry is pinned
/// to `(0, 0)` without consulting the ephemeris.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    instant: SimInstant,
    positions: [Vec2; Body::COUNT],
}

impl Snapshot {
    /// Samples the ephemeris for every body at `instant`.
    ///
    /// Fails on the first lookup the backend refuses; a snapshot is all
    /// bodies or nothing.
    pub fn build<E: Ephemeris>(
        ephemeris: &E,
        instant: SimInstant,
        align_ecliptic: bool,
    ) -> EngineResult<Self> {
        let (sin_obl, cos_obl) = libm::sincos(MEAN_OBLIQUITY_RAD);
        let mut positions = [Vec2::zeros(); Body::COUNT];

        for body in Body::ALL {
            if body == Body::Sun {
                continue;
            }
            let v = ephemeris.heliocentric_position(body, instant)?;
            let y = if align_ecliptic {
                v.y * cos_obl + v.z * sin_obl
            } else {
                v.y
            };
            positions[body.index()] = Vec2::new(v.x, y);
        }

        Ok(Self { instant, positions })
    }

    /// The instant this snapshot was sampled at.
    #[inline]
    pub fn instant(&self) -> SimInstant {
        self.instant
    }

    /// Plane position of `body`, in AU.
    #[inline]
    pub fn position(&self, body: Body) -> Vec2 {
        self.positions[body.index()]
    }
}
