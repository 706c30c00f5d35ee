//! Schematic layout: rings, bearings, and the two view modes.
//!
//! Real heliocentric distances span three orders of magnitude, so the view
//! never draws them to scale. Both modes keep each body's true angular
//! bearing and replace its distance with a ring radius from an evenly
//! spaced ladder. What differs is the center the bearing is measured from.
//!
//! All functions here work in computation coordinates (+y toward ecliptic
//! north); frame assembly flips into the screen convention once, at the end.

use crate::constants::{DIRECTION_EPSILON, SCHEMATIC_BASE_RADIUS, SCHEMATIC_RING_GAP};
use crate::render::RenderRing;
use crate::snapshot::Snapshot;
use orrery_core::{Body, Vec2};

/// How bodies are laid out around the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    /// Heliocentric ladder: every body sits on its own catalog ring at its
    /// true bearing from the Sun, and the whole layout is shifted so the
    /// focus lands at the origin.
    Schematic,
    /// Focus-centric remap: each body keeps its true direction from the
    /// focus and takes a ring radius of its own, with the focus at radius 0.
    FocusPolar,
}

impl ViewMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Schematic => ViewMode::FocusPolar,
            ViewMode::FocusPolar => ViewMode::Schematic,
        }
    }
}

/// Schematic ring radius for a catalog index.
///
/// The Sun (index 0) sits at radius 0; planets climb an evenly spaced
/// ladder outward.
pub fn ring_radius(index: usize) -> f64 {
    if index == 0 {
        0.0
    } else {
        SCHEMATIC_BASE_RADIUS + (index as f64 - 1.0) * SCHEMATIC_RING_GAP
    }
}

/// The outermost ladder radius, for viewport fitting.
pub fn max_ring_radius() -> f64 {
    ring_radius(Body::COUNT - 1)
}

/// Ring radius of `body` when `focus` holds the origin in focus-polar mode.
///
/// The focus takes radius 0 and bodies that precede it in the catalog shift
/// outward one slot, so the ladder stays gap-free around any focus.
pub fn mapped_ring_radius(body: Body, focus: Body) -> f64 {
    if body == focus {
        return 0.0;
    }
    let slot = if body.index() < focus.index() {
        body.index() + 1
    } else {
        body.index()
    };
    ring_radius(slot)
}

/// The point at `radius` from the origin in the direction of `direction`.
///
/// Radius 0 collapses to the origin regardless of direction. A direction
/// too short to carry a bearing falls back to +x, so the result is always
/// finite.
fn polar_to_cartesian(radius: f64, direction: Vec2) -> Vec2 {
    if radius == 0.0 {
        return Vec2::zeros();
    }
    let dist = direction.magnitude();
    if dist < DIRECTION_EPSILON {
        Vec2::new(radius, 0.0)
    } else {
        direction * (radius / dist)
    }
}

/// Sun-centered schematic position of one body: catalog ring, true bearing.
fn schematic_position(snapshot: &Snapshot, body: Body) -> Vec2 {
    polar_to_cartesian(ring_radius(body.index()), snapshot.position(body))
}

/// Projects one body into the focus-relative frame of the given mode.
pub fn project_body(snapshot: &Snapshot, body: Body, focus: Body, mode: ViewMode) -> Vec2 {
    match mode {
        ViewMode::Schematic => {
            schematic_position(snapshot, body) - schematic_position(snapshot, focus)
        }
        ViewMode::FocusPolar => {
            let relative = snapshot.position(body) - snapshot.position(focus);
            polar_to_cartesian(mapped_ring_radius(body, focus), relative)
        }
    }
}

/// Orbit guides for the given mode, in computation coordinates.
///
/// Schematic rings share the heliocentric ladder and stay centered on
/// wherever the Sun projects; focus-polar rings are concentric about the
/// focus at the origin. Output order follows the catalog.
pub fn rings(snapshot: &Snapshot, focus: Body, mode: ViewMode) -> Vec<RenderRing> {
    match mode {
        ViewMode::Schematic => {
            let center = project_body(snapshot, Body::Sun, focus, mode);
            Body::ALL
                .into_iter()
                .skip(1)
                .map(|body| RenderRing {
                    center,
                    radius: ring_radius(body.index()),
                })
                .collect()
        }
        ViewMode::FocusPolar => Body::ALL
            .into_iter()
            .map(|body| mapped_ring_radius(body, focus))
            .filter(|radius| *radius != 0.0)
            .map(|radius| RenderRing {
                center: Vec2::zeros(),
                radius,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{Ephemeris, EphemerisResult, SimInstant, Vector3};

    /// Every planet on the +x axis at its catalog index in AU, except Venus,
    /// which sits on +y, and Neptune, which is numerically at the origin.
    struct LayoutStub;

    impl Ephemeris for LayoutStub {
        fn heliocentric_position(
            &self,
            body: Body,
            _instant: SimInstant,
        ) -> EphemerisResult<Vector3> {
            let v = match body {
                Body::Venus => Vector3::new(0.0, 2.0, 0.0),
                Body::Neptune => Vector3::new(0.0, 0.0, 0.0),
                other => Vector3::new(other.index() as f64, 0.0, 0.0),
            };
            Ok(v)
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot::build(&LayoutStub, SimInstant::J2000, false).unwrap()
    }

    #[test]
    fn test_ring_ladder() {
        assert_eq!(ring_radius(0), 0.0);
        assert_eq!(ring_radius(1), 90.0);
        assert_eq!(ring_radius(2), 155.0);
        assert_eq!(ring_radius(9), 90.0 + 8.0 * 65.0);
        assert_eq!(max_ring_radius(), ring_radius(9));

        for i in 1..Body::COUNT {
            assert!(
                ring_radius(i) > ring_radius(i - 1),
                "ladder must grow strictly outward at index {}",
                i
            );
        }
    }

    #[test]
    fn test_mapped_rings_stay_gap_free() {
        // Earth focused: Sun and the two inner planets shift outward a slot.
        assert_eq!(mapped_ring_radius(Body::Earth, Body::Earth), 0.0);
        assert_eq!(mapped_ring_radius(Body::Sun, Body::Earth), ring_radius(1));
        assert_eq!(
            mapped_ring_radius(Body::Mercury, Body::Earth),
            ring_radius(2)
        );
        assert_eq!(mapped_ring_radius(Body::Venus, Body::Earth), ring_radius(3));
        assert_eq!(mapped_ring_radius(Body::Mars, Body::Earth), ring_radius(4));
        assert_eq!(mapped_ring_radius(Body::Pluto, Body::Earth), ring_radius(9));

        // Sun focused the remap is the identity ladder.
        for body in Body::ALL {
            assert_eq!(
                mapped_ring_radius(body, Body::Sun),
                ring_radius(body.index())
            );
        }
    }

    #[test]
    fn test_polar_to_cartesian_scales_direction() {
        assert_eq!(polar_to_cartesian(10.0, Vec2::new(3.0, 4.0)), Vec2::new(6.0, 8.0));
        assert_eq!(polar_to_cartesian(0.0, Vec2::new(3.0, 4.0)), Vec2::zeros());
        // Undefined bearings fall back to +x instead of going NaN.
        assert_eq!(polar_to_cartesian(90.0, Vec2::zeros()), Vec2::new(90.0, 0.0));
        assert_eq!(
            polar_to_cartesian(90.0, Vec2::new(1e-9, -1e-9)),
            Vec2::new(90.0, 0.0)
        );
    }

    #[test]
    fn test_schematic_keeps_bearings_on_catalog_rings() {
        let snap = snapshot();

        // Sun focused: Mercury on +x at its ring, Venus on +y at its ring.
        let mercury = project_body(&snap, Body::Mercury, Body::Sun, ViewMode::Schematic);
        assert_eq!(mercury, Vec2::new(ring_radius(1), 0.0));

        let venus = project_body(&snap, Body::Venus, Body::Sun, ViewMode::Schematic);
        assert_eq!(venus, Vec2::new(0.0, ring_radius(2)));

        // Neptune has no usable bearing and falls back to +x.
        let neptune = project_body(&snap, Body::Neptune, Body::Sun, ViewMode::Schematic);
        assert_eq!(neptune, Vec2::new(ring_radius(8), 0.0));
    }

    #[test]
    fn test_schematic_recenters_on_the_focus() {
        let snap = snapshot();

        let earth = project_body(&snap, Body::Earth, Body::Earth, ViewMode::Schematic);
        assert_eq!(earth, Vec2::zeros());

        // Shifting the frame moves every body by the same offset.
        let sun = project_body(&snap, Body::Sun, Body::Earth, ViewMode::Schematic);
        assert_eq!(sun, Vec2::new(-ring_radius(3), 0.0));

        let venus = project_body(&snap, Body::Venus, Body::Earth, ViewMode::Schematic);
        assert_eq!(venus, Vec2::new(-ring_radius(3), ring_radius(2)));
    }

    #[test]
    fn test_focus_polar_preserves_relative_direction() {
        let snap = snapshot();

        // Venus seen from Earth: Earth is at (3, 0), Venus at (0, 2), so the
        // offset points up-left; the remap keeps that bearing at ring 3.
        let venus = project_body(&snap, Body::Venus, Body::Earth, ViewMode::FocusPolar);
        let offset = Vec2::new(-3.0, 2.0);
        let expected = offset * (ring_radius(3) / offset.magnitude());
        assert!((venus - expected).magnitude() < 1e-12);

        let earth = project_body(&snap, Body::Earth, Body::Earth, ViewMode::FocusPolar);
        assert_eq!(earth, Vec2::zeros());
    }

    #[test]
    fn test_schematic_rings_follow_the_sun() {
        let snap = snapshot();
        let rings = rings(&snap, Body::Earth, ViewMode::Schematic);

        assert_eq!(rings.len(), Body::COUNT - 1);
        let sun = project_body(&snap, Body::Sun, Body::Earth, ViewMode::Schematic);
        for ring in &rings {
            assert_eq!(ring.center, sun);
        }
        assert_eq!(rings[0].radius, ring_radius(1));
        assert_eq!(rings[8].radius, ring_radius(9));
    }

    #[test]
    fn test_focus_polar_rings_are_concentric() {
        let snap = snapshot();
        let rings = rings(&snap, Body::Earth, ViewMode::FocusPolar);

        assert_eq!(rings.len(), Body::COUNT - 1);
        for (i, ring) in rings.iter().enumerate() {
            assert_eq!(ring.center, Vec2::zeros());
            assert_eq!(ring.radius, ring_radius(i + 1), "ladder should stay gap-free");
        }
    }

    #[test]
    fn test_toggled_flips_between_modes() {
        assert_eq!(ViewMode::Schematic.toggled(), ViewMode::FocusPolar);
        assert_eq!(ViewMode::FocusPolar.toggled(), ViewMode::Schematic);
    }
}
