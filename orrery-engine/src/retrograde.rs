//! Apparent-motion classification.

use crate::snapshot::Snapshot;
use orrery_core::Body;

/// True when `body` appears to move clockwise around `focus`.
///
/// The test compares the focus-relative position against the displacement
/// since the earlier snapshot: a negative cross product means the bearing
/// swept clockwise, which is how apparent retrograde motion shows up in a
/// north-up heliocentric plane. Classification happens on raw snapshot
/// positions, before any ring remapping, so both view modes report the
/// same flag.
///
/// The focus itself never moves relative to itself and is never flagged.
pub fn is_retrograde(now: &Snapshot, earlier: &Snapshot, body: Body, focus: Body) -> bool {
    if body == focus {
        return false;
    }

    let relative = now.position(body) - now.position(focus);
    let previous = earlier.position(body) - earlier.position(focus);
    let velocity = relative - previous;

    relative.cross(velocity) < 0.0
}
