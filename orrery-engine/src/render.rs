//! Renderer-facing frame output.
//!
//! A [`RenderState`] is plain data: screen-convention coordinates (+y down),
//! display colors and radii resolved, nothing left for a renderer to compute.
//! Two frames built from equal parameters compare equal, which is what the
//! determinism tests assert on.

use orrery_core::{Rgb, Vec2};

/// One body, ready to draw.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderBody {
    /// Stable display name from the catalog.
    pub name: &'static str,
    /// Fill color.
    pub color: Rgb,
    /// Marker radius in scene pixels.
    pub radius: f64,
    /// Screen-convention position relative to the focus.
    pub position: Vec2,
    /// True while the body moves clockwise around the focus.
    pub retrograde: bool,
    /// Historical polyline, newest point first; `None` when trails are off.
    pub trail: Option<Vec<Vec2>>,
}

/// One orbit guide circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderRing {
    /// Screen-convention center.
    pub center: Vec2,
    /// Radius in render units.
    pub radius: f64,
}

/// Everything one frame draws.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderState {
    /// All catalog bodies, in catalog order (Sun first).
    pub bodies: Vec<RenderBody>,
    /// Orbit guides for the active view mode.
    pub rings: Vec<RenderRing>,
}
