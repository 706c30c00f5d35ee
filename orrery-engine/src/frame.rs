//! Frame assembly: one pure function from parameters to a render state.

use crate::constants::RETROGRADE_SAMPLE_DAYS;
use crate::errors::EngineResult;
use crate::projection::{self, ViewMode};
use crate::render::{RenderBody, RenderRing, RenderState};
use crate::retrograde::is_retrograde;
use crate::snapshot::Snapshot;
use crate::trail;
use orrery_core::{Body, Ephemeris, SimInstant, Vec2};

/// Everything that determines one frame.
///
/// Frames are a pure function of these parameters and the ephemeris: equal
/// inputs produce an equal [`RenderState`], with no hidden state below this
/// call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameParams {
    /// Instant to render.
    pub instant: SimInstant,
    /// Body held at the origin.
    pub focus: Body,
    /// Active projection mode.
    pub view_mode: ViewMode,
    /// Flatten orbits into the ecliptic plane.
    pub align_ecliptic: bool,
    /// Compute historical trails.
    pub trails_enabled: bool,
    /// Playback speed, which drives trail cadence.
    pub speed: f64,
}

/// Computation coordinates (+y toward ecliptic north) to the screen
/// convention (+y down). Applied exactly once, here.
fn to_screen(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// Builds the complete render state for one frame.
///
/// Samples the ephemeris at the frame instant and one retrograde lookback
/// earlier, projects every catalog body, classifies its apparent motion,
/// and attaches trails when enabled.
pub fn render_state<E: Ephemeris>(ephemeris: &E, params: &FrameParams) -> EngineResult<RenderState> {
    let now = Snapshot::build(ephemeris, params.instant, params.align_ecliptic)?;
    let earlier = Snapshot::build(
        ephemeris,
        params.instant.add_days(-RETROGRADE_SAMPLE_DAYS),
        params.align_ecliptic,
    )?;

    let mut bodies = Vec::with_capacity(Body::COUNT);
    for body in Body::ALL {
        let position = projection::project_body(&now, body, params.focus, params.view_mode);

        let trail = if params.trails_enabled {
            let points = trail::trail_points(
                ephemeris,
                params.instant,
                body,
                params.focus,
                params.view_mode,
                params.speed,
                params.align_ecliptic,
            )?;
            Some(points.into_iter().map(to_screen).collect())
        } else {
            None
        };

        bodies.push(RenderBody {
            name: body.name(),
            color: body.color(),
            radius: body.display_radius(),
            position: to_screen(position),
            retrograde: is_retrograde(&now, &earlier, body, params.focus),
            trail,
        });
    }

    let rings = projection::rings(&now, params.focus, params.view_mode)
        .into_iter()
        .map(|ring| RenderRing {
            center: to_screen(ring.center),
            ..ring
        })
        .collect();

    Ok(RenderState { bodies, rings })
}
