//! The assembled engine: timeline, view state, and frame production.

use crate::errors::EngineResult;
use crate::frame::{self, FrameParams};
use crate::projection::ViewMode;
use crate::render::RenderState;
use crate::timeline::Timeline;
use orrery_core::{Body, Ephemeris, SimInstant};

/// Render-layer visibility switches.
///
/// The engine owns these so UI state survives focus and mode changes, but
/// only `trails` feeds back into frame computation; the rest are passed
/// through for a renderer to honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayToggles {
    /// Background starfield.
    pub stars: bool,
    /// Orbit guide rings.
    pub orbits: bool,
    /// Historical trails.
    pub trails: bool,
    /// Retrograde motion markers.
    pub retrograde_markers: bool,
    /// Body name labels.
    pub labels: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            stars: true,
            orbits: false,
            trails: true,
            retrograde_markers: true,
            labels: true,
        }
    }
}

/// A complete orrery over an ephemeris backend.
///
/// Owns the playback [`Timeline`] and the view state (focus, mode,
/// alignment, toggles) and turns them into [`RenderState`] frames on
/// demand. All mutation goes through the methods here; rendering itself
/// stays pure.
///
/// ```
/// use orrery_engine::Orrery;
/// use orrery_ephemeris::KeplerEphemeris;
///
/// let mut orrery = Orrery::new(KeplerEphemeris::new());
/// orrery.set_focus("Mars");
/// orrery.toggle_play();
/// orrery.tick(16.7);
///
/// let frame = orrery.render_state().unwrap();
/// assert_eq!(frame.bodies[4].name, "Mars");
/// ```
pub struct Orrery<E: Ephemeris> {
    ephemeris: E,
    timeline: Timeline,
    focus: Body,
    view_mode: ViewMode,
    align_ecliptic: bool,
    toggles: DisplayToggles,
}

impl<E: Ephemeris> Orrery<E> {
    /// An orrery over `ephemeris` with the stock range: 1970 up to the
    /// wall clock, paused at the start.
    pub fn new(ephemeris: E) -> Self {
        let timeline = Timeline::new(SimInstant::UNIX_EPOCH, SimInstant::now());
        Self::with_timeline(ephemeris, timeline)
    }

    /// An orrery with an explicit timeline, for deterministic setups.
    ///
    /// Starts Sun-focused in focus-polar mode with ecliptic alignment on.
    pub fn with_timeline(ephemeris: E, timeline: Timeline) -> Self {
        Self {
            ephemeris,
            timeline,
            focus: Body::Sun,
            view_mode: ViewMode::FocusPolar,
            align_ecliptic: true,
            toggles: DisplayToggles::default(),
        }
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[inline]
    pub fn focus(&self) -> Body {
        self.focus
    }

    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[inline]
    pub fn ecliptic_aligned(&self) -> bool {
        self.align_ecliptic
    }

    #[inline]
    pub fn toggles(&self) -> DisplayToggles {
        self.toggles
    }

    #[inline]
    pub fn toggles_mut(&mut self) -> &mut DisplayToggles {
        &mut self.toggles
    }

    /// Focuses a body by display name.
    ///
    /// Unknown names fall back to the Sun so a frame can always be drawn.
    pub fn set_focus(&mut self, name: &str) {
        self.focus = Body::from_name(name).unwrap_or(Body::Sun);
    }

    /// Focuses a body directly.
    pub fn set_focus_body(&mut self, body: Body) {
        self.focus = body;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn toggle_trails(&mut self) {
        self.toggles.trails = !self.toggles.trails;
    }

    pub fn toggle_ecliptic_alignment(&mut self) {
        self.align_ecliptic = !self.align_ecliptic;
    }

    pub fn set_start(&mut self, instant: SimInstant) {
        self.timeline.set_start(instant);
    }

    pub fn set_end(&mut self, instant: SimInstant) {
        self.timeline.set_end(instant);
    }

    pub fn set_current_by_days_elapsed(&mut self, days: f64) {
        self.timeline.set_current_by_days_elapsed(days);
    }

    pub fn toggle_play(&mut self) {
        self.timeline.toggle_play();
    }

    pub fn set_speed(&mut self, speed: f64) -> EngineResult<()> {
        self.timeline.set_speed(speed)
    }

    /// Advances playback by a wall-clock delta in milliseconds.
    pub fn tick(&mut self, delta_wall_ms: f64) {
        self.timeline.tick(delta_wall_ms);
    }

    /// Renders one frame from the current state.
    pub fn render_state(&self) -> EngineResult<RenderState> {
        let params = FrameParams {
            instant: self.timeline.current(),
            focus: self.focus,
            view_mode: self.view_mode,
            align_ecliptic: self.align_ecliptic,
            trails_enabled: self.toggles.trails,
            speed: self.timeline.speed(),
        };
        frame::render_state(&self.ephemeris, &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{EphemerisResult, Vec2, Vector3};

    struct OriginStub;

    impl Ephemeris for OriginStub {
        fn heliocentric_position(
            &self,
            body: Body,
            _instant: SimInstant,
        ) -> EphemerisResult<Vector3> {
            let i = body.index() as f64;
            Ok(Vector3::new(i, 0.0, 0.0))
        }
    }

    fn fixed_orrery() -> Orrery<OriginStub> {
        let timeline = Timeline::new(SimInstant::UNIX_EPOCH, SimInstant::UNIX_EPOCH.add_days(365.0));
        Orrery::with_timeline(OriginStub, timeline)
    }

    #[test]
    fn test_defaults() {
        let orrery = fixed_orrery();

        assert_eq!(orrery.focus(), Body::Sun);
        assert_eq!(orrery.view_mode(), ViewMode::FocusPolar);
        assert!(orrery.ecliptic_aligned());
        assert!(!orrery.timeline().is_playing());

        let toggles = orrery.toggles();
        assert!(toggles.stars && toggles.trails && toggles.retrograde_markers && toggles.labels);
        assert!(!toggles.orbits);
    }

    #[test]
    fn test_set_focus_by_name_with_fallback() {
        let mut orrery = fixed_orrery();

        orrery.set_focus("Jupiter");
        assert_eq!(orrery.focus(), Body::Jupiter);

        orrery.set_focus("Planet X");
        assert_eq!(orrery.focus(), Body::Sun, "unknown names focus the Sun");
    }

    #[test]
    fn test_toggles_flip_state() {
        let mut orrery = fixed_orrery();

        orrery.toggle_view_mode();
        assert_eq!(orrery.view_mode(), ViewMode::Schematic);

        orrery.toggle_trails();
        assert!(!orrery.toggles().trails);

        orrery.toggle_ecliptic_alignment();
        assert!(!orrery.ecliptic_aligned());

        orrery.toggles_mut().labels = false;
        assert!(!orrery.toggles().labels);
    }

    #[test]
    fn test_render_uses_the_cursor_and_focus() {
        let mut orrery = fixed_orrery();
        orrery.set_focus("Earth");

        let state = orrery.render_state().unwrap();
        assert_eq!(state.bodies[Body::Earth.index()].position, Vec2::zeros());
        assert_eq!(state.bodies.len(), Body::COUNT);
    }

    #[test]
    fn test_playback_moves_the_rendered_instant() {
        let mut orrery = fixed_orrery();
        orrery.toggle_play();
        orrery.tick(100.0);

        assert!(orrery.timeline().elapsed_days() > 0.0);
    }
}
