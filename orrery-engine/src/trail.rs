//! Historical trail sampling.

use crate::constants::{
    BASE_TRAIL_DURATION_DAYS, BASE_TRAIL_STEP_DAYS, MAX_TRAIL_STEPS, MIN_CADENCE_SPEED,
};
use crate::errors::EngineResult;
use crate::projection::{self, ViewMode};
use crate::snapshot::Snapshot;
use orrery_core::{Body, Ephemeris, SimInstant, Vec2};

/// Sampling cadence for a playback speed: (step size in days, step count).
///
/// Faster playback widens the sampled window (speed^0.7) while coarsening
/// the spacing (speed^0.3), so the drawn arc grows with speed without the
/// sample count growing linearly. The count is capped at
/// [`MAX_TRAIL_STEPS`] and the speed is floored at [`MIN_CADENCE_SPEED`]
/// before either exponent.
pub fn cadence(speed: f64) -> (f64, usize) {
    let eff = if speed < MIN_CADENCE_SPEED {
        MIN_CADENCE_SPEED
    } else {
        speed
    };
    let duration_days = BASE_TRAIL_DURATION_DAYS * libm::pow(eff, 0.7);
    let step_days = BASE_TRAIL_STEP_DAYS * libm::pow(eff, 0.3);
    let steps = libm::ceil(duration_days / step_days) as usize;

    (step_days, steps.min(MAX_TRAIL_STEPS))
}

/// Historical polyline for one body, newest point first, in computation
/// coordinates.
///
/// The first point is the body's current projected position, so the trail
/// meets the live marker without a seam. Every further point replays the
/// full snapshot-and-project pipeline one cadence step earlier, which keeps
/// trails correct across focus changes and both view modes.
pub fn trail_points<E: Ephemeris>(
    ephemeris: &E,
    instant: SimInstant,
    body: Body,
    focus: Body,
    mode: ViewMode,
    speed: f64,
    align_ecliptic: bool,
) -> EngineResult<Vec<Vec2>> {
    let (step_days, steps) = cadence(speed);

    let mut points = Vec::with_capacity(steps + 1);
    let now = Snapshot::build(ephemeris, instant, align_ecliptic)?;
    points.push(projection::project_body(&now, body, focus, mode));

    for step in 1..=steps {
        let sample_instant = instant.add_days(-(step as f64) * step_days);
        let sample = Snapshot::build(ephemeris, sample_instant, align_ecliptic)?;
        points.push(projection::project_body(&sample, body, focus, mode));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{EphemerisResult, Vector3};

    /// Uniform circular motion, one body per catalog radius.
    struct CircularStub;

    impl Ephemeris for CircularStub {
        fn heliocentric_position(
            &self,
            body: Body,
            instant: SimInstant,
        ) -> EphemerisResult<Vector3> {
            let radius = body.index() as f64;
            let angle = instant.days_since(SimInstant::J2000) / (10.0 * radius.max(1.0));
            Ok(Vector3::new(
                radius * libm::cos(angle),
                radius * libm::sin(angle),
                0.0,
            ))
        }
    }

    #[test]
    fn test_cadence_at_unit_speed() {
        let (step_days, steps) = cadence(1.0);
        assert_eq!(step_days, 1.0);
        assert_eq!(steps, 50);
    }

    #[test]
    fn test_cadence_floors_slow_playback() {
        // Below the floor every speed samples like 0.1.
        assert_eq!(cadence(0.01), cadence(0.1));
        let (step_days, steps) = cadence(0.01);
        assert!(step_days > 0.5 && step_days < 0.51);
        assert_eq!(steps, 20);
    }

    #[test]
    fn test_cadence_caps_fast_playback() {
        let (_, steps) = cadence(1_000.0);
        assert_eq!(steps, MAX_TRAIL_STEPS);

        // The window-to-step ratio grows as speed^0.4, so the cap binds for
        // any speed beyond (300/50)^2.5.
        let (_, steps) = cadence(100.0);
        assert_eq!(steps, MAX_TRAIL_STEPS);
    }

    #[test]
    fn test_trail_starts_at_the_current_position() {
        let instant = SimInstant::J2000.add_days(123.0);
        let points = trail_points(
            &CircularStub,
            instant,
            Body::Mars,
            Body::Earth,
            ViewMode::FocusPolar,
            1.0,
            true,
        )
        .unwrap();

        assert_eq!(points.len(), 51);

        let now = Snapshot::build(&CircularStub, instant, true).unwrap();
        let current = projection::project_body(&now, Body::Mars, Body::Earth, ViewMode::FocusPolar);
        assert_eq!(points[0], current);
    }

    #[test]
    fn test_trail_is_deterministic() {
        let instant = SimInstant::J2000;
        let run = || {
            trail_points(
                &CircularStub,
                instant,
                Body::Jupiter,
                Body::Sun,
                ViewMode::Schematic,
                2.5,
                false,
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_focus_trail_stays_at_the_origin() {
        let points = trail_points(
            &CircularStub,
            SimInstant::J2000,
            Body::Earth,
            Body::Earth,
            ViewMode::FocusPolar,
            1.0,
            true,
        )
        .unwrap();

        for point in points {
            assert_eq!(point, Vec2::zeros());
        }
    }
}
