//! Playback state: the simulated range, the cursor, and the clock mapping.

use crate::constants::REALTIME_MS_PER_YEAR;
use crate::errors::{EngineError, EngineResult};
use orrery_core::constants::DAYS_PER_JULIAN_YEAR;
use orrery_core::SimInstant;

/// Bounded simulated time with play/pause and speed.
///
/// The invariant `start <= current <= end` holds after every operation:
/// moving one bound drags the other along rather than rejecting the call,
/// and the cursor is re-clamped whenever the range tightens around it.
///
/// ```
/// use orrery_core::SimInstant;
/// use orrery_engine::Timeline;
///
/// let start = SimInstant::UNIX_EPOCH;
/// let mut timeline = Timeline::new(start, start.add_days(100.0));
///
/// timeline.set_current_by_days_elapsed(250.0);
/// assert_eq!(timeline.current(), timeline.end());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    start: SimInstant,
    end: SimInstant,
    current: SimInstant,
    playing: bool,
    speed: f64,
}

impl Timeline {
    /// A paused timeline at speed 1 with the cursor on `start`.
    ///
    /// An inverted range collapses to the zero-width range at `start`.
    pub fn new(start: SimInstant, end: SimInstant) -> Self {
        let end = if end < start { start } else { end };
        Self {
            start,
            end,
            current: start,
            playing: false,
            speed: 1.0,
        }
    }

    #[inline]
    pub fn start(&self) -> SimInstant {
        self.start
    }

    #[inline]
    pub fn end(&self) -> SimInstant {
        self.end
    }

    /// The cursor: the instant frames are rendered at.
    #[inline]
    pub fn current(&self) -> SimInstant {
        self.current
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Moves the range start, pushing the end ahead of it if needed.
    pub fn set_start(&mut self, instant: SimInstant) {
        if instant > self.end {
            self.end = instant;
        }
        self.start = instant;
        if self.current < self.start {
            self.current = self.start;
        }
    }

    /// Moves the range end, pulling the start back with it if needed.
    pub fn set_end(&mut self, instant: SimInstant) {
        if instant < self.start {
            self.start = instant;
        }
        self.end = instant;
        if self.current > self.end {
            self.current = self.end;
        }
    }

    /// Places the cursor `days` after the start, clamped into the range.
    ///
    /// This is the scrubber operation: out-of-range targets land on the
    /// nearer bound instead of failing.
    pub fn set_current_by_days_elapsed(&mut self, days: f64) {
        self.current = self.start.add_days(days).clamp(self.start, self.end);
    }

    /// Days from the start to the cursor, fractional.
    pub fn elapsed_days(&self) -> f64 {
        self.current.days_since(self.start)
    }

    /// Whole days the range spans, rounded down.
    pub fn total_days(&self) -> i64 {
        libm::floor(self.end.days_since(self.start)) as i64
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Sets the playback speed.
    ///
    /// Rejects zero, negative and non-finite values outright; the previous
    /// speed stays in effect on failure.
    pub fn set_speed(&mut self, speed: f64) -> EngineResult<()> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(EngineError::invalid_speed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Advances the cursor by a wall-clock delta.
    ///
    /// At speed 1 one simulated year passes per [`REALTIME_MS_PER_YEAR`] of
    /// wall time. A step that would overshoot the end wraps the cursor back
    /// to the start (landing exactly on the end does not wrap). Does
    /// nothing while paused.
    pub fn tick(&mut self, delta_wall_ms: f64) {
        if !self.playing {
            return;
        }
        let sim_days = delta_wall_ms * self.speed * (DAYS_PER_JULIAN_YEAR / REALTIME_MS_PER_YEAR);
        let advanced = self.current.add_days(sim_days);
        self.current = if advanced > self.end {
            self.start
        } else {
            advanced.clamp(self.start, self.end)
        };
    }
}
