//! Engine-level error types.

use orrery_core::EphemerisError;
use thiserror::Error;

/// Errors surfaced by playback control and frame assembly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Playback speed must be finite and strictly positive.
    #[error("invalid playback speed {speed}; must be finite and greater than zero")]
    InvalidSpeed { speed: f64 },

    /// A position lookup failed while assembling a frame.
    #[error("ephemeris lookup failed: {source}")]
    Ephemeris {
        #[from]
        source: EphemerisError,
    },
}

impl EngineError {
    pub fn invalid_speed(speed: f64) -> Self {
        Self::InvalidSpeed { speed }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
