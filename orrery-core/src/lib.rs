//! Foundations shared by the orrery crates.
//!
//! This crate holds the pieces every layer agrees on: the fixed [`Body`]
//! catalog, the [`SimInstant`] time value, the [`Vector3`]/[`Vec2`]
//! geometry types, shared [`constants`], structured error types, and the
//! [`Ephemeris`] trait that separates position computation from everything
//! built on top of it.
//!
//! `orrery-ephemeris` implements [`Ephemeris`]; `orrery-engine` consumes it
//! to build render states.

pub mod body;
pub mod color;
pub mod constants;
pub mod ephemeris;
pub mod errors;
pub mod instant;
pub mod vec2;
pub mod vector3;

pub use body::Body;
pub use color::Rgb;
pub use ephemeris::Ephemeris;
pub use errors::{EphemerisError, EphemerisResult, TimeError, TimeResult};
pub use instant::SimInstant;
pub use vec2::Vec2;
pub use vector3::Vector3;
