//! Schematic solar-system engine: projection, apparent motion, trails and
//! playback over any [`Ephemeris`] backend.
//!
//! The engine answers one question per frame: given an instant, a focus
//! body, a view mode and a playback speed, where does every catalog body go
//! on screen? The answer is a [`RenderState`]: focus-relative 2D positions
//! on a not-to-scale ring ladder, retrograde flags, bounded trail
//! polylines, and orbit guide geometry, all in screen coordinates.
//!
//! Frames are deterministic. Everything is a pure function of
//! [`FrameParams`] and the backend, so identical inputs reproduce identical
//! output, which makes states comparable and cacheable.
//!
//! ```
//! use orrery_engine::{Orrery, ViewMode};
//! use orrery_ephemeris::KeplerEphemeris;
//!
//! let mut orrery = Orrery::new(KeplerEphemeris::new());
//! orrery.set_focus("Earth");
//! orrery.toggle_view_mode();
//! assert_eq!(orrery.view_mode(), ViewMode::Schematic);
//!
//! let frame = orrery.render_state().unwrap();
//! assert_eq!(frame.bodies.len(), 10);
//! ```

pub mod constants;
pub mod errors;
pub mod frame;
pub mod orrery;
pub mod projection;
pub mod render;
pub mod retrograde;
pub mod snapshot;
pub mod timeline;
pub mod trail;

pub use errors::{EngineError, EngineResult};
pub use frame::{render_state, FrameParams};
pub use orrery::{DisplayToggles, Orrery};
pub use projection::ViewMode;
pub use render::{RenderBody, RenderRing, RenderState};
pub use retrograde::is_retrograde;
pub use snapshot::Snapshot;
pub use timeline::Timeline;
pub use trail::trail_points;

pub use orrery_core::{Body, Ephemeris, Rgb, SimInstant, Vec2, Vector3};
