//! The fixed body catalog.
//!
//! Ten bodies, Sun first, ordered outward. The order is load-bearing: ring
//! ladders, remap indices, and render output all address bodies by catalog
//! index, so [`Body::ALL`] and [`Body::index`] must stay in lockstep (the
//! discriminants guarantee it).

use crate::Rgb;
use std::fmt;

/// Display radius shared by every catalog body, in scene pixels.
const DISPLAY_RADIUS_PX: f64 = 20.0;

/// A solar-system body known to the engine.
///
/// The catalog is static: bodies are never added or removed at runtime, and
/// the variant order is the canonical catalog order with the Sun at
/// index 0.
///
/// ```
/// use orrery_core::Body;
///
/// assert_eq!(Body::Sun.index(), 0);
/// assert_eq!(Body::ALL[4], Body::Mars);
/// assert_eq!(Body::from_name("Neptune"), Some(Body::Neptune));
/// assert_eq!(Body::from_name("Vulcan"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun = 0,
    Mercury = 1,
    Venus = 2,
    Earth = 3,
    Mars = 4,
    Jupiter = 5,
    Saturn = 6,
    Uranus = 7,
    Neptune = 8,
    Pluto = 9,
}

impl Body {
    /// Every catalog body, in catalog order.
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Number of catalog bodies.
    pub const COUNT: usize = Self::ALL.len();

    /// Catalog index of this body (Sun is 0).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Body at the given catalog index, if any.
    pub fn from_index(index: usize) -> Option<Body> {
        Self::ALL.get(index).copied()
    }

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// Looks a body up by its exact display name.
    pub fn from_name(name: &str) -> Option<Body> {
        Self::ALL.into_iter().find(|body| body.name() == name)
    }

    /// Display color for render layers.
    pub const fn color(self) -> Rgb {
        match self {
            Body::Sun => Rgb::new(0xFD, 0xB8, 0x13),
            Body::Mercury => Rgb::new(0xA5, 0xA5, 0xA5),
            Body::Venus => Rgb::new(0xE3, 0xBB, 0x76),
            Body::Earth => Rgb::new(0x4F, 0x4C, 0xB0),
            Body::Mars => Rgb::new(0xE2, 0x7B, 0x58),
            Body::Jupiter => Rgb::new(0xC8, 0x8B, 0x3A),
            Body::Saturn => Rgb::new(0xC5, 0xAB, 0x6E),
            Body::Uranus => Rgb::new(0x93, 0xB8, 0xBE),
            Body::Neptune => Rgb::new(0x5B, 0x6B, 0xF3),
            Body::Pluto => Rgb::new(0xE0, 0xC8, 0xA0),
        }
    }

    /// Display radius for render layers, in scene pixels.
    pub const fn display_radius(self) -> f64 {
        DISPLAY_RADIUS_PX
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
