//! Display colors for catalog bodies.

use std::fmt;

/// An 8-bit RGB color.
///
/// Formats as a CSS-style hex string, which is what downstream render
/// layers typically want:
///
/// ```
/// use orrery_core::Rgb;
///
/// let gold = Rgb::new(0xFD, 0xB8, 0x13);
/// assert_eq!(gold.to_string(), "#FDB813");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::new(0xFD, 0xB8, 0x13).to_string(), "#FDB813");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_string(), "#FFFFFF");
        assert_eq!(Rgb::new(0x0A, 0x00, 0xFF).to_string(), "#0A00FF");
    }
}
