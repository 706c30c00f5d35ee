//! Plane vectors for projected positions.
//!
//! Everything 2D in the engine is a [`Vec2`]: snapshot positions after the
//! ecliptic flattening, render coordinates, trail points, ring centers.
//! The scalar [`cross`](Vec2::cross) product carries the orientation sign
//! the retrograde classifier keys on.

use std::fmt;

/// A 2D Cartesian vector.
///
/// ```
/// use orrery_core::Vec2;
///
/// let v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
///
/// // Counterclockwise pairs have positive cross product.
/// let x = Vec2::new(1.0, 0.0);
/// let y = Vec2::new(0.0, 1.0);
/// assert_eq!(x.cross(y), 1.0);
/// assert_eq!(y.cross(x), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Creates a new vector from x, y components.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the zero vector `[0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// Uses `hypot`, which stays accurate for very small and very large
    /// components.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }

    /// Scalar 2D cross product `self.x * other.y - self.y * other.x`.
    ///
    /// Positive when `other` lies counterclockwise of `self`, negative when
    /// clockwise, zero when collinear.
    #[inline]
    pub fn cross(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

/// Vector + Vector
impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.9}, {:.9})", self.x, self.y)
    }
}
