//! Integer geometric primitives.
//!
//! Value types consumed by the rasterizers. All coordinates are `i32` grid
//! cells; nothing here is mutated after construction.

use crate::error::{Error, Result};
use std::fmt;

/// A point on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point, exact for any `i32` pair.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> u128 {
        let dx = u128::from((i64::from(self.x) - i64::from(other.x)).unsigned_abs());
        let dy = u128::from((i64::from(self.y) - i64::from(other.y)).unsigned_abs());
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point, rounded to the nearest integer.
    ///
    /// Computed without floating point. `None` when the rounded distance
    /// exceeds `i32::MAX`.
    #[must_use]
    pub fn rounded_distance(self, other: Self) -> Option<i32> {
        let d2 = self.distance_squared(other);
        let r = isqrt(d2);
        // sqrt(d2) >= r + 0.5  <=>  d2 >= r^2 + r + 0.25  <=>  d2 - r^2 > r
        let r = if d2 - r * r > r { r + 1 } else { r };
        i32::try_from(r).ok()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Floor of the square root of `n`.
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    // Newton's method from an upper bound; converges monotonically downward.
    let mut x = 1u128 << (128 - n.leading_zeros()).div_ceil(2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// A line segment between two grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSegment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// True when both endpoints coincide; such a segment still plots one cell.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// The same segment walked from the other end.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
}

/// A circle outline: integer center and non-negative integer radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    /// Create a circle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeRadius`] if `radius < 0`.
    pub fn new(center: Point, radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(Error::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Circle centered on `center` whose radius is the rounded distance to `rim`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RadiusOutOfRange`] if that distance exceeds `i32::MAX`.
    pub fn through(center: Point, rim: Point) -> Result<Self> {
        let radius = center.rounded_distance(rim).ok_or(Error::RadiusOutOfRange { center, rim })?;
        Ok(Self { center, radius })
    }

    /// Same radius around a different center.
    #[must_use]
    pub const fn with_center(self, center: Point) -> Self {
        Self { center, radius: self.radius }
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius, always `>= 0`.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }
}
