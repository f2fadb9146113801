//! Bresenham line rasterization.
//!
//! Integer-only: an error term tracks the distance between the ideal line and
//! the current cell, and its sign picks an x step, a y step, or both.

use crate::geometry::{LineSegment, Point};
use std::iter::FusedIterator;

/// Lazy iterator over the cells of a Bresenham line, start to end inclusive.
///
/// Yields exactly `max(|dx|, |dy|) + 1` 8-connected cells.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    remaining: u64,
}

impl LinePoints {
    /// Start walking from `start` towards `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let (x0, y0) = (i64::from(start.x), i64::from(start.y));
        let (x1, y1) = (i64::from(end.x), i64::from(end.y));

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x1 >= x0 { 1 } else { -1 };
        let sy = if y1 >= y0 { 1 } else { -1 };

        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx,
            sy,
            err: dx - dy,
            remaining: dx.max(dy).unsigned_abs() + 1,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // x and y stay between the two i32 endpoints, so the casts are lossless.
        let current = Point::new(self.x as i32, self.y as i32);

        if self.x == self.x1 && self.y == self.y1 {
            self.remaining = 0;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// A full-range line has 2^32 cells, which only a 64-bit usize can count.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for LinePoints {}

impl FusedIterator for LinePoints {}

impl IntoIterator for LineSegment {
    type Item = Point;
    type IntoIter = LinePoints;

    fn into_iter(self) -> LinePoints {
        LinePoints::new(self.start, self.end)
    }
}

/// Rasterize the line from `(x0, y0)` to `(x1, y1)`.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::render::rasterize_line;
///
/// let cells = rasterize_line(0, 0, 3, 1);
/// assert_eq!(cells.first(), Some(&Point::new(0, 0)));
/// assert_eq!(cells.last(), Some(&Point::new(3, 1)));
/// assert_eq!(cells.len(), 4);
/// ```
#[must_use]
pub fn rasterize_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)).collect()
}

/// Rasterize a line so that swapping the endpoints exactly reverses the cells.
///
/// The plain walk breaks error ties by direction, so `a -> b` and `b -> a` can
/// pick different cells. This always walks from the smaller endpoint
/// (lexicographic on `(x, y)`) and reverses when needed.
#[must_use]
pub fn rasterize_line_symmetric(start: Point, end: Point) -> Vec<Point> {
    if start <= end {
        LinePoints::new(start, end).collect()
    } else {
        let mut cells: Vec<Point> = LinePoints::new(end, start).collect();
        cells.reverse();
        cells
    }
}
