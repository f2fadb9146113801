//! Midpoint (Bresenham) circle rasterization.
//!
//! Walks one quadrant from the top of the circle `(0, r)` towards `(r, 0)`,
//! mirroring every visited offset into all four quadrants. A decision value
//! `delta` (the squared-radius error of the diagonal candidate) selects a
//! horizontal, vertical or diagonal step.

use crate::error::Result;
use crate::geometry::{Circle, Point};
use std::collections::HashSet;
use std::iter::FusedIterator;

/// Lazy iterator over a circle outline.
///
/// Emits four mirrored cells per step, in the order
/// `(cx+x, cy+y)`, `(cx+x, cy-y)`, `(cx-x, cy+y)`, `(cx-x, cy-y)`. Cells on the
/// axes repeat; plot onto an idempotent surface or pass through
/// [`dedup_points`].
///
/// Cells that fall outside the `i32` grid are skipped.
#[derive(Debug, Clone)]
pub struct CirclePoints {
    cx: i64,
    cy: i64,
    x: i64,
    y: i64,
    delta: i64,
    quadrant: u8,
}

impl CirclePoints {
    /// Iterate the outline of `circle`.
    #[must_use]
    pub fn new(circle: Circle) -> Self {
        let r = i64::from(circle.radius());
        Self {
            cx: i64::from(circle.center().x),
            cy: i64::from(circle.center().y),
            x: 0,
            y: r,
            delta: 1 - 2 * r,
            quadrant: 0,
        }
    }

    /// Advance the quadrant offset `(x, y)` by one step.
    ///
    /// The branch order decides which cell wins near the 45-degree
    /// boundaries and must stay as is.
    fn step(&mut self) {
        let error = 2 * (self.delta + self.y) - 1;
        if self.delta < 0 && error <= 0 {
            self.x += 1;
            self.delta += 2 * self.x + 1;
        } else if self.delta > 0 && error > 0 {
            self.y -= 1;
            self.delta += 1 - 2 * self.y;
        } else {
            self.x += 1;
            self.y -= 1;
            self.delta += 2 * (self.x - self.y);
        }
    }
}

impl Iterator for CirclePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while self.y >= 0 {
            let (px, py) = match self.quadrant {
                0 => (self.cx + self.x, self.cy + self.y),
                1 => (self.cx + self.x, self.cy - self.y),
                2 => (self.cx - self.x, self.cy + self.y),
                _ => (self.cx - self.x, self.cy - self.y),
            };

            if self.quadrant == 3 {
                self.quadrant = 0;
                self.step();
            } else {
                self.quadrant += 1;
            }

            // Cells past the i32 grid are clipped.
            if let (Ok(x), Ok(y)) = (i32::try_from(px), i32::try_from(py)) {
                return Some(Point::new(x, y));
            }
        }
        None
    }
}

impl FusedIterator for CirclePoints {}

impl IntoIterator for Circle {
    type Item = Point;
    type IntoIter = CirclePoints;

    fn into_iter(self) -> CirclePoints {
        CirclePoints::new(self)
    }
}

/// Rasterize the circle of radius `r` around `(cx, cy)`.
///
/// Returns the raw mirrored stream, duplicates included.
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`](crate::Error::NegativeRadius) if `r < 0`.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::render::rasterize_circle;
///
/// let cells = rasterize_circle(0, 0, 5).unwrap();
/// assert!(cells.contains(&Point::new(5, 0)));
/// assert!(cells.contains(&Point::new(0, -5)));
/// ```
pub fn rasterize_circle(cx: i32, cy: i32, r: i32) -> Result<Vec<Point>> {
    let circle = Circle::new(Point::new(cx, cy), r)?;
    Ok(CirclePoints::new(circle).collect())
}

/// Like [`rasterize_circle`], with each cell reported once.
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`](crate::Error::NegativeRadius) if `r < 0`.
pub fn rasterize_circle_distinct(cx: i32, cy: i32, r: i32) -> Result<Vec<Point>> {
    rasterize_circle(cx, cy, r).map(dedup_points)
}

/// Drop repeated cells, keeping the first occurrence of each.
#[must_use]
pub fn dedup_points(points: Vec<Point>) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.into_iter().filter(|p| seen.insert(*p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_zero_radius_is_center_only() {
        let raw = rasterize_circle(0, 0, 0).unwrap();
        assert_eq!(raw, pts(&[(0, 0), (0, 0), (0, 0), (0, 0)]));
        assert_eq!(rasterize_circle_distinct(0, 0, 0).unwrap(), pts(&[(0, 0)]));
    }

    #[test]
    fn test_zero_radius_off_origin() {
        assert_eq!(rasterize_circle_distinct(10, -3, 0).unwrap(), pts(&[(10, -3)]));
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert!(matches!(rasterize_circle(0, 0, -1), Err(Error::NegativeRadius(-1))));
    }

    #[test]
    fn test_radius_one() {
        let cells = rasterize_circle_distinct(0, 0, 1).unwrap();
        assert_eq!(
            cells,
            pts(&[(0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1), (1, 0), (-1, 0)])
        );
    }

    #[test]
    fn test_radius_two() {
        let cells = rasterize_circle_distinct(0, 0, 2).unwrap();
        assert_eq!(
            cells,
            pts(&[
                (0, 2),
                (0, -2),
                (1, 2),
                (1, -2),
                (-1, 2),
                (-1, -2),
                (2, 1),
                (2, -1),
                (-2, 1),
                (-2, -1),
                (2, 0),
                (-2, 0),
            ])
        );
    }

    #[test]
    fn test_radius_five_extremes() {
        let cells = rasterize_circle(0, 0, 5).unwrap();
        for p in [(5, 0), (0, 5), (-5, 0), (0, -5)] {
            assert!(cells.contains(&Point::from(p)), "missing {p:?}");
        }
        assert_eq!(cells.len(), 32);
        assert_eq!(dedup_points(cells).len(), 28);
    }

    #[test]
    fn test_radius_five_exact_set() {
        let mut cells = rasterize_circle_distinct(0, 0, 5).unwrap();
        cells.sort();
        let mut expected = pts(&[
            (-5, -2),
            (-5, -1),
            (-5, 0),
            (-5, 1),
            (-5, 2),
            (-4, -3),
            (-4, 3),
            (-3, -4),
            (-3, 4),
            (-2, -5),
            (-2, 5),
            (-1, -5),
            (-1, 5),
            (0, -5),
            (0, 5),
            (1, -5),
            (1, 5),
            (2, -5),
            (2, 5),
            (3, -4),
            (3, 4),
            (4, -3),
            (4, 3),
            (5, -2),
            (5, -1),
            (5, 0),
            (5, 1),
            (5, 2),
        ]);
        expected.sort();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_translation() {
        let at_origin = rasterize_circle(0, 0, 7).unwrap();
        let moved = rasterize_circle(100, -50, 7).unwrap();
        for (a, b) in at_origin.iter().zip(&moved) {
            assert_eq!((a.x + 100, a.y - 50), (b.x, b.y));
        }
    }

    #[test]
    fn test_circle_into_iter() {
        let circle = Circle::new(Point::ORIGIN, 3).unwrap();
        assert_eq!(circle.into_iter().count(), rasterize_circle(0, 0, 3).unwrap().len());
    }

    #[test]
    fn test_cells_past_grid_edge_are_clipped() {
        let m = i32::MAX;
        let mut cells = rasterize_circle_distinct(m, 0, 2).unwrap();
        cells.sort_unstable();
        assert_eq!(
            cells,
            pts(&[(m - 2, -1), (m - 2, 0), (m - 2, 1), (m - 1, -2), (m - 1, 2), (m, -2), (m, 2)])
        );

        let low = rasterize_circle(0, i32::MIN, 1).unwrap();
        assert!(low.contains(&Point::new(0, i32::MIN + 1)));
        assert!(low.iter().all(|p| p.y <= i32::MIN + 1));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let input = pts(&[(1, 1), (2, 2), (1, 1), (3, 3), (2, 2)]);
        assert_eq!(dedup_points(input), pts(&[(1, 1), (2, 2), (3, 3)]));
    }
}
