//! Drawing rasterized primitives onto a [`Canvas`].

use crate::canvas::Canvas;
use crate::coord::CoordinateMapper;
use crate::error::Result;
use crate::geometry::{Circle, LineSegment, Point};

use super::circle::CirclePoints;
use super::line::LinePoints;

/// Trait for shapes that can be plotted cell by cell.
pub trait Drawable {
    /// Plot every cell of this shape, returning how many `plot` calls were made.
    fn draw(&self, canvas: &mut dyn Canvas) -> usize;
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Plot the Bresenham line from `(x0, y0)` to `(x1, y1)` onto `canvas`.
pub fn draw_line<C: Canvas + ?Sized>(canvas: &mut C, x0: i32, y0: i32, x1: i32, y1: i32) {
    for p in LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)) {
        canvas.plot(p.x, p.y);
    }
}

impl Drawable for LineSegment {
    fn draw(&self, canvas: &mut dyn Canvas) -> usize {
        plot_all(canvas, LinePoints::new(self.start, self.end))
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Plot the midpoint circle of radius `r` around `(cx, cy)` onto `canvas`.
///
/// Nothing is plotted when the radius is rejected.
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`](crate::Error::NegativeRadius) if `r < 0`.
pub fn draw_circle<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, cy: i32, r: i32) -> Result<()> {
    let circle = Circle::new(Point::new(cx, cy), r)?;
    for p in CirclePoints::new(circle) {
        canvas.plot(p.x, p.y);
    }
    Ok(())
}

impl Drawable for Circle {
    fn draw(&self, canvas: &mut dyn Canvas) -> usize {
        plot_all(canvas, CirclePoints::new(*self))
    }
}

// ============================================================================
// Shapes
// ============================================================================

/// One drawable shape, either kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A straight segment.
    Line(LineSegment),
    /// A circle outline.
    Circle(Circle),
}

impl Shape {
    /// Translate this model-space shape into device space.
    ///
    /// Only anchor points move; a circle keeps its radius.
    #[must_use]
    pub fn to_device(&self, mapper: &CoordinateMapper) -> Self {
        match *self {
            Self::Line(seg) => {
                Self::Line(LineSegment::new(mapper.to_device(seg.start), mapper.to_device(seg.end)))
            }
            Self::Circle(circle) => Self::Circle(circle.with_center(mapper.to_device(circle.center()))),
        }
    }

    /// All cells of the shape, in plot order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        let mut cells = Vec::new();
        self.draw(&mut cells);
        cells
    }
}

impl Drawable for Shape {
    fn draw(&self, canvas: &mut dyn Canvas) -> usize {
        match self {
            Self::Line(seg) => seg.draw(canvas),
            Self::Circle(circle) => circle.draw(canvas),
        }
    }
}

fn plot_all(canvas: &mut dyn Canvas, cells: impl Iterator<Item = Point>) -> usize {
    let mut count = 0;
    for p in cells {
        canvas.plot(p.x, p.y);
        count += 1;
    }
    count
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Pen;
    use crate::color::Rgba;
    use crate::coord::{DeviceFrame, YAxis};
    use crate::error::Error;
    use crate::framebuffer::Framebuffer;

    #[test]
    fn test_draw_line_horizontal() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        draw_line(&mut Pen::new(&mut fb, Rgba::BLACK), 10, 50, 90, 50);

        assert_eq!(fb.get_pixel(10, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 50), Some(Rgba::BLACK));
        assert_eq!(fb.count_color(Rgba::BLACK), 81);
    }

    #[test]
    fn test_line_out_of_bounds() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        // Line that goes out of bounds should not panic
        draw_line(&mut Pen::new(&mut fb, Rgba::BLACK), -10, -10, 110, 110);

        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(99, 99), Some(Rgba::BLACK));
        assert_eq!(fb.count_color(Rgba::BLACK), 100);
    }

    #[test]
    fn test_draw_circle_outline() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        draw_circle(&mut Pen::new(&mut fb, Rgba::GREEN), 50, 50, 20).unwrap();

        assert_eq!(fb.get_pixel(70, 50), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(50, 30), Some(Rgba::GREEN));
        // Center should still be white (outline only)
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_circle_negative_radius_plots_nothing() {
        let mut cells: Vec<Point> = Vec::new();
        let result = draw_circle(&mut cells, 0, 0, -2);
        assert!(matches!(result, Err(Error::NegativeRadius(-2))));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_drawable_counts_plots() {
        let mut cells: Vec<Point> = Vec::new();
        let seg = LineSegment::from_coords(0, 0, 5, 0);
        assert_eq!(seg.draw(&mut cells), 6);

        let circle = Circle::new(Point::ORIGIN, 5).unwrap();
        assert_eq!(circle.draw(&mut cells), 32);
        assert_eq!(cells.len(), 38);
    }

    #[test]
    fn test_shape_points_degenerate_line() {
        let shape = Shape::Line(LineSegment::from_coords(5, 5, 5, 5));
        assert_eq!(shape.points(), vec![Point::new(5, 5)]);
    }

    #[test]
    fn test_shape_to_device() {
        let frame = DeviceFrame::new(200, 100).unwrap();
        let mapper = CoordinateMapper::new(frame);

        let line = Shape::Line(LineSegment::from_coords(-10, 0, 10, 5));
        assert_eq!(
            line.to_device(&mapper),
            Shape::Line(LineSegment::from_coords(90, 50, 110, 55))
        );

        let circle = Shape::Circle(Circle::new(Point::new(1, 2), 7).unwrap());
        assert_eq!(
            circle.to_device(&mapper.y_axis(YAxis::Up)),
            Shape::Circle(Circle::new(Point::new(101, 48), 7).unwrap())
        );
    }
}
