//! Model <-> device coordinate mapping.
//!
//! Model space puts the origin at the center of the drawing surface; device
//! space puts it at the top-left corner. The mapping is a pure translation by
//! `(width / 2, height / 2)` (integer division), optionally mirroring the y
//! axis so that model y grows upward.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

/// Device surface size in pixels. Both dimensions are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceFrame {
    width: i32,
    height: i32,
}

impl DeviceFrame {
    /// Create a frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] if either dimension is zero or negative.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidFrame { width, height });
        }
        Ok(Self { width, height })
    }

    /// Frame for an unsigned pixel size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension exceeds
    /// `i32::MAX`, and [`Error::InvalidFrame`] if either is zero.
    pub fn from_size(width: u32, height: u32) -> Result<Self> {
        match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => Self::new(w, h),
            _ => Err(Error::InvalidDimensions { width, height }),
        }
    }

    /// Frame matching a framebuffer's pixel size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the framebuffer is wider or
    /// taller than `i32::MAX` pixels.
    pub fn from_framebuffer(fb: &Framebuffer) -> Result<Self> {
        Self::from_size(fb.width(), fb.height())
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Device position of the model origin.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }
}

/// Direction in which model y grows on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum YAxis {
    /// Model y grows downward, same as device y.
    #[default]
    Down,
    /// Model y grows upward (mathematical convention).
    Up,
}

/// Translates points between model and device space for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    frame: DeviceFrame,
    y_axis: YAxis,
}

impl CoordinateMapper {
    /// Mapper with the default [`YAxis::Down`] convention.
    #[must_use]
    pub const fn new(frame: DeviceFrame) -> Self {
        Self { frame, y_axis: YAxis::Down }
    }

    /// Set the y axis convention.
    #[must_use]
    pub const fn y_axis(mut self, y_axis: YAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    /// The frame this mapper translates into.
    #[must_use]
    pub const fn frame(&self) -> DeviceFrame {
        self.frame
    }

    /// Model point to device pixel.
    #[must_use]
    pub fn to_device(&self, p: Point) -> Point {
        let origin = self.frame.origin();
        let y = match self.y_axis {
            YAxis::Down => origin.y.wrapping_add(p.y),
            YAxis::Up => origin.y.wrapping_sub(p.y),
        };
        Point::new(origin.x.wrapping_add(p.x), y)
    }

    /// Device pixel to model point. Exact inverse of [`Self::to_device`].
    #[must_use]
    pub fn to_model(&self, p: Point) -> Point {
        let origin = self.frame.origin();
        let y = match self.y_axis {
            YAxis::Down => p.y.wrapping_sub(origin.y),
            YAxis::Up => origin.y.wrapping_sub(p.y),
        };
        Point::new(p.x.wrapping_sub(origin.x), y)
    }
}

/// Model point to device pixel, y growing downward.
#[must_use]
pub fn to_device(p: Point, frame: DeviceFrame) -> Point {
    CoordinateMapper::new(frame).to_device(p)
}

/// Device pixel to model point, y growing downward.
#[must_use]
pub fn to_model(p: Point, frame: DeviceFrame) -> Point {
    CoordinateMapper::new(frame).to_model(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rejects_non_positive() {
        assert!(matches!(
            DeviceFrame::new(0, 10),
            Err(Error::InvalidFrame { width: 0, height: 10 })
        ));
        assert!(DeviceFrame::new(10, -1).is_err());
        assert!(DeviceFrame::new(1, 1).is_ok());
    }

    #[test]
    fn test_origin_uses_integer_division() {
        let frame = DeviceFrame::new(801, 599).unwrap();
        assert_eq!(frame.origin(), Point::new(400, 299));
    }

    #[test]
    fn test_to_device_centers() {
        let frame = DeviceFrame::new(800, 600).unwrap();
        assert_eq!(to_device(Point::ORIGIN, frame), Point::new(400, 300));
        assert_eq!(to_device(Point::new(-10, 20), frame), Point::new(390, 320));
    }

    #[test]
    fn test_to_model_inverts() {
        let frame = DeviceFrame::new(800, 600).unwrap();
        assert_eq!(to_model(Point::new(0, 0), frame), Point::new(-400, -300));
        assert_eq!(to_model(Point::new(390, 320), frame), Point::new(-10, 20));
    }

    #[test]
    fn test_y_up_mirrors() {
        let frame = DeviceFrame::new(100, 100).unwrap();
        let mapper = CoordinateMapper::new(frame).y_axis(YAxis::Up);
        assert_eq!(mapper.to_device(Point::new(10, 20)), Point::new(60, 30));
        assert_eq!(mapper.to_model(Point::new(60, 30)), Point::new(10, 20));
    }

    #[test]
    fn test_from_size_reports_real_dimensions() {
        let too_wide = u32::try_from(i32::MAX).unwrap() + 1;
        assert!(matches!(
            DeviceFrame::from_size(too_wide, 10),
            Err(Error::InvalidDimensions { width, height: 10 }) if width == too_wide
        ));
        assert!(matches!(
            DeviceFrame::from_size(0, 10),
            Err(Error::InvalidFrame { width: 0, height: 10 })
        ));
        assert_eq!(DeviceFrame::from_size(640, 480).unwrap(), DeviceFrame::new(640, 480).unwrap());
    }

    #[test]
    fn test_from_framebuffer() {
        let fb = Framebuffer::new(64, 48).unwrap();
        let frame = DeviceFrame::from_framebuffer(&fb).unwrap();
        assert_eq!((frame.width(), frame.height()), (64, 48));
    }
}
