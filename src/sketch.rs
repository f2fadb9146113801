//! A drawing surface that accepts one draw request at a time.
//!
//! [`Sketch`] owns a [`Framebuffer`], clears it to a background with the two
//! coordinate axes through the frame center, maps model-space requests to
//! device space and plots them with the ink color.

use crate::canvas::Pen;
use crate::color::Rgba;
use crate::coord::{CoordinateMapper, DeviceFrame, YAxis};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::input::{DrawMode, DrawRequest, PointerCapture};
use crate::render::{Drawable, Shape};

/// Axis stroke width in pixels.
const AXIS_WIDTH: u32 = 2;

/// Colors used by a [`Sketch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Surface background.
    pub background: Rgba,
    /// Plotted cells.
    pub ink: Rgba,
    /// Vertical axis through the model origin.
    pub vertical_axis: Rgba,
    /// Horizontal axis through the model origin.
    pub horizontal_axis: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            ink: Rgba::BLACK,
            vertical_axis: Rgba::RED,
            horizontal_axis: Rgba::BLUE,
        }
    }
}

/// Framebuffer-backed surface with centered model coordinates.
#[derive(Debug, Clone)]
pub struct Sketch {
    fb: Framebuffer,
    mapper: CoordinateMapper,
    palette: Palette,
    axes: bool,
    capture: PointerCapture,
}

impl Sketch {
    /// Create a cleared surface with axes.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or does not fit an `i32`.
    /// The frame is validated before any pixel memory is allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mapper = CoordinateMapper::new(DeviceFrame::from_size(width, height)?);
        let fb = Framebuffer::new(width, height)?;
        let mut sketch =
            Self { fb, mapper, palette: Palette::default(), axes: true, capture: PointerCapture::Idle };
        sketch.clear();
        Ok(sketch)
    }

    /// Replace the palette and clear.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self.clear();
        self
    }

    /// Enable or disable the axes and clear.
    #[must_use]
    pub fn with_axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self.clear();
        self
    }

    /// Choose the model y axis direction.
    #[must_use]
    pub fn with_y_axis(mut self, y_axis: YAxis) -> Self {
        self.mapper = self.mapper.y_axis(y_axis);
        self
    }

    /// Wipe everything drawn and redraw the axes.
    pub fn clear(&mut self) {
        self.fb.clear(self.palette.background);
        self.capture.cancel();

        if self.axes {
            let origin = self.mapper.frame().origin();
            let (w, h) = (self.fb.width(), self.fb.height());
            let half = (AXIS_WIDTH / 2) as i32;
            self.fb.fill_rect(origin.x - half, 0, AXIS_WIDTH, h, self.palette.vertical_axis);
            self.fb.fill_rect(0, origin.y - half, w, AXIS_WIDTH, self.palette.horizontal_axis);
        }
    }

    /// Rasterize a model-space request onto the surface.
    ///
    /// Returns the number of cells plotted, including clipped ones.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the surface untouched, if the request does
    /// not describe a valid shape.
    pub fn draw(&mut self, request: &DrawRequest) -> Result<usize> {
        Ok(self.draw_shape(&request.shape()?))
    }

    /// Rasterize a model-space shape onto the surface.
    pub fn draw_shape(&mut self, shape: &Shape) -> usize {
        let device = shape.to_device(&self.mapper);
        let plotted = device.draw(&mut Pen::new(&mut self.fb, self.palette.ink));
        log::debug!("plotted {plotted} cells for {shape:?} (device {device:?})");
        plotted
    }

    /// Feed a pointer press at a device pixel.
    ///
    /// The first press anchors a point and returns `Ok(None)`; the second
    /// draws the shape between the two and returns its cell count.
    ///
    /// # Errors
    ///
    /// Returns an error if the completed request is not a valid shape.
    pub fn press(&mut self, device: Point, mode: DrawMode) -> Result<Option<usize>> {
        let model = self.mapper.to_model(device);
        match self.capture.press(model, mode) {
            Some(request) => self.draw(&request).map(Some),
            None => Ok(None),
        }
    }

    /// Pointer capture state.
    #[must_use]
    pub const fn capture(&self) -> PointerCapture {
        self.capture
    }

    /// Coordinate mapping in use.
    #[must_use]
    pub const fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Palette in use.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The rendered pixels.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }
}
