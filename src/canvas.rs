//! Plot targets for rasterized cells.
//!
//! A [`Canvas`] receives one `plot(x, y)` call per rasterized cell. Surfaces
//! must accept any `i32` pair and silently drop cells they cannot show.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use std::collections::BTreeSet;

/// Anything that can receive plotted grid cells.
pub trait Canvas {
    /// Plot one cell. Repeated plots of the same cell must be harmless.
    fn plot(&mut self, x: i32, y: i32);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn plot(&mut self, x: i32, y: i32) {
        (**self).plot(x, y);
    }
}

/// Records every plot in call order, duplicates included.
impl Canvas for Vec<Point> {
    fn plot(&mut self, x: i32, y: i32) {
        self.push(Point::new(x, y));
    }
}

/// Collects the distinct set of plotted cells.
impl Canvas for BTreeSet<Point> {
    fn plot(&mut self, x: i32, y: i32) {
        self.insert(Point::new(x, y));
    }
}

/// A framebuffer paired with the color to plot in.
#[derive(Debug)]
pub struct Pen<'a> {
    fb: &'a mut Framebuffer,
    color: Rgba,
}

impl<'a> Pen<'a> {
    /// Plot into `fb` with `color`.
    pub fn new(fb: &'a mut Framebuffer, color: Rgba) -> Self {
        Self { fb, color }
    }
}

impl Canvas for Pen<'_> {
    fn plot(&mut self, x: i32, y: i32) {
        self.fb.set_pixel_signed(x, y, self.color);
    }
}
