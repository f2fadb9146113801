//! # Trueno-Raster
//!
//! Exact integer rasterization of lines and circles.
//!
//! Given two points on an integer grid, trueno-raster produces either the
//! Bresenham line between them or the midpoint circle centered on the first
//! and passing through the second. No floating point is evaluated per cell.
//! Model coordinates are centered on the drawing surface and mapped to device
//! pixels before plotting.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let cells = rasterize_line(0, 0, 5, 0);
//! assert_eq!(cells.len(), 6);
//!
//! let mut sketch = Sketch::new(64, 64)?;
//! sketch.draw(&parse_command("circle 0,0 3,4")?)?;
//! let png = PngEncoder::to_bytes(sketch.framebuffer())?;
//! assert!(!png.is_empty());
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML configuration file support (default)
//! - `cli`: the `trueno-raster` command-line binary
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Integer points, segments and circles.
pub mod geometry;

/// Model <-> device coordinate mapping.
pub mod coord;

/// Line and circle rasterization.
pub mod render;

/// Plot targets.
pub mod canvas;

// ============================================================================
// Surface & I/O Modules
// ============================================================================

/// Color types.
pub mod color;

/// In-memory RGBA framebuffer.
pub mod framebuffer;

/// Text and pointer input.
pub mod input;

/// Framebuffer-backed drawing surface.
pub mod sketch;

/// Output encoders (PNG, terminal).
pub mod output;

/// YAML configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, Pen};
    pub use crate::color::Rgba;
    pub use crate::coord::{to_device, to_model, CoordinateMapper, DeviceFrame, YAxis};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, LineSegment, Point};
    pub use crate::input::{parse_command, parse_point, DrawMode, DrawRequest, PointerCapture};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::render::{
        dedup_points, draw_circle, draw_line, rasterize_circle, rasterize_circle_distinct,
        rasterize_line, rasterize_line_symmetric, Drawable, Shape,
    };
    pub use crate::sketch::{Palette, Sketch};
}

// ============================================================================
// Tests
// ============================================================================
