//! Error types for trueno-raster operations.

use crate::geometry::Point;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
///
/// Rasterization itself is total over valid inputs: every variant here is
/// raised during validation, before any point is produced.
#[derive(Error, Debug)]
pub enum Error {
    /// Device frame with a non-positive width or height.
    #[error("Invalid device frame: {width}x{height} (dimensions must be positive)")]
    InvalidFrame {
        /// Width value.
        width: i32,
        /// Height value.
        height: i32,
    },

    /// Circle radius below zero.
    #[error("Negative radius: {0}")]
    NegativeRadius(i32),

    /// Distance between a circle's center and rim point exceeds `i32::MAX`.
    #[error("Radius out of range: distance from {center} to {rim} exceeds i32::MAX")]
    RadiusOutOfRange {
        /// Circle center.
        center: Point,
        /// Point on the rim.
        rim: Point,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Malformed `x, y` coordinate pair.
    #[error("Invalid point: {0}")]
    ParsePoint(String),

    /// Malformed draw command or draw mode.
    #[error("Invalid command: {0}")]
    ParseCommand(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_frame_display() {
        let err = Error::InvalidFrame { width: 0, height: -4 };
        let msg = err.to_string();
        assert!(msg.contains("Invalid device frame"));
        assert!(msg.contains("0x-4"));
    }

    #[test]
    fn test_negative_radius_display() {
        let err = Error::NegativeRadius(-3);
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_radius_out_of_range_display() {
        let err = Error::RadiusOutOfRange { center: Point::new(i32::MIN, 0), rim: Point::ORIGIN };
        let msg = err.to_string();
        assert!(msg.contains("Radius out of range"));
        assert!(msg.contains("(-2147483648, 0)"));
    }

    #[test]
    fn test_config_parse_reports_line() {
        let err = Error::ConfigParse { line: 7, message: "bad".into() };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
