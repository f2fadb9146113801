//! Text and pointer input for draw requests.
//!
//! # Syntax
//!
//! ```text
//! <mode> <point A> <point B>
//!
//! Modes:  line | circle
//! Points: x,y  or  (x, y)  - integers or decimals, rounded to the nearest cell
//! ```
//!
//! For `line` the points are the two endpoints. For `circle`, A is the center
//! and the radius is the rounded distance from A to B.
//!
//! # Example
//!
//! ```rust
//! use trueno_raster::input::{parse_command, DrawMode};
//! use trueno_raster::geometry::Point;
//!
//! let request = parse_command("circle 0,0 3.2,4").unwrap();
//! assert_eq!(request.mode, DrawMode::Circle);
//! assert_eq!(request.b, Point::new(3, 4));
//! ```

use crate::error::{Error, Result};
use crate::geometry::{Circle, LineSegment, Point};
use crate::render::Shape;
use std::fmt;
use std::str::FromStr;

/// Which rasterizer a draw request invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum DrawMode {
    /// Straight segment between the two points.
    #[default]
    Line,
    /// Circle centered on the first point, through the second.
    Circle,
}

impl FromStr for DrawMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "line" | "segment" => Ok(Self::Line),
            "circle" => Ok(Self::Circle),
            other => Err(Error::ParseCommand(format!("unknown draw mode '{other}'"))),
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Line => "line",
            Self::Circle => "circle",
        })
    }
}

/// Two model-space points and the mode that interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRequest {
    /// Selected rasterizer.
    pub mode: DrawMode,
    /// First point: line start or circle center.
    pub a: Point,
    /// Second point: line end or a point on the circle.
    pub b: Point,
}

impl DrawRequest {
    /// Create a request.
    #[must_use]
    pub const fn new(mode: DrawMode, a: Point, b: Point) -> Self {
        Self { mode, a, b }
    }

    /// The model-space shape this request describes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RadiusOutOfRange`] for a circle whose points are
    /// further apart than any `i32` radius.
    pub fn shape(&self) -> Result<Shape> {
        Ok(match self.mode {
            DrawMode::Line => Shape::Line(LineSegment::new(self.a, self.b)),
            DrawMode::Circle => Shape::Circle(Circle::through(self.a, self.b)?),
        })
    }
}

impl FromStr for DrawRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_command(s)
    }
}

impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_point(s)
    }
}

/// Parse an `x, y` pair such as `"10, -4"`, `"(2.5,3)"` or `" -1 , 0 "`.
///
/// Decimals are rounded half away from zero.
///
/// # Errors
///
/// Returns [`Error::ParsePoint`] unless the input is exactly two finite numbers
/// that fit the `i32` grid once rounded.
pub fn parse_point(s: &str) -> Result<Point> {
    let trimmed = s.trim();
    let inner = match trimmed.strip_prefix('(') {
        Some(rest) => rest
            .strip_suffix(')')
            .ok_or_else(|| Error::ParsePoint(format!("unbalanced parenthesis in '{trimmed}'")))?,
        None => trimmed,
    };

    let mut parts = inner.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(
            parse_coordinate(x).map_err(Error::ParsePoint)?,
            parse_coordinate(y).map_err(Error::ParsePoint)?,
        )),
        _ => Err(Error::ParsePoint(format!("expected 'x, y', got '{trimmed}'"))),
    }
}

/// Parse a full draw command, `"<line|circle> <A> <B>"`.
///
/// # Errors
///
/// Returns [`Error::ParseCommand`] for an empty command, unknown mode, or
/// anything other than two points after the mode.
pub fn parse_command(command: &str) -> Result<DrawRequest> {
    let command = command.trim();
    if command.is_empty() {
        return Err(Error::ParseCommand("empty command".into()));
    }

    let (mode, rest) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
    let mode: DrawMode = mode.parse()?;

    let (a, rest) = split_point(rest, mode)?;
    let (b, rest) = split_point(rest, mode)?;
    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(Error::ParseCommand(format!("{mode} takes two points, found trailing '{rest}'")));
    }

    let point = |token: &str| parse_point(token).map_err(|e| Error::ParseCommand(e.to_string()));
    Ok(DrawRequest::new(mode, point(a)?, point(b)?))
}

/// Split the leading `(x, y)` or `x, y` token off `text`.
fn split_point(text: &str, mode: DrawMode) -> Result<(&str, &str)> {
    let text = text.trim_start();
    let end = if text.starts_with('(') {
        let close = text
            .find(')')
            .ok_or_else(|| Error::ParseCommand(format!("unbalanced parenthesis in '{text}'")))?;
        close + 1
    } else {
        let comma = text
            .find(',')
            .ok_or_else(|| Error::ParseCommand(format!("{mode} needs two 'x,y' points")))?;
        let after = &text[comma + 1..];
        let y = after.trim_start();
        let y_len = y.find(|c: char| c.is_whitespace() || c == '(').unwrap_or(y.len());
        comma + 1 + (after.len() - y.len()) + y_len
    };
    Ok(text.split_at(end))
}

/// One coordinate, rounded onto the grid.
fn parse_coordinate(token: &str) -> std::result::Result<i32, String> {
    let token = token.trim();
    let value: f64 = token.parse().map_err(|_| format!("invalid number '{token}'"))?;
    if !value.is_finite() {
        return Err(format!("non-finite coordinate '{token}'"));
    }

    let rounded = value.round();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(format!("coordinate '{token}' is outside the grid"));
    }
    Ok(rounded as i32)
}

/// Two-click pointer capture: the first press anchors, the second completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerCapture {
    /// No point captured yet.
    #[default]
    Idle,
    /// First point captured, waiting for the second.
    AwaitingSecondPoint(Point),
}

impl PointerCapture {
    /// Feed one press (model space). Returns the completed request on every
    /// second press and returns to [`PointerCapture::Idle`].
    pub fn press(&mut self, point: Point, mode: DrawMode) -> Option<DrawRequest> {
        match *self {
            Self::Idle => {
                *self = Self::AwaitingSecondPoint(point);
                None
            }
            Self::AwaitingSecondPoint(first) => {
                *self = Self::Idle;
                Some(DrawRequest::new(mode, first, point))
            }
        }
    }

    /// Drop a half-finished capture.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// The anchored first point, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::AwaitingSecondPoint(p) => Some(*p),
        }
    }
}
