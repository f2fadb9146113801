//! Rasterization of lines and circles.
//!
//! All algorithms are integer-only and incremental: no floating point is
//! evaluated per cell.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: 8-connected segment between two grid points
//! - **Midpoint Circle**: four-way mirrored circle outline
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs." *Communications of the ACM*, 20(2).

mod circle;
mod line;
mod primitives;

pub use circle::{dedup_points, rasterize_circle, rasterize_circle_distinct, CirclePoints};
pub use line::{rasterize_line, rasterize_line_symmetric, LinePoints};
pub use primitives::{draw_circle, draw_line, Drawable, Shape};
