//! Grid errors.

use thiserror::Error;

use crate::geom::{Coord, Point};

/// Errors raised by [`Grid`](crate::Grid) construction and indexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid must have at least one row and a non-negative pixel width.
    #[error("invalid grid dimensions: {rows} rows over {pixel_width} pixels")]
    InvalidDimensions { rows: i32, pixel_width: i32 },
    /// A coordinate outside the `size`×`size` grid.
    #[error("cell {coord} is out of bounds for a {size}x{size} grid")]
    OutOfBounds { coord: Coord, size: i32 },
    /// A pixel position that does not map onto any cell.
    #[error("pixel {point} is outside a {pixel_width}px grid")]
    PointOutOfBounds { point: Point, pixel_width: i32 },
    /// An ASCII grid picture that is not square or uses unknown symbols.
    #[error("invalid grid layout: {0}")]
    InvalidLayout(String),
}
