//! Geometry primitives: [`Coord`] (grid identity) and [`Point`] (pixel
//! position).

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer pixel position. X grows right, Y grows down (screen
/// coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// The identity of a grid cell: a `(row, col)` pair.
///
/// Ordering is row-major, which matches the iteration order of
/// [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in expansion order: down, up, right,
    /// left. Bounds are not checked.
    #[inline]
    pub const fn neighbors_4(self) -> [Coord; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(0, -1),
        ]
    }

    /// Whether the coordinate lies inside an `n`×`n` grid.
    #[inline]
    pub const fn in_square(self, n: i32) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < n && self.col < n
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_neighbors_order() {
        let c = Coord::new(2, 2);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(3, 2),
                Coord::new(1, 2),
                Coord::new(2, 3),
                Coord::new(2, 1),
            ]
        );
    }

    #[test]
    fn coord_ordering_is_row_major() {
        assert!(Coord::new(0, 5) < Coord::new(1, 0));
        assert!(Coord::new(1, 0) < Coord::new(1, 1));
    }

    #[test]
    fn in_square_bounds() {
        assert!(Coord::new(0, 0).in_square(1));
        assert!(!Coord::new(1, 0).in_square(1));
        assert!(!Coord::new(-1, 0).in_square(5));
        assert!(!Coord::new(0, 5).in_square(5));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(4, 7).to_string(), "(4, 7)");
        assert_eq!(Point::new(-1, 2).to_string(), "(-1, 2)");
    }
}
