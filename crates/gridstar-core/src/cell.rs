//! The [`Cell`] type: one grid square with a traversal-state tag.

use crate::geom::{Coord, Point};

/// Traversal-state tag of a [`Cell`].
///
/// The tag is presentation state: it is what a driver draws. The search
/// engine keeps its own bookkeeping and only writes the `Frontier`,
/// `Visited` and `Path` tags as a side effect for display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Closed: fully expanded.
    Visited,
    /// Open: discovered but not yet expanded.
    Frontier,
    Path,
}

impl CellStatus {
    /// Whether the tag is one of the user-placed markers that search
    /// decoration never overwrites.
    #[inline]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Barrier | Self::Start | Self::End)
    }

    /// Whether the tag was written by a search run.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Visited | Self::Frontier | Self::Path)
    }
}

/// A single grid square.
///
/// Identity (`row`, `col`) is fixed at construction. The neighbor list is a
/// cache of traversable cardinal peers, rebuilt by
/// [`Grid::recompute_all_neighbors`](crate::Grid::recompute_all_neighbors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Coord,
    size: i32,
    total_rows: i32,
    status: CellStatus,
    neighbors: Vec<Coord>,
}

impl Cell {
    /// Create an empty cell at (`row`, `col`) in a grid of `total_rows`
    /// rows whose cells are `size` pixels wide.
    pub fn new(row: i32, col: i32, size: i32, total_rows: i32) -> Self {
        Self {
            pos: Coord::new(row, col),
            size,
            total_rows,
            status: CellStatus::Empty,
            neighbors: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    /// Side length in pixels (shared by every cell of a grid).
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Top-left pixel of the cell.
    #[inline]
    pub fn pixel_origin(&self) -> Point {
        Point::new(self.pos.col * self.size, self.pos.row * self.size)
    }

    #[inline]
    pub fn status(&self) -> CellStatus {
        self.status
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.status == CellStatus::Empty
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.status == CellStatus::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.status == CellStatus::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.status == CellStatus::End
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.status == CellStatus::Visited
    }

    #[inline]
    pub fn is_frontier(&self) -> bool {
        self.status == CellStatus::Frontier
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.status == CellStatus::Path
    }

    // Start, End, Barrier and Empty go through the Grid, which owns the
    // single-start / single-end invariant.

    pub(crate) fn set_empty(&mut self) {
        self.status = CellStatus::Empty;
    }

    pub(crate) fn set_barrier(&mut self) {
        self.status = CellStatus::Barrier;
    }

    pub(crate) fn set_start(&mut self) {
        self.status = CellStatus::Start;
    }

    pub(crate) fn set_end(&mut self) {
        self.status = CellStatus::End;
    }

    /// Mark as closed. Returns `false` (and leaves the tag alone) on a
    /// Start, End or Barrier cell.
    pub fn set_visited(&mut self) -> bool {
        self.decorate(CellStatus::Visited)
    }

    /// Mark as open. Same rules as [`set_visited`](Cell::set_visited).
    pub fn set_frontier(&mut self) -> bool {
        self.decorate(CellStatus::Frontier)
    }

    /// Mark as part of the final path. Same rules as
    /// [`set_visited`](Cell::set_visited).
    pub fn set_path(&mut self) -> bool {
        self.decorate(CellStatus::Path)
    }

    fn decorate(&mut self, status: CellStatus) -> bool {
        if self.status.is_fixed() {
            return false;
        }
        self.status = status;
        true
    }

    /// Cached traversable neighbors, in down/up/right/left order.
    #[inline]
    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }

    /// Replace the cached neighbor list.
    pub fn set_neighbors(&mut self, neighbors: Vec<Coord>) {
        self.neighbors = neighbors;
    }

    /// Rebuild the neighbor cache from the cardinal peers that are inside
    /// the grid and for which `is_barrier` is `false`.
    pub fn update_neighbors(&mut self, is_barrier: impl Fn(Coord) -> bool) {
        self.neighbors.clear();
        for n in self.pos.neighbors_4() {
            if n.in_square(self.total_rows) && !is_barrier(n) {
                self.neighbors.push(n);
            }
        }
    }
}
