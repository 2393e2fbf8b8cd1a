//! The [`Grid`] type: an N×N square of owned [`Cell`]s.
//!
//! The grid is the only owner of its cells. Cells refer to their
//! neighbors by [`Coord`], never by reference, so the neighbor cache can be
//! rebuilt at any time without aliasing.

use std::fmt;

use crate::cell::{Cell, CellStatus};
use crate::error::GridError;
use crate::geom::{Coord, Point};

/// Default number of rows (and columns) of an interactive grid.
pub const DEFAULT_ROWS: i32 = 50;

/// Map a pixel position to the cell under it.
///
/// Each cell is `pixel_width / rows` pixels wide. Pure coordinate
/// transform: fails if the cell size is zero or the point falls outside
/// the grid.
pub fn coordinate_from_point(p: Point, rows: i32, pixel_width: i32) -> Result<Coord, GridError> {
    if rows <= 0 || pixel_width < 0 {
        return Err(GridError::InvalidDimensions { rows, pixel_width });
    }
    let gap = pixel_width / rows;
    if gap == 0 {
        return Err(GridError::InvalidDimensions { rows, pixel_width });
    }
    if p.x < 0 || p.y < 0 {
        return Err(GridError::PointOutOfBounds {
            point: p,
            pixel_width,
        });
    }
    let c = Coord::new(p.y / gap, p.x / gap);
    if !c.in_square(rows) {
        return Err(GridError::PointOutOfBounds {
            point: p,
            pixel_width,
        });
    }
    Ok(c)
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A square grid of cells with at most one Start and at most one End.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    pixel_width: i32,
    cell_size: i32,
    cells: Vec<Cell>,
    start: Option<Coord>,
    end: Option<Coord>,
    neighbors_stale: bool,
}

impl Grid {
    /// Create a `rows`×`rows` grid of empty cells laid out over
    /// `pixel_width` pixels.
    pub fn new(rows: i32, pixel_width: i32) -> Result<Self, GridError> {
        if rows <= 0 || pixel_width < 0 {
            return Err(GridError::InvalidDimensions { rows, pixel_width });
        }
        let cell_size = pixel_width / rows;
        let n = rows as usize;
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..rows {
            for col in 0..rows {
                cells.push(Cell::new(row, col, cell_size, rows));
            }
        }
        Ok(Self {
            rows,
            pixel_width,
            cell_size,
            cells,
            start: None,
            end: None,
            neighbors_stale: true,
        })
    }

    /// Build a grid from a square ASCII picture, one cell size per pixel.
    ///
    /// `.` empty, `#` barrier, `S` start, `E` end. Whitespace around each
    /// line is ignored.
    pub fn from_ascii(picture: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let mut grid = Self::new(rows, rows)?;
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != lines.len() {
                return Err(GridError::InvalidLayout(format!(
                    "line {row} has {} cells, expected {rows}",
                    line.chars().count()
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let c = Coord::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => grid.set_barrier(c)?,
                    'S' => grid.set_start(c)?,
                    'E' => grid.set_end(c)?,
                    other => {
                        return Err(GridError::InvalidLayout(format!(
                            "unexpected {other:?} at {c}"
                        )));
                    }
                }
            }
        }
        Ok(grid)
    }

    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn pixel_width(&self) -> i32 {
        self.pixel_width
    }

    /// Side length of every cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.in_square(self.rows)
    }

    /// Flat row-major index of `c`.
    pub fn index(&self, c: Coord) -> Result<usize, GridError> {
        if !self.contains(c) {
            return Err(GridError::OutOfBounds {
                coord: c,
                size: self.rows,
            });
        }
        Ok((c.row * self.rows + c.col) as usize)
    }

    /// The coordinate of flat index `idx`. `idx` must be below
    /// [`len`](Grid::len).
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let n = self.rows as usize;
        Coord::new((idx / n) as i32, (idx % n) as i32)
    }

    /// The cell at (`row`, `col`).
    pub fn cell_at(&self, row: i32, col: i32) -> Result<&Cell, GridError> {
        self.cell(Coord::new(row, col))
    }

    pub fn cell(&self, c: Coord) -> Result<&Cell, GridError> {
        let i = self.index(c)?;
        Ok(&self.cells[i])
    }

    /// Mutable access for search decoration. Start, End and Barrier tags
    /// can only be changed through the grid's own setters.
    pub fn cell_mut(&mut self, c: Coord) -> Result<&mut Cell, GridError> {
        let i = self.index(c)?;
        Ok(&mut self.cells[i])
    }

    pub fn status(&self, c: Coord) -> Result<CellStatus, GridError> {
        Ok(self.cell(c)?.status())
    }

    /// Row-major iterator over cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// The cell under pixel `p`.
    pub fn coord_at_pixel(&self, p: Point) -> Result<Coord, GridError> {
        coordinate_from_point(p, self.rows, self.pixel_width)
    }

    // -----------------------------------------------------------------------
    // Marker mutations
    // -----------------------------------------------------------------------

    /// Make `c` the Start cell. A previous Start becomes Empty; if `c` was
    /// the End, the grid no longer has an End.
    pub fn set_start(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.index(c)?;
        self.release(c, i);
        if let Some(old) = self.start.take() {
            let oi = self.index(old)?;
            self.cells[oi].set_empty();
        }
        self.cells[i].set_start();
        self.start = Some(c);
        Ok(())
    }

    /// Make `c` the End cell. A previous End becomes Empty; if `c` was the
    /// Start, the grid no longer has a Start.
    pub fn set_end(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.index(c)?;
        self.release(c, i);
        if let Some(old) = self.end.take() {
            let oi = self.index(old)?;
            self.cells[oi].set_empty();
        }
        self.cells[i].set_end();
        self.end = Some(c);
        Ok(())
    }

    /// Place a barrier on `c`, removing Start or End if it was there.
    pub fn set_barrier(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.index(c)?;
        self.release(c, i);
        self.cells[i].set_barrier();
        self.neighbors_stale = true;
        Ok(())
    }

    /// Reset `c` to Empty, removing Start or End if it was there.
    pub fn set_empty(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.index(c)?;
        self.release(c, i);
        self.cells[i].set_empty();
        Ok(())
    }

    /// Drop whatever marker `c` carries before it gets a new tag.
    fn release(&mut self, c: Coord, i: usize) {
        if self.start == Some(c) {
            self.start = None;
        }
        if self.end == Some(c) {
            self.end = None;
        }
        if self.cells[i].is_barrier() {
            self.neighbors_stale = true;
        }
        self.cells[i].set_empty();
    }

    /// Replace every cell with a fresh empty one and forget Start/End.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::new(cell.row(), cell.col(), self.cell_size, self.rows);
        }
        self.start = None;
        self.end = None;
        self.neighbors_stale = true;
        log::debug!("cleared {}x{} grid", self.rows, self.rows);
    }

    /// Turn Visited, Frontier and Path cells back into Empty. Barrier,
    /// Start and End are kept.
    pub fn reset_search_marks(&mut self) {
        let mut n = 0;
        for cell in self.cells.iter_mut() {
            if cell.status().is_search_mark() {
                cell.set_empty();
                n += 1;
            }
        }
        log::trace!("reset {n} search marks");
    }

    // -----------------------------------------------------------------------
    // Neighbor cache
    // -----------------------------------------------------------------------

    /// Rebuild every cell's neighbor list from the current barriers.
    pub fn recompute_all_neighbors(&mut self) {
        let barriers: Vec<bool> = self.cells.iter().map(Cell::is_barrier).collect();
        let n = self.rows;
        for cell in self.cells.iter_mut() {
            cell.update_neighbors(|p| barriers[(p.row * n + p.col) as usize]);
        }
        self.neighbors_stale = false;
    }

    /// Whether a barrier changed since the last recompute.
    #[inline]
    pub fn neighbors_stale(&self) -> bool {
        self.neighbors_stale
    }

    /// Recompute the neighbor cache if it is stale. Returns whether a
    /// recompute happened.
    pub fn ensure_neighbors(&mut self) -> bool {
        if !self.neighbors_stale {
            return false;
        }
        self.recompute_all_neighbors();
        true
    }

    /// Current tags in row-major order.
    pub fn statuses(&self) -> Vec<CellStatus> {
        self.cells.iter().map(Cell::status).collect()
    }
}

impl fmt::Display for Grid {
    /// One line per row: `.` empty, `#` barrier, `S` start, `E` end,
    /// `x` visited, `o` frontier, `*` path.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.rows as usize) {
            for cell in row {
                let ch = match cell.status() {
                    CellStatus::Empty => '.',
                    CellStatus::Barrier => '#',
                    CellStatus::Start => 'S',
                    CellStatus::End => 'E',
                    CellStatus::Visited => 'x',
                    CellStatus::Frontier => 'o',
                    CellStatus::Path => '*',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell whose tag changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub pos: Coord,
    pub status: CellStatus,
}

/// A set of cell changes (a diff frame), plus an optional status line.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub rows: i32,
    pub message: Option<String>,
}

/// Diff `grid` against a previous [`Grid::statuses`] snapshot.
///
/// If the snapshot does not match the grid size every cell is included.
pub fn compute_frame(prev: &[CellStatus], grid: &Grid) -> Frame {
    let full = prev.len() != grid.len();
    let cells = grid
        .iter()
        .enumerate()
        .filter(|&(i, cell)| full || prev[i] != cell.status())
        .map(|(_, cell)| FrameCell {
            pos: cell.pos(),
            status: cell.status(),
        })
        .collect();
    Frame {
        cells,
        rows: grid.rows(),
        message: None,
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn frame_round_trip() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set_start(Coord::new(0, 1)).unwrap();
        let frame = compute_frame(&[], &g);
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cells, frame.cells);
        assert_eq!(back.rows, 2);
    }
}
