//! Observable, interruptible A* search over a gridstar [`Grid`].
//!
//! The engine works on 4-connected unit-cost grids with the Manhattan
//! heuristic. Frontier entries are ordered by `(f, insertion sequence)`, so
//! equal-f ties resolve first-in first-out and every run over the same grid
//! expands cells in the same order.
//!
//! - [`astar`] searches between the grid's Start and End.
//! - [`AstarSearch`] exposes the same search one expansion at a time, with
//!   g/f/predecessor introspection.
//! - [`SearchObserver`] is the seam to the visualization driver: a redraw
//!   callback and a cancellation poll.
//!
//! [`Grid`]: gridstar_core::Grid

mod astar;
mod distance;
mod error;
mod node;
mod traits;

pub use astar::{AstarSearch, PathReport, SearchOutcome, Step, astar};
pub use distance::manhattan;
pub use error::{InvalidRequest, SearchError};
pub use traits::SearchObserver;
