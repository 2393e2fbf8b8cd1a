//! **gridstar-core**: grid, cell and driver types for the interactive A*
//! visualizer.
//!
//! This crate provides the state the search runs over: an N×N [`Grid`] that
//! exclusively owns its [`Cell`]s, the coordinate types, input messages, a
//! cooperative cancellation [`Context`], and the [`Driver`] trait rendering
//! back-ends implement.

pub mod app;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod messages;

pub use app::{Context, Driver};
pub use cell::{Cell, CellStatus};
pub use error::GridError;
pub use geom::{Coord, Point};
pub use grid::{DEFAULT_ROWS, Frame, FrameCell, Grid, compute_frame, coordinate_from_point};
pub use messages::*;
