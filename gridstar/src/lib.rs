//! **gridstar**: an interactive A* pathfinding visualizer.
//!
//! Place a start, an end and barriers on a square grid with the mouse, then
//! watch the search expand its frontier step by step. The search itself
//! lives in `gridstar-paths`; this crate holds the editing rules
//! ([`Session`]), the application loop ([`App`]) and its configuration.

pub mod app;
pub mod config;
pub mod session;

pub use app::App;
pub use config::{Args, SessionConfig};
pub use session::{Effect, Session};
