//! Session configuration and its command-line form.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use gridstar_core::{DEFAULT_ROWS, GridError};
use gridstar_crossterm::{DEFAULT_CELL_WIDTH, required_size};

/// Default pause between two search steps, so expansion is visible.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(5);

/// Everything a [`Session`](crate::Session) needs to build its grid and
/// pace its search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Rows (and columns) of the square grid.
    pub rows: i32,
    /// Terminal columns per cell; also the cell size in pixels.
    pub cell_width: u16,
    /// How long each cancellation poll may wait during a search.
    pub step_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cell_width: DEFAULT_CELL_WIDTH,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

impl SessionConfig {
    /// Width of the grid in the driver's pixel space.
    #[inline]
    pub fn pixel_width(&self) -> i32 {
        self.rows.saturating_mul(self.cell_width as i32)
    }

    /// Reject dimensions the grid cannot be built with, or that the terminal
    /// cannot address.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows <= 0
            || self.cell_width == 0
            || required_size(self.rows, self.cell_width).is_none()
        {
            return Err(GridError::InvalidDimensions {
                rows: self.rows,
                pixel_width: self.pixel_width(),
            });
        }
        Ok(())
    }
}

/// Interactive A* pathfinding visualizer.
///
/// Left click places the start, then the end, then barriers. Right click
/// erases. Space runs the search, c clears the grid, q or Esc quits.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Rows (and columns) of the grid
    #[arg(short, long, default_value_t = DEFAULT_ROWS, env = "GRIDSTAR_ROWS")]
    pub rows: i32,

    /// Terminal columns used to draw one cell
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: u16,

    /// Milliseconds to wait for input between search steps
    #[arg(long, default_value_t = 5)]
    pub step_delay_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            rows: self.rows,
            cell_width: self.cell_width,
            step_delay: Duration::from_millis(self.step_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SessionConfig::default();
        assert_eq!(c.rows, 50);
        assert_eq!(c.cell_width, 2);
        assert_eq!(c.pixel_width(), 100);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn invalid_dimensions() {
        let c = SessionConfig {
            rows: 0,
            ..SessionConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(GridError::InvalidDimensions { rows: 0, .. })
        ));
        let c = SessionConfig {
            cell_width: 0,
            ..SessionConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn grids_past_terminal_range_are_rejected() {
        let c = SessionConfig {
            rows: 50,
            cell_width: 2000,
            ..SessionConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(GridError::InvalidDimensions {
                rows: 50,
                pixel_width: 100_000
            })
        );
        let c = SessionConfig {
            rows: i32::from(u16::MAX),
            cell_width: 1,
            ..SessionConfig::default()
        };
        assert!(c.validate().is_err());
        let c = SessionConfig {
            rows: 1000,
            cell_width: 65,
            ..SessionConfig::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn args_parse_into_config() {
        let args = Args::try_parse_from([
            "gridstar",
            "--rows",
            "20",
            "--cell-width",
            "3",
            "--step-delay-ms",
            "0",
        ])
        .unwrap();
        let c = args.config();
        assert_eq!(c.rows, 20);
        assert_eq!(c.pixel_width(), 60);
        assert_eq!(c.step_delay, Duration::ZERO);
        assert!(args.log_file.is_none());
    }
}
