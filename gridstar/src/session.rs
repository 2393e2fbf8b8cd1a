//! The editing rules of the visualizer: what clicks and keys do to the grid.

use gridstar_core::{Coord, Grid, GridError, Key, MouseAction, MouseButton, Msg, Point};
use gridstar_paths::{SearchError, SearchObserver, SearchOutcome, astar};

use crate::config::SessionConfig;

/// Requests a [`Session`] makes of the application loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Run the search now, with redraws.
    Search,
    /// Redraw every cell, not just the changed ones.
    Repaint,
    /// Stop the application.
    End,
}

/// One interactive session: a grid plus the outcome of the last search.
pub struct Session {
    grid: Grid,
    config: SessionConfig,
    message: String,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, GridError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.pixel_width())?;
        Ok(Self {
            grid,
            config,
            message: String::from(READY),
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The status line shown under the grid.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the status line until the next edit or search updates it.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Apply one input message.
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        if msg.is_quit() {
            return Some(Effect::End);
        }
        match msg {
            Msg::Mouse { action, pos, .. } => {
                match action {
                    MouseAction::Main | MouseAction::Drag(MouseButton::Main) => self.place(pos),
                    MouseAction::Secondary | MouseAction::Drag(MouseButton::Secondary) => {
                        self.erase(pos)
                    }
                    MouseAction::Release => {}
                }
                None
            }
            Msg::KeyDown {
                key: Key::Space, ..
            } => {
                if self.grid.start().is_some() && self.grid.end().is_some() {
                    Some(Effect::Search)
                } else {
                    self.message = String::from("place a start and an end first");
                    None
                }
            }
            Msg::KeyDown {
                key: Key::Char('c'),
                ..
            } => {
                self.grid.clear();
                self.message = String::from(READY);
                None
            }
            Msg::Screen { .. } => Some(Effect::Repaint),
            _ => None,
        }
    }

    fn cell_under(&self, pos: Point) -> Option<Coord> {
        match self.grid.coord_at_pixel(pos) {
            Ok(c) => Some(c),
            Err(e) => {
                log::trace!("click ignored: {e}");
                None
            }
        }
    }

    /// First click places the start, second the end, later ones barriers.
    /// Start and end are never overwritten by a click.
    fn place(&mut self, pos: Point) {
        let Some(c) = self.cell_under(pos) else {
            return;
        };
        let (start, end) = (self.grid.start(), self.grid.end());
        let is_start = start == Some(c);
        let is_end = end == Some(c);
        let res = if start.is_none() && !is_end {
            self.grid.set_start(c)
        } else if end.is_none() && !is_start {
            self.grid.set_end(c)
        } else if !is_start && !is_end {
            self.grid.set_barrier(c)
        } else {
            Ok(())
        };
        if let Err(e) = res {
            log::warn!("placing at {c}: {e}");
        }
    }

    /// Reset the cell under `pos`, forgetting start or end if it was one.
    fn erase(&mut self, pos: Point) {
        let Some(c) = self.cell_under(pos) else {
            return;
        };
        if let Err(e) = self.grid.set_empty(c) {
            log::warn!("erasing {c}: {e}");
        }
    }

    /// Clear the previous run's marks, rebuild neighbors and search from
    /// start to end. The status line reflects the result.
    pub fn run_search<O: SearchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<SearchOutcome, SearchError> {
        self.grid.reset_search_marks();
        self.grid.recompute_all_neighbors();
        let res = astar(&mut self.grid, observer);
        self.message = match &res {
            Ok(SearchOutcome::Found(r)) => format!(
                "path found: {} steps, {} cells expanded",
                r.cost, r.expanded
            ),
            Ok(SearchOutcome::Exhausted) => String::from("no path between start and end"),
            Ok(SearchOutcome::Cancelled) => String::from("search cancelled"),
            Err(e) => e.to_string(),
        };
        log::info!("{}", self.message);
        res
    }
}

const READY: &str = "click: start, end, barriers | right click: erase | space: search | c: clear | q: quit";
