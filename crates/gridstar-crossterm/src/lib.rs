//! Crossterm terminal driver for gridstar.
//!
//! Provides a [`CrosstermDriver`] that implements [`gridstar_core::Driver`].
//! Each grid cell is drawn as `cell_width` terminal columns on one terminal
//! row. Mouse positions are reported in a square pixel space where one
//! column is one pixel and one row is `cell_width` pixels, so a grid laid
//! out over `rows * cell_width` pixels maps clicks straight onto cells.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtButton,
        MouseEventKind,
    },
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridstar_core::{
    CellStatus, Coord, Point,
    app::{Context, Driver},
    grid::Frame,
    messages::{Key, ModMask, MouseAction, MouseButton, Msg},
};

/// Default number of terminal columns per grid cell.
pub const DEFAULT_CELL_WIDTH: u16 = 2;

/// Terminal (columns, rows) needed to show a grid of `rows` rows drawn
/// `cell_width` columns per cell, plus the status line below it.
///
/// `None` when the grid does not fit in the terminal's 16-bit coordinates.
pub fn required_size(rows: i32, cell_width: u16) -> Option<(u16, u16)> {
    let rows = u16::try_from(rows).ok()?;
    Some((rows.checked_mul(cell_width)?, rows.checked_add(1)?))
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Colours used to paint each [`CellStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub empty: CtColor,
    pub barrier: CtColor,
    pub start: CtColor,
    pub end: CtColor,
    pub visited: CtColor,
    pub frontier: CtColor,
    pub path: CtColor,
    /// Foreground of the dot drawn in empty cells, standing in for
    /// gridlines.
    pub gridline: CtColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: CtColor::Rgb { r: 255, g: 255, b: 255 },
            barrier: CtColor::Rgb { r: 0, g: 0, b: 0 },
            start: CtColor::Rgb { r: 255, g: 165, b: 0 },
            end: CtColor::Rgb { r: 64, g: 224, b: 208 },
            visited: CtColor::Rgb { r: 255, g: 0, b: 0 },
            frontier: CtColor::Rgb { r: 0, g: 255, b: 0 },
            path: CtColor::Rgb { r: 128, g: 0, b: 128 },
            gridline: CtColor::Rgb { r: 128, g: 128, b: 128 },
        }
    }
}

impl Palette {
    /// Background colour for a cell tag.
    pub fn color(&self, status: CellStatus) -> CtColor {
        match status {
            CellStatus::Empty => self.empty,
            CellStatus::Barrier => self.barrier,
            CellStatus::Start => self.start,
            CellStatus::End => self.end,
            CellStatus::Visited => self.visited,
            CellStatus::Frontier => self.frontier,
            CellStatus::Path => self.path,
        }
    }
}

// ---------------------------------------------------------------------------
// Event mapping
// ---------------------------------------------------------------------------

/// Maps crossterm key modifiers to gridstar's [`ModMask`].
fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    let mut m = ModMask::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        m = m | ModMask::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        m = m | ModMask::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        m = m | ModMask::ALT;
    }
    m
}

/// Maps a crossterm [`KeyCode`] to a gridstar [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

fn to_button(btn: CtButton) -> Option<MouseButton> {
    match btn {
        CtButton::Left => Some(MouseButton::Main),
        CtButton::Right => Some(MouseButton::Secondary),
        CtButton::Middle => None,
    }
}

// ---------------------------------------------------------------------------
// CrosstermDriver
// ---------------------------------------------------------------------------

/// A terminal back-end for gridstar using crossterm.
pub struct CrosstermDriver {
    cell_width: u16,
    palette: Palette,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            palette: Palette::default(),
        }
    }

    /// Terminal columns per grid cell (at least 1).
    pub fn with_cell_width(mut self, width: u16) -> Self {
        self.cell_width = width.max(1);
        self
    }

    #[inline]
    pub fn cell_width(&self) -> u16 {
        self.cell_width
    }

    /// Whether the current terminal is large enough for a grid of `rows`
    /// rows.
    pub fn fits_terminal(&self, rows: i32) -> io::Result<bool> {
        let (width, height) = terminal::size()?;
        Ok(required_size(rows, self.cell_width).is_some_and(|(w, h)| w <= width && h <= height))
    }

    /// Terminal (column, row) where grid cell `pos` is drawn, or `None` when
    /// it lies outside the terminal's coordinate range.
    fn cell_origin(&self, pos: Coord) -> Option<(u16, u16)> {
        let x = u16::try_from(pos.col).ok()?.checked_mul(self.cell_width)?;
        let y = u16::try_from(pos.row).ok()?;
        Some((x, y))
    }

    /// Terminal (column, row) to the driver's square pixel space.
    fn to_pixel(&self, column: u16, row: u16) -> Point {
        Point::new(column as i32, row as i32 * self.cell_width as i32)
    }

    fn to_msg(&self, ev: Event) -> Option<Msg> {
        match ev {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => to_key(code).map(|key| Msg::KeyDown {
                key,
                modifiers: to_mod_mask(modifiers),
                time: Instant::now(),
            }),
            Event::Mouse(me) => {
                let action = match me.kind {
                    MouseEventKind::Down(CtButton::Left) => MouseAction::Main,
                    MouseEventKind::Down(CtButton::Right) => MouseAction::Secondary,
                    MouseEventKind::Drag(btn) => MouseAction::Drag(to_button(btn)?),
                    MouseEventKind::Up(_) => MouseAction::Release,
                    _ => return None,
                };
                Some(Msg::Mouse {
                    action,
                    pos: self.to_pixel(me.column, me.row),
                    modifiers: to_mod_mask(me.modifiers),
                    time: Instant::now(),
                })
            }
            Event::Resize(w, h) => Some(Msg::Screen {
                width: w as i32,
                height: h as i32,
                time: Instant::now(),
            }),
            _ => None,
        }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("terminal initialised, cell width {}", self.cell_width);
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: &Sender<Msg>,
        timeout: Duration,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }
            if let Some(m) = self.to_msg(event::read()?) {
                tx.send(m).ok();
            }
        }

        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        let cw = self.cell_width;
        let blank = " ".repeat(cw as usize);
        let dotted = format!("{:<width$}", "\u{b7}", width = cw as usize);

        for fc in &frame.cells {
            let Some((x, y)) = self.cell_origin(fc.pos) else {
                log::trace!("cell {} is off screen", fc.pos);
                continue;
            };
            let glyph = if fc.status == CellStatus::Empty {
                &dotted
            } else {
                &blank
            };
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(self.palette.gridline),
                SetBackgroundColor(self.palette.color(fc.status)),
                Print(glyph)
            )?;
        }

        if let (Some(msg), Ok(status_row)) = (&frame.message, u16::try_from(frame.rows)) {
            queue!(
                stdout,
                ResetColor,
                cursor::MoveTo(0, status_row),
                terminal::Clear(ClearType::UntilNewLine),
                Print(msg)
            )?;
        }

        queue!(stdout, ResetColor)?;
        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
