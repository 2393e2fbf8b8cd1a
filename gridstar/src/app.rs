//! The application loop: poll the driver, update the session, flush diffs.

use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use gridstar_core::{CellStatus, Context, Driver, Grid, Msg, compute_frame};
use gridstar_paths::SearchObserver;

use crate::session::{Effect, Session};

/// How long the idle loop waits for input before looping.
const IDLE_POLL: Duration = Duration::from_millis(16);

/// The main application runner.
pub struct App<D: Driver> {
    session: Session,
    driver: D,
    ctx: Context,
    // tags as last flushed to the driver
    shown: Vec<CellStatus>,
}

impl<D: Driver> App<D> {
    pub fn new(session: Session, driver: D) -> Self {
        Self {
            session,
            driver,
            ctx: Context::new(),
            shown: Vec::new(),
        }
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// A handle that stops [`run`](App::run) (and any search in progress)
    /// when cancelled.
    pub fn context(&self) -> Context {
        self.ctx.clone()
    }

    /// Run until a quit message arrives or the driver fails.
    ///
    /// 1. Initialises the driver and draws the whole grid.
    /// 2. Loops: poll → update → (search) → diff → flush.
    /// 3. Restores the driver on the way out, error or not.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.driver.init()?;
        let res = self.event_loop();
        self.driver.close();
        res
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn Error>> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        self.present()?;

        while !self.ctx.is_done() {
            if let Err(e) = self.driver.poll_msgs(&self.ctx, &tx, IDLE_POLL) {
                self.ctx.cancel();
                return Err(e);
            }
            self.process_pending(&rx, &tx)?;
        }
        Ok(())
    }

    /// Drain queued messages into the session, then flush what changed.
    fn process_pending(&mut self, rx: &Receiver<Msg>, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            needs_draw = true;
            match self.session.update(msg) {
                Some(Effect::End) => {
                    self.ctx.cancel();
                    return Ok(());
                }
                Some(Effect::Search) => self.search(rx, tx)?,
                Some(Effect::Repaint) => self.shown.clear(),
                None => {}
            }
            if self.ctx.is_done() {
                return Ok(());
            }
        }

        if needs_draw {
            self.present()?;
        }
        Ok(())
    }

    fn search(&mut self, rx: &Receiver<Msg>, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>> {
        // Flush pending edits so the first search frame only shows search
        // marks.
        self.present()?;
        let mut screen = Screen {
            driver: &mut self.driver,
            shown: &mut self.shown,
            ctx: &self.ctx,
            rx,
            tx,
            step_delay: self.session.config().step_delay,
            error: None,
        };
        let res = self.session.run_search(&mut screen);
        if let Some(e) = screen.error {
            return Err(e);
        }
        if let Err(e) = res {
            log::warn!("search not run: {e}");
        }
        self.present()
    }

    /// Flush the cells that changed since the last flush, plus the status
    /// line.
    fn present(&mut self) -> Result<(), Box<dyn Error>> {
        let grid = self.session.grid();
        let mut frame = compute_frame(&self.shown, grid);
        frame.message = Some(self.session.message().to_owned());
        self.shown = grid.statuses();
        self.driver.flush(frame)
    }
}

// ---------------------------------------------------------------------------
// Screen: the driver as seen by a running search
// ---------------------------------------------------------------------------

/// Bridges a running search to the driver: redraws flush diff frames,
/// cancellation polls drain input and watch for quit requests.
///
/// Driver errors cannot travel through the observer callbacks, so the first
/// one is kept and turns every later cancellation poll into a stop.
struct Screen<'a, D: Driver> {
    driver: &'a mut D,
    shown: &'a mut Vec<CellStatus>,
    ctx: &'a Context,
    rx: &'a Receiver<Msg>,
    tx: &'a Sender<Msg>,
    step_delay: Duration,
    error: Option<Box<dyn Error>>,
}

impl<D: Driver> SearchObserver for Screen<'_, D> {
    fn redraw(&mut self, grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        let frame = compute_frame(self.shown.as_slice(), grid);
        *self.shown = grid.statuses();
        if frame.cells.is_empty() {
            return;
        }
        if let Err(e) = self.driver.flush(frame) {
            self.error = Some(e);
        }
    }

    fn cancel_requested(&mut self) -> bool {
        if self.error.is_some() {
            return true;
        }
        if let Err(e) = self.driver.poll_msgs(self.ctx, self.tx, self.step_delay) {
            self.error = Some(e);
            return true;
        }
        while let Ok(msg) = self.rx.try_recv() {
            if msg.is_quit() {
                self.ctx.cancel();
            } else {
                log::debug!("input during search discarded: {msg:?}");
            }
        }
        self.ctx.is_done()
    }
}
