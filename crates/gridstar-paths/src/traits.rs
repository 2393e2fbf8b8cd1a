use gridstar_core::{Context, Grid};

/// The search engine's view of the visualization driver.
///
/// Both methods are called synchronously from the search loop. The default
/// implementations do nothing, so `()` is a valid silent observer.
pub trait SearchObserver {
    /// Called once per expansion step and once per painted path cell.
    fn redraw(&mut self, grid: &Grid) {
        let _ = grid;
    }

    /// Polled before every frontier pop. Returning `true` aborts the run
    /// with [`SearchOutcome::Cancelled`](crate::SearchOutcome::Cancelled).
    fn cancel_requested(&mut self) -> bool {
        false
    }
}

impl SearchObserver for () {}

/// Cancellation only: the search stops once the context is done.
impl SearchObserver for Context {
    fn cancel_requested(&mut self) -> bool {
        self.is_done()
    }
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn redraw(&mut self, grid: &Grid) {
        (**self).redraw(grid);
    }

    fn cancel_requested(&mut self) -> bool {
        (**self).cancel_requested()
    }
}
