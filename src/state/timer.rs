use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Guard for a running repeating timer. Dropping it cancels the timer; the
/// controller keeps at most one alive, so restarts can never accumulate
/// duplicate intervals.
pub struct IntervalGuard {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl IntervalGuard {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for IntervalGuard {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Source of repeating timers. The browser implementation wraps
/// `gloo_timers::Interval`; tests install a manual scheduler they can tick
/// and inspect.
pub trait Scheduler {
    fn repeating(&self, period_ms: u32, tick: Rc<dyn Fn()>) -> IntervalGuard;
}

/// `setInterval`-backed scheduler used in the running app.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn repeating(&self, period_ms: u32, tick: Rc<dyn Fn()>) -> IntervalGuard {
        let interval = Interval::new(period_ms, move || tick());
        // Dropping a gloo Interval clears the underlying setInterval.
        IntervalGuard::new(move || drop(interval))
    }
}
