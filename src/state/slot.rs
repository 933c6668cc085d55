use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::state::request_state::RequestState;

/// Interior-mutable holder for one `RequestState` plus the bookkeeping that
/// keeps it race-free.
///
/// Every fetch gets a ticket from a monotonically increasing issue counter.
/// A completion is applied only while its ticket is still the latest issued
/// one and the owning session is still alive; anything else is dropped.
/// Last-issued-wins: a slow response can never clobber the result of a
/// request issued after it.
pub struct RequestSlot<T> {
    label: &'static str,
    state: Rc<RefCell<RequestState<T>>>,
    issued: Rc<Cell<u64>>,
    alive: Rc<Cell<bool>>,
    on_change: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
}

impl<T> Clone for RequestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            state: self.state.clone(),
            issued: self.issued.clone(),
            alive: self.alive.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<T> RequestSlot<T> {
    pub fn new(label: &'static str, alive: Rc<Cell<bool>>) -> Self {
        Self {
            label,
            state: Rc::new(RefCell::new(RequestState::Idle)),
            issued: Rc::new(Cell::new(0)),
            alive,
            on_change: Rc::new(RefCell::new(None)),
        }
    }

    /// Register a callback fired after every applied state change. Used by
    /// the Yew layer to schedule a re-render.
    pub fn set_on_change(&self, callback: Rc<dyn Fn()>) {
        *self.on_change.borrow_mut() = Some(callback);
    }

    /// Issue a new request: bump the counter and flip to `Pending`
    /// synchronously. Returns the ticket the completion must present.
    pub fn begin(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        *self.state.borrow_mut() = RequestState::Pending;
        self.notify();
        ticket
    }

    /// Apply a completion. Returns true if the outcome was applied, false
    /// if it was dropped as stale or post-teardown.
    pub fn finish(&self, ticket: u64, outcome: Result<T, String>) -> bool {
        if !self.alive.get() {
            log::debug!("{}: dropping response #{} after teardown", self.label, ticket);
            return false;
        }
        if ticket != self.issued.get() {
            log::debug!(
                "{}: dropping stale response #{} (latest is #{})",
                self.label,
                ticket,
                self.issued.get()
            );
            return false;
        }
        *self.state.borrow_mut() = match outcome {
            Ok(value) => RequestState::Ready(value),
            Err(message) => RequestState::Failed(message),
        };
        self.notify();
        true
    }

    fn notify(&self) {
        let callback = self.on_change.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl<T: Clone> RequestSlot<T> {
    /// Snapshot of the current state for the presentation layer.
    pub fn get(&self) -> RequestState<T> {
        self.state.borrow().clone()
    }
}
