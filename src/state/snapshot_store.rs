use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{DateTime, Utc};
use futures::future::{FutureExt, LocalBoxFuture};

use crate::models::EnvironmentalData;
use crate::services::{ApiError, EnvironmentalApi};
use crate::state::request_state::RequestState;
use crate::state::slot::RequestSlot;

/// Owns the current environmental snapshot (air quality + weather for one
/// location). Driven by the 5-minute timer, the refresh button and map
/// clicks. A fetch flips the slot to `Pending` immediately and the returned
/// future performs the single outbound read; the caller decides where to
/// spawn it.
#[derive(Clone)]
pub struct SnapshotStore {
    api: Rc<dyn EnvironmentalApi>,
    slot: RequestSlot<EnvironmentalData>,
    last_updated: Rc<RefCell<Option<DateTime<Utc>>>>,
}

impl SnapshotStore {
    pub fn new(api: Rc<dyn EnvironmentalApi>, alive: Rc<Cell<bool>>) -> Self {
        Self {
            api,
            slot: RequestSlot::new("snapshot", alive),
            last_updated: Rc::new(RefCell::new(None)),
        }
    }

    pub fn state(&self) -> RequestState<EnvironmentalData> {
        self.slot.get()
    }

    /// Wall-clock time of the last successful fetch, if any.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        *self.last_updated.borrow()
    }

    pub fn set_on_change(&self, callback: Rc<dyn Fn()>) {
        self.slot.set_on_change(callback);
    }

    /// Fetch for the configured default location.
    pub fn fetch_default(&self) -> LocalBoxFuture<'static, ()> {
        let ticket = self.slot.begin();
        let api = self.api.clone();
        let store = self.clone();
        async move {
            let outcome = api.current_data().await;
            store.apply(ticket, outcome);
        }
        .boxed_local()
    }

    /// Fetch for an explicit point. Coordinates are forwarded unvalidated;
    /// the backend may reject out-of-range values.
    pub fn fetch_at(&self, lat: f64, lon: f64) -> LocalBoxFuture<'static, ()> {
        let ticket = self.slot.begin();
        let api = self.api.clone();
        let store = self.clone();
        async move {
            let outcome = api.data_at(lat, lon).await;
            store.apply(ticket, outcome);
        }
        .boxed_local()
    }

    fn apply(&self, ticket: u64, outcome: Result<EnvironmentalData, ApiError>) {
        match outcome {
            Ok(data) => {
                if self.slot.finish(ticket, Ok(data)) {
                    *self.last_updated.borrow_mut() = Some(Utc::now());
                }
            }
            Err(err) => {
                log::error!("❌ Environmental fetch failed ({}): {}", err.kind(), err);
                self.slot.finish(ticket, Err(err.to_string()));
            }
        }
    }
}
