use std::cell::Cell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::models::RiskPrediction;
use crate::services::EnvironmentalApi;
use crate::state::request_state::RequestState;
use crate::state::slot::RequestSlot;

/// Owns the fire-risk prediction for the most recently queried point.
/// Only ever driven by explicit point queries; there is no default-location
/// variant. Completely independent of the snapshot slot: the two fetches a
/// map click triggers may resolve in any order or fail separately.
#[derive(Clone)]
pub struct RiskStore {
    api: Rc<dyn EnvironmentalApi>,
    slot: RequestSlot<RiskPrediction>,
}

impl RiskStore {
    pub fn new(api: Rc<dyn EnvironmentalApi>, alive: Rc<Cell<bool>>) -> Self {
        Self {
            api,
            slot: RequestSlot::new("risk", alive),
        }
    }

    pub fn state(&self) -> RequestState<RiskPrediction> {
        self.slot.get()
    }

    pub fn set_on_change(&self, callback: Rc<dyn Fn()>) {
        self.slot.set_on_change(callback);
    }

    pub fn fetch_at(&self, lat: f64, lon: f64) -> LocalBoxFuture<'static, ()> {
        let ticket = self.slot.begin();
        let api = self.api.clone();
        let slot = self.slot.clone();
        async move {
            match api.risk_at(lat, lon).await {
                Ok(prediction) => {
                    slot.finish(ticket, Ok(prediction));
                }
                Err(err) => {
                    log::error!("❌ Risk fetch failed ({}): {}", err.kind(), err);
                    slot.finish(ticket, Err(err.to_string()));
                }
            }
        }
        .boxed_local()
    }
}
