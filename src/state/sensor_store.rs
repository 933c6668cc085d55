use std::cell::Cell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::models::SensorLocation;
use crate::services::EnvironmentalApi;
use crate::state::request_state::RequestState;
use crate::state::slot::RequestSlot;

/// Owns the fixed sensor station list. Loaded once at startup; otherwise
/// passive. Repeated loads are safe (same latest-wins discipline) but the
/// default flow never issues a second one. De-duplication of ids is the
/// backend's contract, not ours.
#[derive(Clone)]
pub struct SensorStore {
    api: Rc<dyn EnvironmentalApi>,
    slot: RequestSlot<Vec<SensorLocation>>,
}

impl SensorStore {
    pub fn new(api: Rc<dyn EnvironmentalApi>, alive: Rc<Cell<bool>>) -> Self {
        Self {
            api,
            slot: RequestSlot::new("sensors", alive),
        }
    }

    pub fn state(&self) -> RequestState<Vec<SensorLocation>> {
        self.slot.get()
    }

    pub fn set_on_change(&self, callback: Rc<dyn Fn()>) {
        self.slot.set_on_change(callback);
    }

    pub fn load_all(&self) -> LocalBoxFuture<'static, ()> {
        let ticket = self.slot.begin();
        let api = self.api.clone();
        let slot = self.slot.clone();
        async move {
            let outcome = api.all_sensors().await;
            Self::apply(&slot, ticket, outcome);
        }
        .boxed_local()
    }

    /// Viewport-scoped variant, kept for bounds-based loading. Not part of
    /// the default startup flow.
    pub fn load_in_bounds(
        &self,
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
    ) -> LocalBoxFuture<'static, ()> {
        let ticket = self.slot.begin();
        let api = self.api.clone();
        let slot = self.slot.clone();
        async move {
            let outcome = api.sensors_in_bounds(min_lat, min_lon, max_lat, max_lon).await;
            Self::apply(&slot, ticket, outcome);
        }
        .boxed_local()
    }

    fn apply(
        slot: &RequestSlot<Vec<SensorLocation>>,
        ticket: u64,
        outcome: Result<Vec<SensorLocation>, crate::services::ApiError>,
    ) {
        match outcome {
            Ok(sensors) => {
                log::info!("✅ Loaded {} sensor stations", sensors.len());
                slot.finish(ticket, Ok(sensors));
            }
            Err(err) => {
                log::error!("❌ Sensor load failed ({}): {}", err.kind(), err);
                slot.finish(ticket, Err(err.to_string()));
            }
        }
    }
}
