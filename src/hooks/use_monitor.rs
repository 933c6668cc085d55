use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::models::{EnvironmentalData, RiskPrediction, SensorLocation};
use crate::services::ApiClient;
use crate::state::controller::{MonitorController, Spawner};
use crate::state::timer::BrowserScheduler;
use crate::state::RequestState;

/// Handle exposed to the components: read-only state snapshots plus the
/// triggers the UI may fire.
pub struct UseMonitorHandle {
    pub snapshot: RequestState<EnvironmentalData>,
    pub risk: RequestState<RiskPrediction>,
    pub sensors: RequestState<Vec<SensorLocation>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub refresh: Callback<()>,
    pub select_point: Callback<(f64, f64)>,
}

/// Builds the controller once per mounted component, starts it on mount
/// (default snapshot fetch + sensor load + 5-minute timer) and stops it on
/// unmount. Slot changes schedule a re-render through `use_force_update`.
#[hook]
pub fn use_monitor() -> UseMonitorHandle {
    let update = use_force_update();

    let controller = use_mut_ref(|| {
        let api = Rc::new(ApiClient::new());
        let spawner: Spawner = Rc::new(|fut| wasm_bindgen_futures::spawn_local(fut));
        MonitorController::new(api, spawner, Rc::new(BrowserScheduler))
    });

    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            let controller = controller.borrow().clone();
            controller.set_on_change(Rc::new(move || update.force_update()));
            controller.start();

            move || controller.stop()
        });
    }

    let controller = controller.borrow().clone();

    UseMonitorHandle {
        snapshot: controller.snapshot.state(),
        risk: controller.risk.state(),
        sensors: controller.sensors.state(),
        last_updated: controller.snapshot.last_updated(),
        refresh: {
            let controller = controller.clone();
            Callback::from(move |_| controller.refresh())
        },
        select_point: {
            let controller = controller.clone();
            Callback::from(move |(lat, lon)| controller.select_point(lat, lon))
        },
    }
}
