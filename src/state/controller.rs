use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::services::EnvironmentalApi;
use crate::state::risk_store::RiskStore;
use crate::state::sensor_store::SensorStore;
use crate::state::snapshot_store::SnapshotStore;
use crate::state::timer::{IntervalGuard, Scheduler};
use crate::utils::constants::REFRESH_INTERVAL_MS;

/// Where a store future runs. The hook layer passes
/// `wasm_bindgen_futures::spawn_local`; tests pass a `LocalPool` spawner.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Wires user input to the three stores and owns the recurring-refresh
/// lifecycle. This is session-scoped state with explicit init/teardown:
/// `start` installs exactly one interval, `stop` cancels it synchronously
/// and marks the session dead so in-flight responses land inert.
pub struct MonitorController {
    pub snapshot: SnapshotStore,
    pub risk: RiskStore,
    pub sensors: SensorStore,
    alive: Rc<Cell<bool>>,
    spawner: Spawner,
    scheduler: Rc<dyn Scheduler>,
    refresh_timer: RefCell<Option<IntervalGuard>>,
}

impl MonitorController {
    pub fn new(
        api: Rc<dyn EnvironmentalApi>,
        spawner: Spawner,
        scheduler: Rc<dyn Scheduler>,
    ) -> Rc<Self> {
        let alive = Rc::new(Cell::new(true));
        Rc::new(Self {
            snapshot: SnapshotStore::new(api.clone(), alive.clone()),
            risk: RiskStore::new(api.clone(), alive.clone()),
            sensors: SensorStore::new(api, alive.clone()),
            alive,
            spawner,
            scheduler,
            refresh_timer: RefCell::new(None),
        })
    }

    /// One notification hook for all three slots.
    pub fn set_on_change(&self, callback: Rc<dyn Fn()>) {
        self.snapshot.set_on_change(callback.clone());
        self.risk.set_on_change(callback.clone());
        self.sensors.set_on_change(callback);
    }

    /// System start: default snapshot and sensor list load concurrently
    /// (no ordering between them), then the periodic refresh begins.
    pub fn start(&self) {
        self.alive.set(true);

        (self.spawner)(self.snapshot.fetch_default());
        (self.spawner)(self.sensors.load_all());

        // The tick captures store clones rather than the controller itself,
        // so an installed timer never keeps a stopped controller alive.
        let tick: Rc<dyn Fn()> = {
            let spawner = self.spawner.clone();
            let snapshot = self.snapshot.clone();
            Rc::new(move || {
                log::info!("⏰ Scheduled refresh");
                spawner(snapshot.fetch_default());
            })
        };

        // Replace any previous interval so repeated start/stop cycles leave
        // exactly one timer running.
        *self.refresh_timer.borrow_mut() = Some(self.scheduler.repeating(REFRESH_INTERVAL_MS, tick));
        log::info!("⏰ Auto-refresh every {} s", REFRESH_INTERVAL_MS / 1000);
    }

    /// Manual refresh. Does not touch the timer schedule.
    pub fn refresh(&self) {
        (self.spawner)(self.snapshot.fetch_default());
    }

    /// Map click: snapshot and risk fetches run concurrently against
    /// disjoint slots; either may fail without affecting the other.
    pub fn select_point(&self, lat: f64, lon: f64) {
        log::info!("🗺️ Point query at ({:.4}, {:.4})", lat, lon);
        (self.spawner)(self.snapshot.fetch_at(lat, lon));
        (self.spawner)(self.risk.fetch_at(lat, lon));
    }

    /// Teardown: cancel the interval synchronously and mark the session
    /// dead. Reads already in flight are not aborted; the slots drop their
    /// results when they arrive.
    pub fn stop(&self) {
        *self.refresh_timer.borrow_mut() = None;
        self.alive.set(false);
        log::info!("🛑 Monitor stopped");
    }
}
