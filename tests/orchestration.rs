//! Host-run tests of the data-orchestration core: stores, controller and
//! the latest-request-wins discipline, exercised against a scripted fake
//! backend whose response timing the tests control explicitly.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use helios_monitor::models::{
    AirQualityData, EnvironmentalData, GeoPoint, ModelInputs, RiskAssessment, RiskLevel,
    RiskPrediction, RiskWeather, SensorLocation, WeatherData,
};
use helios_monitor::services::{ApiError, EnvironmentalApi};
use helios_monitor::state::controller::{MonitorController, Spawner};
use helios_monitor::state::timer::{IntervalGuard, Scheduler};
use helios_monitor::state::{RequestState, RiskStore, SnapshotStore};

type EnvResult = Result<EnvironmentalData, ApiError>;
type RiskResult = Result<RiskPrediction, ApiError>;
type SensorsResult = Result<Vec<SensorLocation>, ApiError>;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn sample_env(aqi: i32, lat: f64, lon: f64) -> EnvironmentalData {
    EnvironmentalData {
        air_quality: AirQualityData {
            aqi,
            category: "Good".into(),
            location: "Altamont".into(),
            timestamp: "2024-07-01T12:00:00Z".into(),
        },
        weather: WeatherData {
            temperature: 21.5,
            humidity: 40.0,
            wind_speed: 3.2,
            wind_direction: 270.0,
        },
        location: GeoPoint { latitude: lat, longitude: lon },
    }
}

fn sample_risk(level: RiskLevel, probability: f64, lat: f64, lon: f64) -> RiskPrediction {
    RiskPrediction {
        location: GeoPoint { latitude: lat, longitude: lon },
        risk: RiskAssessment {
            probability,
            level,
            description: "Moderate fire danger.".into(),
        },
        weather_conditions: RiskWeather {
            temperature: 71.0,
            humidity: 40.0,
            wind_speed: 7.0,
            wind_direction: 270.0,
        },
        model_inputs: ModelInputs {
            temperature: 71.0,
            humidity: 40.0,
            wind_speed: 7.0,
            precipitation: 0.0,
            drought_index: 35.0,
        },
        timestamp: "2024-07-01T12:00:00Z".into(),
    }
}

fn sample_sensors() -> Vec<SensorLocation> {
    vec![
        SensorLocation {
            id: 1,
            name: "Pilot Butte".into(),
            data_source: "AirNow".into(),
            latitude: 44.138,
            longitude: -121.276,
        },
        SensorLocation {
            id: 2,
            name: "Tumalo Ridge".into(),
            data_source: "OpenWeatherMap".into(),
            latitude: 44.205,
            longitude: -121.417,
        },
    ]
}

/// Fake backend. Responses can be staged as oneshot channels so a test
/// decides exactly when and in which order each request completes; calls
/// with nothing staged resolve immediately with fixture data.
#[derive(Default)]
struct MockApi {
    env_responses: RefCell<VecDeque<oneshot::Receiver<EnvResult>>>,
    risk_responses: RefCell<VecDeque<oneshot::Receiver<RiskResult>>>,
    sensor_responses: RefCell<VecDeque<oneshot::Receiver<SensorsResult>>>,
    env_calls: Cell<usize>,
    risk_calls: Cell<usize>,
    sensor_calls: Cell<usize>,
}

impl MockApi {
    fn stage_env(&self) -> oneshot::Sender<EnvResult> {
        let (tx, rx) = oneshot::channel();
        self.env_responses.borrow_mut().push_back(rx);
        tx
    }

    fn stage_risk(&self) -> oneshot::Sender<RiskResult> {
        let (tx, rx) = oneshot::channel();
        self.risk_responses.borrow_mut().push_back(rx);
        tx
    }

    fn stage_sensors(&self) -> oneshot::Sender<SensorsResult> {
        let (tx, rx) = oneshot::channel();
        self.sensor_responses.borrow_mut().push_back(rx);
        tx
    }

    async fn next_env(&self) -> EnvResult {
        self.env_calls.set(self.env_calls.get() + 1);
        let staged = self.env_responses.borrow_mut().pop_front();
        match staged {
            Some(rx) => rx.await.expect("staged response dropped"),
            None => Ok(sample_env(42, 44.1292, -121.7689)),
        }
    }
}

#[async_trait(?Send)]
impl EnvironmentalApi for MockApi {
    async fn current_data(&self) -> EnvResult {
        self.next_env().await
    }

    async fn data_at(&self, _lat: f64, _lon: f64) -> EnvResult {
        self.next_env().await
    }

    async fn risk_at(&self, _lat: f64, _lon: f64) -> RiskResult {
        self.risk_calls.set(self.risk_calls.get() + 1);
        let staged = self.risk_responses.borrow_mut().pop_front();
        match staged {
            Some(rx) => rx.await.expect("staged response dropped"),
            None => Ok(sample_risk(RiskLevel::Low, 0.25, 44.1292, -121.7689)),
        }
    }

    async fn all_sensors(&self) -> SensorsResult {
        self.sensor_calls.set(self.sensor_calls.get() + 1);
        let staged = self.sensor_responses.borrow_mut().pop_front();
        match staged {
            Some(rx) => rx.await.expect("staged response dropped"),
            None => Ok(sample_sensors()),
        }
    }

    async fn sensors_in_bounds(
        &self,
        _min_lat: f64,
        _min_lon: f64,
        _max_lat: f64,
        _max_lon: f64,
    ) -> SensorsResult {
        self.sensor_calls.set(self.sensor_calls.get() + 1);
        Ok(sample_sensors())
    }

    async fn health_check(&self) -> Result<String, ApiError> {
        Ok("healthy".into())
    }
}

/// Scheduler whose timers only fire when the test says so, and which can
/// report how many are currently installed.
#[derive(Default)]
struct ManualScheduler {
    timers: Rc<RefCell<Vec<(u64, Rc<dyn Fn()>)>>>,
    next_id: Cell<u64>,
}

impl ManualScheduler {
    fn active(&self) -> usize {
        self.timers.borrow().len()
    }

    fn fire(&self) {
        let ticks: Vec<Rc<dyn Fn()>> =
            self.timers.borrow().iter().map(|(_, tick)| tick.clone()).collect();
        for tick in ticks {
            tick();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn repeating(&self, _period_ms: u32, tick: Rc<dyn Fn()>) -> IntervalGuard {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.timers.borrow_mut().push((id, tick));
        let timers = self.timers.clone();
        IntervalGuard::new(move || timers.borrow_mut().retain(|(t, _)| *t != id))
    }
}

fn test_spawner(pool: &LocalPool) -> Spawner {
    let spawner = pool.spawner();
    Rc::new(move |fut| spawner.spawn_local(fut).expect("spawn failed"))
}

fn alive_flag() -> Rc<Cell<bool>> {
    Rc::new(Cell::new(true))
}

// ---------------------------------------------------------------------------
// Latest-request-wins
// ---------------------------------------------------------------------------

#[test]
fn slow_first_response_cannot_clobber_second_result() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let store = SnapshotStore::new(api.clone(), alive_flag());

    let first = api.stage_env();
    let second = api.stage_env();

    pool.spawner().spawn_local(store.fetch_at(44.0, -121.0)).unwrap();
    pool.run_until_stalled();
    pool.spawner().spawn_local(store.fetch_at(45.0, -122.0)).unwrap();
    pool.run_until_stalled();

    // First request completes after the second was issued: dropped.
    first.send(Ok(sample_env(10, 44.0, -121.0))).unwrap();
    pool.run_until_stalled();
    assert!(store.state().is_pending());
    assert!(store.last_updated().is_none());

    second.send(Ok(sample_env(20, 45.0, -122.0))).unwrap();
    pool.run_until_stalled();
    assert_eq!(store.state().data().map(|d| d.air_quality.aqi), Some(20));
    assert!(store.last_updated().is_some());
}

#[test]
fn second_result_sticks_when_first_arrives_even_later() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let store = SnapshotStore::new(api.clone(), alive_flag());

    let first = api.stage_env();
    let second = api.stage_env();

    pool.spawner().spawn_local(store.fetch_at(44.0, -121.0)).unwrap();
    pool.run_until_stalled();
    pool.spawner().spawn_local(store.fetch_at(45.0, -122.0)).unwrap();
    pool.run_until_stalled();

    second.send(Ok(sample_env(20, 45.0, -122.0))).unwrap();
    pool.run_until_stalled();
    assert_eq!(store.state().data().map(|d| d.air_quality.aqi), Some(20));

    // The superseded response trickles in afterwards and changes nothing.
    first.send(Ok(sample_env(10, 44.0, -121.0))).unwrap();
    pool.run_until_stalled();
    assert_eq!(store.state().data().map(|d| d.air_quality.aqi), Some(20));
}

#[test]
fn stale_failure_does_not_overwrite_newer_success() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let store = RiskStore::new(api.clone(), alive_flag());

    let first = api.stage_risk();
    let second = api.stage_risk();

    pool.spawner().spawn_local(store.fetch_at(44.0, -121.0)).unwrap();
    pool.run_until_stalled();
    pool.spawner().spawn_local(store.fetch_at(45.0, -122.0)).unwrap();
    pool.run_until_stalled();

    second
        .send(Ok(sample_risk(RiskLevel::High, 0.65, 45.0, -122.0)))
        .unwrap();
    pool.run_until_stalled();

    first
        .send(Err(ApiError::Transport("connection reset".into())))
        .unwrap();
    pool.run_until_stalled();

    let state = store.state();
    assert_eq!(state.data().map(|p| p.risk.level), Some(RiskLevel::High));
    assert_eq!(state.error(), None);
}

// ---------------------------------------------------------------------------
// State isolation and pending discipline
// ---------------------------------------------------------------------------

#[test]
fn risk_fetch_never_touches_snapshot_state() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let alive = alive_flag();
    let snapshot = SnapshotStore::new(api.clone(), alive.clone());
    let risk = RiskStore::new(api.clone(), alive);

    pool.spawner().spawn_local(risk.fetch_at(44.0, -121.0)).unwrap();
    pool.run_until_stalled();

    assert!(snapshot.state().is_idle());
    assert!(risk.state().data().is_some());

    pool.spawner().spawn_local(snapshot.fetch_default()).unwrap();
    pool.run_until_stalled();
    assert!(snapshot.state().data().is_some());
    assert_eq!(risk.state().data().map(|p| p.risk.level), Some(RiskLevel::Low));
}

#[test]
fn state_is_pending_before_any_response_arrives() {
    let api = Rc::new(MockApi::default());
    let store = SnapshotStore::new(api.clone(), alive_flag());
    let _gate = api.stage_env();

    assert!(store.state().is_idle());
    // Not even spawned yet: issuing the fetch alone must flip the state.
    let fut = store.fetch_at(44.0, -121.0);
    assert!(store.state().is_pending());
    drop(fut);
}

// ---------------------------------------------------------------------------
// Controller lifecycle
// ---------------------------------------------------------------------------

#[test]
fn start_fetches_default_snapshot_and_sensors_once() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let env_gate = api.stage_env();
    let sensor_gate = api.stage_sensors();
    let scheduler = Rc::new(ManualScheduler::default());
    let controller = MonitorController::new(api.clone(), test_spawner(&pool), scheduler);

    assert!(controller.sensors.state().is_idle());

    controller.start();
    pool.run_until_stalled();
    assert!(controller.snapshot.state().is_pending());
    assert!(controller.sensors.state().is_pending());

    env_gate.send(Ok(sample_env(42, 44.1292, -121.7689))).unwrap();
    sensor_gate.send(Ok(sample_sensors())).unwrap();
    pool.run_until_stalled();

    assert_eq!(api.sensor_calls.get(), 1);
    assert_eq!(api.env_calls.get(), 1);
    assert_eq!(controller.sensors.state().data().map(|s| s.len()), Some(2));
}

#[test]
fn repeated_start_stop_cycles_leave_at_most_one_timer() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let scheduler = Rc::new(ManualScheduler::default());
    let controller = MonitorController::new(api.clone(), test_spawner(&pool), scheduler.clone());

    for _ in 0..3 {
        controller.start();
        assert_eq!(scheduler.active(), 1);
        controller.stop();
        assert_eq!(scheduler.active(), 0);
    }

    // A double start must replace, not stack.
    controller.start();
    controller.start();
    assert_eq!(scheduler.active(), 1);
    controller.stop();
    assert_eq!(scheduler.active(), 0);
    pool.run_until_stalled();
}

#[test]
fn timer_tick_refreshes_and_stop_silences_it() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let scheduler = Rc::new(ManualScheduler::default());
    let controller = MonitorController::new(api.clone(), test_spawner(&pool), scheduler.clone());

    controller.start();
    pool.run_until_stalled();
    let calls_after_start = api.env_calls.get();

    scheduler.fire();
    pool.run_until_stalled();
    assert_eq!(api.env_calls.get(), calls_after_start + 1);

    controller.stop();
    scheduler.fire();
    pool.run_until_stalled();
    assert_eq!(api.env_calls.get(), calls_after_start + 1);
}

#[test]
fn responses_arriving_after_stop_are_inert() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let env_gate = api.stage_env();
    let sensor_gate = api.stage_sensors();
    let scheduler = Rc::new(ManualScheduler::default());
    let controller = MonitorController::new(api.clone(), test_spawner(&pool), scheduler);

    controller.start();
    pool.run_until_stalled();
    controller.stop();

    env_gate.send(Ok(sample_env(42, 44.1292, -121.7689))).unwrap();
    sensor_gate.send(Ok(sample_sensors())).unwrap();
    pool.run_until_stalled();

    // In-flight reads completed, but their results were not applied.
    assert!(controller.snapshot.state().is_pending());
    assert!(controller.sensors.state().is_pending());
    assert!(controller.snapshot.last_updated().is_none());
}

// ---------------------------------------------------------------------------
// Point queries
// ---------------------------------------------------------------------------

#[test]
fn map_click_resolves_both_slots_in_either_arrival_order() {
    for risk_first in [false, true] {
        let mut pool = LocalPool::new();
        let api = Rc::new(MockApi::default());
        let env_gate = api.stage_env();
        let risk_gate = api.stage_risk();
        let scheduler = Rc::new(ManualScheduler::default());
        let controller = MonitorController::new(api.clone(), test_spawner(&pool), scheduler);

        controller.select_point(44.10, -121.75);
        assert!(controller.snapshot.state().is_pending());
        assert!(controller.risk.state().is_pending());
        pool.run_until_stalled();

        let env_response = Ok(sample_env(42, 44.10, -121.75));
        let risk_response = Ok(sample_risk(RiskLevel::Moderate, 0.34, 44.10, -121.75));
        if risk_first {
            risk_gate.send(risk_response).unwrap();
            pool.run_until_stalled();
            env_gate.send(env_response).unwrap();
        } else {
            env_gate.send(env_response).unwrap();
            pool.run_until_stalled();
            risk_gate.send(risk_response).unwrap();
        }
        pool.run_until_stalled();

        let snapshot = controller.snapshot.state();
        let data = snapshot.data().expect("snapshot ready");
        assert_eq!(data.air_quality.aqi, 42);
        assert_eq!(data.location.latitude, 44.10);
        assert_eq!(data.location.longitude, -121.75);

        let risk = controller.risk.state();
        let prediction = risk.data().expect("risk ready");
        assert_eq!(prediction.risk.level, RiskLevel::Moderate);
        assert_eq!(prediction.risk.probability, 0.34);
    }
}

#[test]
fn risk_failure_leaves_concurrent_snapshot_success_intact() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let env_gate = api.stage_env();
    let risk_gate = api.stage_risk();
    let scheduler = Rc::new(ManualScheduler::default());
    let controller = MonitorController::new(api.clone(), test_spawner(&pool), scheduler);

    controller.select_point(44.10, -121.75);
    pool.run_until_stalled();

    risk_gate
        .send(Err(ApiError::Transport("connection refused".into())))
        .unwrap();
    env_gate.send(Ok(sample_env(55, 44.10, -121.75))).unwrap();
    pool.run_until_stalled();

    match controller.risk.state() {
        RequestState::Failed(message) => assert!(message.contains("connection refused")),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(
        controller.snapshot.state().data().map(|d| d.air_quality.aqi),
        Some(55)
    );
}

#[test]
fn manual_refresh_does_not_disturb_the_timer() {
    let mut pool = LocalPool::new();
    let api = Rc::new(MockApi::default());
    let scheduler = Rc::new(ManualScheduler::default());
    let controller = MonitorController::new(api.clone(), test_spawner(&pool), scheduler.clone());

    controller.start();
    pool.run_until_stalled();
    let calls_after_start = api.env_calls.get();

    controller.refresh();
    pool.run_until_stalled();
    assert_eq!(api.env_calls.get(), calls_after_start + 1);
    assert_eq!(scheduler.active(), 1);
}
