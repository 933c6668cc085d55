pub mod controller;
pub mod request_state;
pub mod risk_store;
pub mod sensor_store;
pub mod slot;
pub mod snapshot_store;
pub mod timer;

pub use controller::{MonitorController, Spawner};
pub use request_state::RequestState;
pub use risk_store::RiskStore;
pub use sensor_store::SensorStore;
pub use snapshot_store::SnapshotStore;
pub use timer::{BrowserScheduler, IntervalGuard, Scheduler};
