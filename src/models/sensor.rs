use serde::{Deserialize, Serialize};

/// A fixed monitoring station. `id` is unique within one response and is
/// the stable key the map layer uses for markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorLocation {
    pub id: i32,
    pub name: String,
    pub data_source: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Envelope the `/api/sensors` endpoint wraps its results in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorsResponse {
    pub count: usize,
    pub sensors: Vec<SensorLocation>,
    pub timestamp: String,
}
