use async_trait::async_trait;

use crate::models::{EnvironmentalData, RiskPrediction, SensorLocation};
use crate::services::error::ApiError;

/// Everything the frontend reads from the backend. Kept behind a trait so
/// the stores can be exercised against scripted fakes instead of a live
/// server. `?Send` because everything runs on the single browser thread.
#[async_trait(?Send)]
pub trait EnvironmentalApi {
    /// Environmental data for the configured default location.
    async fn current_data(&self) -> Result<EnvironmentalData, ApiError>;

    /// Environmental data for an explicit point. Coordinates are passed
    /// through as-is; the backend decides whether it can serve them.
    async fn data_at(&self, lat: f64, lon: f64) -> Result<EnvironmentalData, ApiError>;

    /// Fire risk prediction for a point. Never called without coordinates.
    async fn risk_at(&self, lat: f64, lon: f64) -> Result<RiskPrediction, ApiError>;

    async fn all_sensors(&self) -> Result<Vec<SensorLocation>, ApiError>;

    async fn sensors_in_bounds(
        &self,
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
    ) -> Result<Vec<SensorLocation>, ApiError>;

    async fn health_check(&self) -> Result<String, ApiError>;
}
