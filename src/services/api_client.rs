// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here, just requests against the HeliosNet backend.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{EnvironmentalData, RiskPrediction, SensorLocation, SensorsResponse};
use crate::services::api::EnvironmentalApi;
use crate::services::error::ApiError;
use crate::services::BACKEND_URL;

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Remote {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl EnvironmentalApi for ApiClient {
    async fn current_data(&self) -> Result<EnvironmentalData, ApiError> {
        self.get_json("/environmental-data").await
    }

    async fn data_at(&self, lat: f64, lon: f64) -> Result<EnvironmentalData, ApiError> {
        self.get_json(&format!("/environmental-data?lat={}&lon={}", lat, lon))
            .await
    }

    async fn risk_at(&self, lat: f64, lon: f64) -> Result<RiskPrediction, ApiError> {
        self.get_json(&format!("/api/risk/point?lat={}&lon={}", lat, lon))
            .await
    }

    async fn all_sensors(&self) -> Result<Vec<SensorLocation>, ApiError> {
        let response: SensorsResponse = self.get_json("/api/sensors").await?;
        Ok(response.sensors)
    }

    async fn sensors_in_bounds(
        &self,
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
    ) -> Result<Vec<SensorLocation>, ApiError> {
        let path = format!(
            "/api/sensors?min_lat={}&min_lon={}&max_lat={}&max_lon={}",
            min_lat, min_lon, max_lat, max_lon
        );
        let response: SensorsResponse = self.get_json(&path).await?;
        Ok(response.sensors)
    }

    async fn health_check(&self) -> Result<String, ApiError> {
        let response: HealthResponse = self.get_json("/health").await?;
        Ok(response.status)
    }
}
