use serde::{Deserialize, Serialize};

/// Air quality reading as reported by the backend (AirNow upstream).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityData {
    pub aqi: i32,
    pub category: String,
    /// Reporting area name, e.g. "Klamath Falls".
    pub location: String,
    pub timestamp: String,
}

/// Current weather conditions (metric units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// °C
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// m/s
    pub wind_speed: f64,
    /// Meteorological degrees (0 = N)
    pub wind_direction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One complete environmental reading for a single location.
/// Produced wholesale by a single fetch and replaced wholesale by the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalData {
    pub air_quality: AirQualityData,
    pub weather: WeatherData,
    pub location: GeoPoint,
}
