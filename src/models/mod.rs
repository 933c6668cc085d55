pub mod environmental;
pub mod risk;
pub mod sensor;

pub use environmental::{AirQualityData, EnvironmentalData, GeoPoint, WeatherData};
pub use risk::{ModelInputs, RiskAssessment, RiskLevel, RiskPrediction, RiskWeather};
pub use sensor::{SensorLocation, SensorsResponse};
