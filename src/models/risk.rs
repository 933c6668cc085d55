use std::fmt;

use serde::{Deserialize, Serialize};

use super::environmental::GeoPoint;

/// Fire danger bands used by the backend risk model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Minimal,
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskLevel {
    /// Same probability thresholds the backend applies when labelling
    /// a prediction.
    pub fn from_probability(p: f64) -> Self {
        match p {
            p if p >= 0.8 => RiskLevel::Extreme,
            p if p >= 0.6 => RiskLevel::High,
            p if p >= 0.4 => RiskLevel::Moderate,
            p if p >= 0.2 => RiskLevel::Low,
            _ => RiskLevel::Minimal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Minimal => "MINIMAL",
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Extreme => "EXTREME",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Probability of fire risk in [0, 1].
    pub probability: f64,
    pub level: RiskLevel,
    pub description: String,
}

/// Weather observed at the queried point (imperial units, as the
/// risk endpoint reports them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskWeather {
    /// °F
    pub temperature: f64,
    pub humidity: f64,
    /// mph
    pub wind_speed: f64,
    pub wind_direction: f64,
}

/// The feature vector the backend fed to its model, echoed back for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInputs {
    pub temperature: f32,
    pub humidity: f32,
    pub wind_speed: f32,
    pub precipitation: f32,
    pub drought_index: f32,
}

/// Point-scoped wildfire risk prediction. Only the most recent
/// prediction is retained; a new query replaces it entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub location: GeoPoint,
    pub risk: RiskAssessment,
    pub weather_conditions: RiskWeather,
    pub model_inputs: ModelInputs,
    pub timestamp: String,
}
