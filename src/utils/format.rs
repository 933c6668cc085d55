//! Pure display helpers for the cards and map popups. Bands and colors
//! follow the EPA AQI scale and the backend's risk levels.

use crate::models::RiskLevel;

pub fn aqi_color(aqi: i32) -> &'static str {
    match aqi {
        i32::MIN..=50 => "#00e400",  // Good
        51..=100 => "#ffff00",       // Moderate
        101..=150 => "#ff7e00",      // Unhealthy for Sensitive Groups
        151..=200 => "#ff0000",      // Unhealthy
        201..=300 => "#8f3f97",      // Very Unhealthy
        _ => "#7e0023",              // Hazardous
    }
}

pub fn aqi_health_message(aqi: i32) -> &'static str {
    match aqi {
        i32::MIN..=50 => "Air quality is satisfactory, and air pollution poses little or no risk.",
        51..=100 => "Air quality is acceptable. However, there may be a risk for some people, particularly those who are unusually sensitive to air pollution.",
        101..=150 => "Members of sensitive groups may experience health effects. The general public is less likely to be affected.",
        151..=200 => "Some members of the general public may experience health effects; members of sensitive groups may experience more serious health effects.",
        201..=300 => "Health alert: The risk of health effects is increased for everyone.",
        _ => "Health warning of emergency conditions: everyone is more likely to be affected.",
    }
}

pub fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Minimal => "#00FF00",
        RiskLevel::Low => "#FFFF00",
        RiskLevel::Moderate => "#FFA500",
        RiskLevel::High => "#FF0000",
        RiskLevel::Extreme => "#8B0000",
    }
}

pub fn risk_icon(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Minimal => "✅",
        RiskLevel::Low => "⚠️",
        RiskLevel::Moderate => "🔥",
        RiskLevel::High => "🔥🔥",
        RiskLevel::Extreme => "🔥🔥🔥",
    }
}

/// Degrees to a 16-point compass direction.
pub fn compass_point(degrees: f64) -> &'static str {
    const DIRECTIONS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let index = ((degrees.rem_euclid(360.0) / 22.5).round() as usize) % 16;
    DIRECTIONS[index]
}

pub fn temperature_color(celsius: f64) -> &'static str {
    match celsius {
        t if t <= 0.0 => "#0066cc",
        t if t <= 10.0 => "#0099ff",
        t if t <= 20.0 => "#66cc00",
        t if t <= 30.0 => "#ffcc00",
        t if t <= 35.0 => "#ff6600",
        _ => "#ff0000",
    }
}

pub fn humidity_level(humidity: f64) -> &'static str {
    match humidity {
        h if h < 30.0 => "Low",
        h if h < 60.0 => "Comfortable",
        h if h < 80.0 => "High",
        _ => "Very High",
    }
}

pub fn wind_speed_level(speed_ms: f64) -> &'static str {
    match speed_ms {
        s if s < 2.0 => "Calm",
        s if s < 6.0 => "Light Breeze",
        s if s < 12.0 => "Moderate Breeze",
        s if s < 20.0 => "Strong Breeze",
        _ => "High Wind",
    }
}
