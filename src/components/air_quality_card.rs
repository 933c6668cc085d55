use yew::prelude::*;

use crate::models::AirQualityData;
use crate::utils::format::{aqi_color, aqi_health_message};

#[derive(Properties, PartialEq)]
pub struct AirQualityCardProps {
    pub data: AirQualityData,
}

#[function_component(AirQualityCard)]
pub fn air_quality_card(props: &AirQualityCardProps) -> Html {
    let data = &props.data;
    let badge_style = format!("background-color: {}", aqi_color(data.aqi));

    html! {
        <div class="card air-quality-card">
            <h3>{ "🌬️ Air Quality" }</h3>
            <div class="card-body">
                <span class="aqi-badge" style={badge_style}>
                    { format!("AQI {}", data.aqi) }
                </span>
                <p class="category">{ &data.category }</p>
                <p class="location">{ &data.location }</p>
                <p class="health-message">{ aqi_health_message(data.aqi) }</p>
            </div>
        </div>
    }
}
