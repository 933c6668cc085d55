use yew::prelude::*;

use crate::models::WeatherData;
use crate::utils::format::{compass_point, humidity_level, temperature_color, wind_speed_level};

#[derive(Properties, PartialEq)]
pub struct WeatherCardProps {
    pub data: WeatherData,
}

#[function_component(WeatherCard)]
pub fn weather_card(props: &WeatherCardProps) -> Html {
    let data = &props.data;
    let temp_style = format!("color: {}", temperature_color(data.temperature));

    html! {
        <div class="card weather-card">
            <h3>{ "🌤️ Weather" }</h3>
            <div class="card-body">
                <p class="temperature" style={temp_style}>
                    { format!("{:.1}°C", data.temperature) }
                </p>
                <p>{ format!("Humidity: {:.0}% ({})", data.humidity, humidity_level(data.humidity)) }</p>
                <p>
                    { format!(
                        "Wind: {:.1} m/s {} ({})",
                        data.wind_speed,
                        compass_point(data.wind_direction),
                        wind_speed_level(data.wind_speed),
                    ) }
                </p>
            </div>
        </div>
    }
}
