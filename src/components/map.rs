use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::window;
use yew::prelude::*;

use crate::models::{EnvironmentalData, SensorLocation};
use crate::utils::constants::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, MAP_CONTAINER_ID, MAP_DEFAULT_ZOOM};
use crate::utils::format::aqi_color;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initLeafletMap)]
    fn init_leaflet_map(container_id: &str, lat: f64, lon: f64, zoom: u32, is_dark: bool);

    #[wasm_bindgen(js_name = onMapClick)]
    fn on_map_click(callback: &Closure<dyn FnMut(f64, f64)>);

    #[wasm_bindgen(js_name = setQueryMarker)]
    fn set_query_marker(lat: f64, lon: f64, popup_html: &str);

    #[wasm_bindgen(js_name = setSensorMarkers)]
    fn set_sensor_markers(sensors_json: &str);
}

#[derive(Properties, PartialEq)]
pub struct EnvironmentalMapProps {
    pub data: Option<EnvironmentalData>,
    pub sensors: Vec<SensorLocation>,
    pub on_select: Callback<(f64, f64)>,
}

/// Thin wrapper over the Leaflet bootstrap in static/map.js. The map lives
/// entirely on the JS side; this component just pushes marker updates and
/// feeds clicks back into the monitor.
#[function_component(EnvironmentalMap)]
pub fn environmental_map(props: &EnvironmentalMapProps) -> Html {
    // Initialize the map once, after the container div is in the DOM.
    {
        let on_select = props.on_select.clone();
        use_effect_with((), move |_| {
            let is_dark = window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
                .flatten()
                .map(|mq| mq.matches())
                .unwrap_or(false);

            Timeout::new(100, move || {
                log::info!("🗺️ Initializing Leaflet map");
                init_leaflet_map(MAP_CONTAINER_ID, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, MAP_DEFAULT_ZOOM, is_dark);

                let closure = Closure::wrap(Box::new(move |lat: f64, lon: f64| {
                    on_select.emit((lat, lon));
                }) as Box<dyn FnMut(f64, f64)>);
                on_map_click(&closure);
                // The click handler lives as long as the map does.
                closure.forget();
            })
            .forget();

            || ()
        });
    }

    // Move the query marker whenever a new snapshot lands.
    {
        let data = props.data.clone();
        use_effect_with(data, move |data| {
            if let Some(data) = data {
                let popup = format!(
                    "<b>AQI <span style=\"color:{}\">{}</span> — {}</b><br/>{:.1}°C, {}% humidity",
                    aqi_color(data.air_quality.aqi),
                    data.air_quality.aqi,
                    data.air_quality.category,
                    data.weather.temperature,
                    data.weather.humidity,
                );
                set_query_marker(data.location.latitude, data.location.longitude, &popup);
            }
            || ()
        });
    }

    // Redraw station markers when the registry (re)loads.
    {
        let sensors = props.sensors.clone();
        use_effect_with(sensors, move |sensors| {
            if !sensors.is_empty() {
                let json = serde_json::to_string(sensors).unwrap_or_default();
                set_sensor_markers(&json);
            }
            || ()
        });
    }

    html! {
        <div id={MAP_CONTAINER_ID} class="map-canvas"></div>
    }
}
