use yew::prelude::*;

use crate::components::air_quality_card::AirQualityCard;
use crate::components::map::EnvironmentalMap;
use crate::components::risk_card::RiskCard;
use crate::components::weather_card::WeatherCard;
use crate::hooks::use_monitor;
use crate::state::RequestState;

#[function_component(App)]
pub fn app() -> Html {
    let monitor = use_monitor();

    let loading = monitor.snapshot.is_pending();
    let snapshot_data = monitor.snapshot.data().cloned();
    let sensors = monitor
        .sensors
        .data()
        .cloned()
        .unwrap_or_default();

    let on_refresh = {
        let refresh = monitor.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let last_updated = monitor
        .last_updated
        .map(|t| format!("Last updated: {}", t.format("%H:%M:%S UTC")));

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{ "🌍 HeliosNet Environmental Monitor" }</h1>
                <p class="app-subtitle">{ "Real-time environmental data for Altamont, Oregon" }</p>
                <div class="header-controls">
                    <button class="refresh-btn" onclick={on_refresh.clone()} disabled={loading}>
                        { if loading { "⟳ Loading..." } else { "🔄 Refresh Data" } }
                    </button>
                    if let Some(label) = last_updated {
                        <span class="last-updated">{ label }</span>
                    }
                </div>
            </header>

            <main class="app-main">
                if let RequestState::Failed(message) = &monitor.snapshot {
                    <div class="error-banner">
                        <span>{ format!("⚠️ {}", message) }</span>
                        <button onclick={on_refresh}>{ "Try Again" }</button>
                    </div>
                }

                <div class="dashboard-grid">
                    <div class="map-section">
                        <EnvironmentalMap
                            data={snapshot_data.clone()}
                            sensors={sensors}
                            on_select={monitor.select_point.clone()}
                        />
                        if snapshot_data.is_some() && !loading {
                            <p class="map-instructions">
                                { "Click anywhere on the map to get environmental data and fire risk assessment for that location" }
                            </p>
                        }
                    </div>

                    <div class="data-section">
                        <RiskCard state={monitor.risk.clone()} />
                        if let Some(data) = &snapshot_data {
                            <AirQualityCard data={data.air_quality.clone()} />
                            <WeatherCard data={data.weather.clone()} />
                        } else if !loading {
                            <div class="no-data">
                                <h3>{ "No data available" }</h3>
                                <p>{ "Click the refresh button to try loading data again." }</p>
                            </div>
                        }
                    </div>
                </div>
            </main>

            <footer class="app-footer">
                <p>{ "Data provided by AirNow API and OpenWeatherMap API" }</p>
            </footer>
        </div>
    }
}
