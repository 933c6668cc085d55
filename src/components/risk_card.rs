use yew::prelude::*;

use crate::models::RiskPrediction;
use crate::state::RequestState;
use crate::utils::format::{risk_color, risk_icon};

#[derive(Properties, PartialEq)]
pub struct RiskCardProps {
    pub state: RequestState<RiskPrediction>,
}

#[function_component(RiskCard)]
pub fn risk_card(props: &RiskCardProps) -> Html {
    let body = match &props.state {
        RequestState::Idle => html! {
            <p class="hint">{ "Click anywhere on the map for a fire risk assessment." }</p>
        },
        RequestState::Pending => html! {
            <p class="loading">{ "⟳ Assessing fire risk..." }</p>
        },
        RequestState::Failed(message) => html! {
            <p class="error">{ format!("⚠️ {}", message) }</p>
        },
        RequestState::Ready(prediction) => {
            let level = prediction.risk.level;
            let badge_style = format!("background-color: {}", risk_color(level));
            html! {
                <>
                    <span class="risk-badge" style={badge_style}>
                        { format!("{} {}", risk_icon(level), level) }
                    </span>
                    <p class="probability">
                        { format!("Probability: {:.0}%", prediction.risk.probability * 100.0) }
                    </p>
                    <p class="description">{ &prediction.risk.description }</p>
                    <p class="conditions">
                        { format!(
                            "At ({:.4}, {:.4}): {:.0}°F, {:.0}% humidity, wind {:.0} mph",
                            prediction.location.latitude,
                            prediction.location.longitude,
                            prediction.weather_conditions.temperature,
                            prediction.weather_conditions.humidity,
                            prediction.weather_conditions.wind_speed,
                        ) }
                    </p>
                </>
            }
        }
    };

    html! {
        <div class="card risk-card">
            <h3>{ "🔥 Fire Risk" }</h3>
            <div class="card-body">{ body }</div>
        </div>
    }
}
