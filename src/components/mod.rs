pub mod air_quality_card;
pub mod app;
pub mod map;
pub mod risk_card;
pub mod weather_card;

pub use app::App;
