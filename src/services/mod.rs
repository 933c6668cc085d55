pub mod api;
pub mod api_client;
pub mod error;

pub use api::EnvironmentalApi;
pub use api_client::ApiClient;
pub use error::{check_coordinates, ApiError};

/// Backend base URL, fixed at compile time:
/// - Development: http://localhost:8080 (default)
/// - Production: set via BACKEND_URL env var (picked up by build.rs from .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};
