use thiserror::Error;

/// Failure taxonomy for outbound reads. The stores collapse these into a
/// single display string for the UI, but each kind is logged distinctly
/// so network, backend and payload problems stay diagnosable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response obtained at all (offline, DNS, CORS, aborted).
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend responded with a non-success status.
    #[error("HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// The response arrived but could not be parsed into the expected shape.
    #[error("Unexpected response format: {0}")]
    Decode(String),

    /// Caller supplied coordinates outside the valid geographic range.
    /// Defensive check only; the backend contract does not require it.
    #[error("Coordinates out of range: ({lat}, {lon})")]
    Validation { lat: f64, lon: f64 },
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::Remote { .. } => "remote",
            ApiError::Decode(_) => "decode",
            ApiError::Validation { .. } => "validation",
        }
    }
}

/// Optional range check for callers that want to reject nonsense
/// coordinates before going to the network.
pub fn check_coordinates(lat: f64, lon: f64) -> Result<(), ApiError> {
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(ApiError::Validation { lat, lon })
    }
}
