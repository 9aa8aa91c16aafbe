use serde::Deserialize;
use thiserror::Error;

// OSRM reports failures as `{"code": "InvalidQuery", "message": "..."}`
#[derive(Deserialize, Debug)]
pub struct OsrmErrorPayload {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Error, Debug)]
pub enum RoutingError {
    // Structured error from the routing service
    #[error("API Error ({code}): {message}")]
    ApiError { code: String, message: String },

    // Non-success status whose body isn't an OSRM error payload
    #[error("Unstructured API Error (HTTP {status}): {body}")]
    RawApiError { status: u16, body: String },

    #[error("Invalid waypoints: {0}")]
    InvalidWaypoints(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
