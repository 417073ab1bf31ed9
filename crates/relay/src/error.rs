use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("API key or URL not set")]
    MissingConfig,

    #[error("Request to the generation API timed out")]
    Timeout,

    #[error("Generation API error")]
    Upstream { status: u16, details: String },

    #[error("API request failed: {0}")]
    Network(String),

    #[error("Generation API returned a malformed body: {0}")]
    MalformedUpstream(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            RelayError::MissingConfig => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "API key or URL not set." }),
            ),
            RelayError::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                serde_json::json!({ "error": "Request to the generation API timed out." }),
            ),
            // Mirror the upstream status so clients can tell 429 from 500.
            RelayError::Upstream { status, details } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                serde_json::json!({ "error": "Generation API error", "details": details }),
            ),
            RelayError::Network(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "API request failed.", "details": details }),
            ),
            RelayError::MalformedUpstream(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Generation API returned malformed JSON.", "details": details }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
