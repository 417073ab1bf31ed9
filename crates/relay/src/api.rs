//! The single forwarding route plus a health check.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::RelayConfig;
use crate::error::RelayError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<RelayConfig>,
}

#[derive(Debug, Deserialize)]
struct PromptRequest {
    prompt: String,
}

pub fn build_router(state: AppState) -> Router {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    match &state.config.allowed_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => cors = cors.allow_origin(value),
            Err(_) => {
                warn!(origin, "Invalid ALLOWED_ORIGIN, allowing any origin");
                cors = cors.allow_origin(Any);
            }
        },
        None => {
            warn!("ALLOWED_ORIGIN not set, allowing any origin (dev only)");
            cors = cors.allow_origin(Any);
        }
    }

    Router::new()
        .route("/health", get(health_check))
        .route("/api/gemini", post(generate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Relay listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Forward `{prompt}` to the upstream generation API and pass the
/// envelope through verbatim. No logic beyond forwarding and the
/// timeout; the client does all parsing.
async fn generate(
    State(state): State<AppState>,
    Json(req): Json<PromptRequest>,
) -> Result<Json<serde_json::Value>, RelayError> {
    let (Some(key), Some(url)) = (
        state.config.gemini_api_key.as_deref(),
        state.config.gemini_api_url.as_deref(),
    ) else {
        return Err(RelayError::MissingConfig);
    };

    let response = state
        .http
        .post(format!("{url}?key={key}"))
        .timeout(state.config.upstream_timeout)
        .json(&upstream_body(&req.prompt))
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                RelayError::Timeout
            } else {
                RelayError::Network(e.to_string())
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let details = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Upstream returned an error");
        return Err(RelayError::Upstream {
            status: status.as_u16(),
            details,
        });
    }

    let envelope: serde_json::Value = response
        .json()
        .await
        .map_err(|e| RelayError::MalformedUpstream(e.to_string()))?;
    Ok(Json(envelope))
}

/// The Gemini generateContent request wrapping a single prompt.
fn upstream_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    })
}
