//! # relay
//!
//! Forwarding server between the idea-generator client and the upstream
//! text-generation API. One route, `POST /api/gemini`, takes `{prompt}`,
//! forwards it upstream with a 10 second deadline, and relays the
//! response envelope verbatim. Upstream failures are mirrored as
//! `{error, details}`; a timeout answers 504.

mod api;
mod config;
mod error;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::RelayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,relay=debug")),
        )
        .init();

    info!("Starting relay v{}", env!("CARGO_PKG_VERSION"));

    let config = RelayConfig::from_env();
    info!(
        addr = %config.http_addr,
        upstream_configured = config.gemini_api_key.is_some() && config.gemini_api_url.is_some(),
        origin_restricted = config.allowed_origin.is_some(),
        "Loaded configuration"
    );

    let state = AppState {
        http: reqwest::Client::new(),
        config: Arc::new(config.clone()),
    };

    tokio::select! {
        result = api::serve(state, config.http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
