//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the Leptos app on the server and serves its hydration
//! bundle from `/pkg`. Everything under `/api` belongs to the annotation
//! backend and is forwarded there, so the browser sees a single origin and
//! the backend's session cookie stays first-party.

pub mod proxy;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use proxy::ProxyState;

/// Errors raised while assembling the router.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("http client: {0}")]
    HttpClient(String),
}

/// Health check plus backend forwarding.
pub fn api_routes(state: ProxyState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Forwarding state built from host config.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn proxy_state(config: &HostConfig) -> Result<ProxyState, StartupError> {
    let client = reqwest::Client::builder()
        .timeout(config.proxy_timeout)
        .build()
        .map_err(|e| StartupError::HttpClient(e.to_string()))?;
    Ok(ProxyState { client, backend_url: config.backend_url.clone() })
}

/// Full application router: API routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section) or the HTTP client
/// cannot be built.
pub fn leptos_app(config: &HostConfig) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(genocrowd_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || genocrowd_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    // Images and other assets referenced by the pages (e.g. `/static/logo/...`).
    let site_service = ServeDir::new(&site_root_path);

    Ok(api_routes(proxy_state(config)?)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(site_service)
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
