//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the small JSON API and Leptos SSR rendering under a
//! single Axum router, and serves the compiled client bundle from the Leptos
//! site root.


pub mod color_scheme;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Errors produced while assembling the site router.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// JSON API routes.
fn api_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/color-scheme", get(color_scheme::current))
        .route("/healthz", get(healthz))
        .layer(cors)
}

/// Full site: API routes + Leptos SSR + static client assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (the
/// `LEPTOS_*` environment normally provided by `cargo leptos` is missing or
/// malformed).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, AppError> {
    let conf = get_configuration(None).map_err(|e| AppError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(site_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Compiled WASM, JS and CSS live under <site_root>/pkg.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let app = api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .route_service("/favicon.ico", ServeFile::new(site_root_path.join("favicon.ico")))
        .layer(TraceLayer::new_for_http());

    if config.compression {
        Ok(app.layer(CompressionLayer::new()))
    } else {
        Ok(app)
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
