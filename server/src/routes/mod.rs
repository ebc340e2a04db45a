//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One axum router serves three things: the `/api` reverse proxy, the
//! Leptos SSR pages, and the compiled client assets under `/pkg`. The body
//! limit sits on the proxy only, sized so 20MB manuals plus multipart
//! framing fit.


use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

/// Proxy and health routes, without the SSR front-end.
pub fn api_routes(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full host: proxy + Leptos SSR + `/pkg` assets, with request tracing.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState, max_upload_bytes: usize) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, max_upload_bytes)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
