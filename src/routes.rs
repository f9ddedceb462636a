//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only serves the front end. Leptos renders the pages, `/pkg`
//! holds the compiled bundle, and `/healthz` answers probes. The
//! browser talks to the backend REST service directly, so nothing here
//! proxies or inspects API traffic.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Probe routes that need no Leptos configuration.
pub fn probe_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router with the SSR pages and the static bundle.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(pulse_client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || pulse_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    probe_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
