//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the Leptos routes (`/`, `/ticket`) server-side, serves the
//! compiled WASM bundle under `/pkg` and static assets from the site root.
//! There is no API: tickets never leave the browser.

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

/// Leptos SSR frontend plus static assets and a health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(ticket_client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());

    let leptos_router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || ticket_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    leptos_router
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
