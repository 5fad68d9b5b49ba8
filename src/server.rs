//! Axum host for the board.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the Leptos shell for `/`, serves the compiled WASM/CSS bundle from
//! `/pkg`, and answers `/healthz`. Project data never reaches the server.

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};
use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the router for the given Leptos site options.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

/// Load Leptos options from `Cargo.toml`, bind, and serve until shutdown.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded, the
/// address cannot be bound, or the server stops with an I/O error.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let app = app(conf.leptos_options);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "project board listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
