use std::sync::Arc;

use {
    axum::{
        Router,
        http::{Method, header},
        routing::{get, post},
    },
    tower_http::cors::{Any, CorsLayer},
    tracing::info,
};

use {
    leetscope_catalog::Catalog, leetscope_config::LeetscopeConfig, leetscope_relay::RelayClient,
};

use crate::routes;

// ── Shared app state ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub relay: Arc<RelayClient>,
}

// ── Server startup ───────────────────────────────────────────────────────────

/// Build the gateway router (shared between production startup and tests).
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/graphql",
            post(routes::relay_handler).options(routes::preflight_handler),
        )
        .route("/api/endpoints", get(routes::endpoints_handler))
        .route("/api/endpoints/{id}", get(routes::endpoint_detail_handler))
        .route("/health", get(routes::health_handler))
        .layer(cors)
        .with_state(state)
}

/// Start the gateway HTTP server and serve until shutdown.
pub async fn start_gateway(config: &LeetscopeConfig) -> anyhow::Result<()> {
    let relay = RelayClient::new(&config.upstream)?;
    let state = AppState {
        catalog: Arc::new(Catalog::builtin()),
        relay: Arc::new(relay),
    };
    let app = build_app(state);

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        addr = %listener.local_addr()?,
        upstream = %config.upstream.url,
        "leetscope gateway listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
