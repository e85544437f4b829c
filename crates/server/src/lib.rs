//! # server
//!
//! REST API over the consumption analysis engine: register schools, submit
//! monthly bills and read usage trends.

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use analysis::BillAnalyzer;

pub mod config;
mod error;
mod registry;
mod routes;

pub use config::{ConfigError, CorsOrigins, ServerConfig};
pub use error::ApiError;
pub use registry::{NewSchool, Registry, SchoolRecord};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<BillAnalyzer>,
    registry: Arc<RwLock<Registry>>,
}

impl AppState {
    pub fn new(analyzer: BillAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            registry: Arc::new(RwLock::new(Registry::default())),
        }
    }
}

/// Liveness probe
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Routes without transport middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route(
            "/api/analysis/schools",
            post(routes::register_school).get(routes::list_schools),
        )
        .route("/api/analysis", post(routes::submit_bill))
        .route("/api/analysis/:school_id", get(routes::trend_insights))
        .with_state(state)
}

/// Full application: routes plus tracing and CORS layers.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Install the global tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .try_init();
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig, analyzer: BillAnalyzer) -> Result<(), ConfigError> {
    let addr = config.socket_addr()?;
    let cors = config.cors_layer()?;
    let app = app(AppState::new(analyzer), cors);

    tracing::info!("ecoscore-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
