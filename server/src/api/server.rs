use std::sync::Arc;

use anyhow::Result;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::scores::{self, ScoresState};
use crate::db::ScoreStore;

/// Builds the API router; split out from `run_api_server` so tests can drive
/// it in-process.
pub fn api_router(store: Arc<dyn ScoreStore>) -> Router {
    // The game page may be served from anywhere, so CORS stays permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/scores",
            get(scores::get_scores).post(scores::submit_score),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(ScoresState { store })
}

pub async fn run_api_server(
    addr: &str,
    store: Arc<dyn ScoreStore>,
    web_dir: Option<&str>,
) -> Result<()> {
    let mut app = api_router(store);

    // Add static file serving if web_dir is provided
    if let Some(dir) = web_dir {
        let index_path = format!("{}/index.html", dir);
        let serve_dir = ServeDir::new(dir).not_found_service(ServeFile::new(&index_path));
        app = app.fallback_service(serve_dir);
        info!("Serving static files from: {}", dir);
    }

    let listener = TcpListener::bind(addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))
}

async fn health_check() -> &'static str {
    "OK"
}
