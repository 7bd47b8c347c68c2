//! `apod serve` -- the gateway's HTTP JSON API.
//!
//! Endpoints:
//! - GET  /health          - Server status
//! - GET  /api/apod        - Picture of the day, optional `?date=YYYY-MM-DD`
//! - POST /api/commentary  - Short poem about a picture
//!
//! All responses use Content-Type: application/json. CORS is permissive so
//! a browser front end on another origin can call the gateway directly.

mod handlers;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use self::handlers::{
    handle_apod, handle_commentary, handle_health, handle_not_found,
};
pub use self::state::AppState;
use crate::config::GatewayConfig;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Build the gateway router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/apod", get(handle_apod))
        .route("/api/commentary", post(handle_commentary))
        .fallback(handle_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway on `config.port`.
///
/// When TLS cert/key paths are provided (and the `tls` feature is on), the
/// server listens over HTTPS using `axum-server` with rustls. Otherwise it
/// uses plain HTTP.
pub async fn start_server(
    config: GatewayConfig,
    _tls_cert: Option<PathBuf>,
    _tls_key: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(?config, "starting gateway");
    if config.text_api_key.is_none() {
        tracing::warn!("OPENROUTER_API_KEY not set; commentary will always use the fallback text");
    }

    let state = Arc::new(AppState::from_config(&config));
    let app = router(state);
    let addr = format!("0.0.0.0:{}", config.port);

    #[cfg(feature = "tls")]
    if let (Some(cert_path), Some(key_path)) = (&_tls_cert, &_tls_key) {
        let tls =
            axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path).await?;
        let socket_addr: std::net::SocketAddr = addr.parse()?;
        tracing::info!("APOD gateway listening on https://{}", socket_addr);
        axum_server::bind_rustls(socket_addr, tls)
            .serve(app.into_make_service())
            .await?;
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("APOD gateway listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("gateway shut down");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
