//! HTTP route handlers: health, picture proxy, commentary proxy.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use apod_core::{CommentaryRequest, FetchError};

use super::json_error;
use super::state::AppState;

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": apod_core::VERSION,
    });
    (StatusCode::OK, Json(response))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApodQuery {
    date: Option<String>,
}

/// GET /api/apod?date=YYYY-MM-DD
///
/// 200 with the normalized record, or 500 with a generic error body. An
/// unparseable query string is a failure like any other.
pub(crate) async fn handle_apod(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ApodQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected picture query");
            return json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &FetchError::PictureFetchFailed.to_string(),
            )
            .into_response();
        }
    };
    let date = query.date.as_deref().filter(|d| !d.is_empty());

    match state.pictures.fetch_picture(date).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => json_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()).into_response(),
    }
}

/// POST /api/commentary
///
/// Always 200 for a well-formed body; provider failures already resolved
/// to the fallback text.
pub(crate) async fn handle_commentary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CommentaryRequest>,
) -> impl IntoResponse {
    let result = state.commentary.generate_commentary(&request).await;
    (StatusCode::OK, Json(result))
}
