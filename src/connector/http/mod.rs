//! HTTP transport for the generation pipeline.
//!
//! Axum server exposing `POST /generate-content`, `GET /history`,
//! `GET|DELETE /history/{id}` and `GET /health`, with permissive CORS and
//! optional bearer authentication.

mod error;
mod middleware;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, warn};

use crate::application::{DeleteGenerationUseCase, GenerateContentUseCase, ListHistoryUseCase};
use crate::domain::{Generation, GenerationError, GenerationRequest, GenerationResult};

pub use middleware::{answer_options, cors_layer, require_bearer};

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub generate: Arc<GenerateContentUseCase>,
    pub history: Arc<ListHistoryUseCase>,
    pub delete: Arc<DeleteGenerationUseCase>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

/// Health check endpoint
pub async fn health_handler() -> &'static str {
    "ok"
}

pub async fn generate_handler(
    State(state): State<HttpState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, GenerationError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected generate-content body: {}", e.body_text());
        GenerationError::invalid_input("Request body must be JSON with a topic, platform and tone.")
    })?;

    let result = state.generate.execute(request).await?;
    Ok(Json(result))
}

pub async fn history_handler(
    State(state): State<HttpState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<Generation>>, GenerationError> {
    let generations = state.history.execute(params.limit).await?;
    Ok(Json(generations))
}

pub async fn history_entry_handler(
    State(state): State<HttpState>,
    Path(id): Path<String>,
) -> Result<Json<Generation>, GenerationError> {
    Ok(Json(state.history.get(&id).await?))
}

pub async fn delete_history_entry_handler(
    State(state): State<HttpState>,
    Path(id): Path<String>,
) -> Result<StatusCode, GenerationError> {
    state.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Builds the application router.
///
/// Layer order matters: CORS is outermost so preflights are answered before
/// authentication, then bare OPTIONS requests, then the bearer check.
pub fn build_router(state: HttpState, auth_token: Option<String>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/generate-content", post(generate_handler))
        .route("/history", get(history_handler))
        .route(
            "/history/{id}",
            get(history_entry_handler).delete(delete_history_entry_handler),
        )
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(auth_token, require_bearer))
        .layer(axum::middleware::from_fn(answer_options))
        .layer(cors_layer())
}

/// Start the HTTP server
pub async fn start_http_server(
    state: HttpState,
    auth_token: Option<String>,
    addr: SocketAddr,
) -> Result<()> {
    if auth_token.is_none() {
        warn!("No inbound bearer token configured; generate-content is open to any caller");
    }

    let app = build_router(state, auth_token);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
