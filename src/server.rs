//! HTTP convert service
//!
//! `POST /convert` takes `{"md_content": "..."}` and answers with the same
//! `{"html_content": "..."}` object embed mode prints. A missing or null
//! `md_content` renders an empty document.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::NotesResult;
use crate::pipeline::RenderOptions;
use crate::render::HtmlPayload;

type SharedOptions = Arc<RenderOptions>;

/// Convert request body
#[derive(Debug, Deserialize)]
struct ConvertRequest {
    #[serde(default)]
    md_content: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    stderr: String,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

async fn convert(
    State(options): State<SharedOptions>,
    Json(request): Json<ConvertRequest>,
) -> Response {
    let source = request.md_content.unwrap_or_default();
    let bytes = source.len();

    // Rendering is CPU-bound; keep it off the async workers.
    match tokio::task::spawn_blocking(move || HtmlPayload::render(&source, &options)).await {
        Ok(payload) => {
            tracing::debug!(bytes, "converted request");
            Json(payload).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "conversion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "conversion failed".to_string(),
                    stderr: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Build the axum router
pub fn router(options: RenderOptions) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/convert", post(convert))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(options))
}

/// Serve the convert endpoint on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, options: RenderOptions, shutdown: F) -> NotesResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "convert server listening");

    axum::serve(listener, router(options))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("convert server stopped");
    Ok(())
}
