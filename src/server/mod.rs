use crate::core::counter::{count_tagged_orders, LIVE_TAG};
use crate::domain::model::QueueResponse;
use crate::domain::ports::ShopifyApi;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    /// `None` when store credentials were absent at startup; every request
    /// then answers with a configuration error before any outbound call.
    pub api: Option<Arc<dyn ShopifyApi>>,
}

impl AppState {
    pub fn new(api: Option<Arc<dyn ShopifyApi>>) -> Self {
        Self { api }
    }
}

#[derive(Debug)]
pub enum AppError {
    MissingCredentials,
    Aggregation(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::MissingCredentials => {
                tracing::warn!("Request received without store credentials configured");
                "missing store credentials"
            }
            AppError::Aggregation(err) => {
                // Internal detail stays in the log; the caller gets a
                // generic failure and never a partial count.
                tracing::error!("❌ Aggregation failed: {:#}", err);
                "failed to fetch orders or products"
            }
        };

        let body = Json(json!({ "error": message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Aggregation(err.into())
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/queue", get(queue_handler))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn queue_handler(State(state): State<AppState>) -> Result<Json<QueueResponse>, AppError> {
    let api = state.api.as_ref().ok_or(AppError::MissingCredentials)?;
    let queue_length = count_tagged_orders(api.as_ref(), LIVE_TAG).await?;
    Ok(Json(QueueResponse { queue_length }))
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
