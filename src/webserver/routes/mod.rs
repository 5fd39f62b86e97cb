use crate::webserver::{middleware, state::AppState, utils};
use axum::{http::StatusCode, response::Response, Router};
use std::sync::Arc;

pub mod blockchains;
pub mod status;
pub mod tokens;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(tokens::routes())
        .merge(blockchains::routes())
        .merge(status::routes())
        .fallback(not_found)
        .layer(axum::middleware::from_fn(middleware::request_logger))
        .with_state(state)
}

/// Unknown paths get the same JSON envelope as domain errors
async fn not_found() -> Response {
    utils::error_response(StatusCode::NOT_FOUND, "NOT_FOUND", "Route not found", None)
}
