use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::{
    directory::{Token, TokenDetail, TokenInput, TokenListQuery},
    errors::DirectoryError,
    webserver::state::AppState,
};

/// Create token routes
///
/// The collection is reachable with and without the trailing slash.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tokens", get(list_tokens).post(create_token))
        .route("/tokens/", get(list_tokens).post(create_token))
        .route(
            "/tokens/:token_id",
            get(get_token).put(update_token).delete(delete_token),
        )
}

/// `POST /tokens/` → 201 with the created token
async fn create_token(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TokenInput>,
) -> Result<(StatusCode, Json<Token>), DirectoryError> {
    let token = state.directory.create_token(input).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// `GET /tokens/?skip=&limit=&sort_by=&symbol_filter=`
async fn list_tokens(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenListQuery>,
) -> Result<Json<Vec<Token>>, DirectoryError> {
    let tokens = state.directory.list_tokens(&query).await?;
    Ok(Json(tokens))
}

/// `GET /tokens/{token_id}` → token with its launch metrics
async fn get_token(
    State(state): State<Arc<AppState>>,
    Path(token_id): Path<i64>,
) -> Result<Json<TokenDetail>, DirectoryError> {
    let detail = state.directory.get_token(token_id).await?;
    Ok(Json(detail))
}

async fn update_token(
    State(state): State<Arc<AppState>>,
    Path(token_id): Path<i64>,
    Json(input): Json<TokenInput>,
) -> Result<Json<Token>, DirectoryError> {
    let token = state.directory.update_token(token_id, input).await?;
    Ok(Json(token))
}

/// `DELETE /tokens/{token_id}` → 204 with an empty body
async fn delete_token(
    State(state): State<Arc<AppState>>,
    Path(token_id): Path<i64>,
) -> Result<StatusCode, DirectoryError> {
    state.directory.delete_token(token_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
