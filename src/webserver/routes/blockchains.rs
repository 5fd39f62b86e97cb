use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::{directory::Blockchain, errors::DirectoryError, webserver::state::AppState};

/// Read-only blockchain routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/blockchains", get(list_blockchains))
        .route("/blockchains/", get(list_blockchains))
        .route("/blockchains/:blockchain_id", get(get_blockchain))
}

async fn list_blockchains(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Blockchain>>, DirectoryError> {
    Ok(Json(state.directory.list_blockchains().await?))
}

async fn get_blockchain(
    State(state): State<Arc<AppState>>,
    Path(blockchain_id): Path<i64>,
) -> Result<Json<Blockchain>, DirectoryError> {
    Ok(Json(state.directory.get_blockchain(blockchain_id).await?))
}

#[cfg(test)]
mod tests {
    use crate::config::{DirectoryConfig, WebserverConfig};
    use crate::directory::TokenDirectory;
    use crate::webserver::{routes::create_router, state::AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let directory = Arc::new(TokenDirectory::in_memory(DirectoryConfig::default()));
        create_router(Arc::new(AppState::new(directory, WebserverConfig::default())))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_blockchains() {
        let (status, body) = get_json("/blockchains").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"id": 1, "name": "Ethereum"}, {"id": 2, "name": "Solana"}])
        );
    }

    #[tokio::test]
    async fn test_unknown_blockchain_404() {
        let (status, body) = get_json("/blockchains/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Blockchain not found");
        assert_eq!(body["error"]["details"], "No blockchain with id 9");
    }
}
