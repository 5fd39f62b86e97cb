use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{
    errors::DirectoryError,
    webserver::{models::HealthResponse, state::AppState},
};

/// Create status routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

/// Liveness probe with a little context about the directory
async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, DirectoryError> {
    let token_count = state.directory.token_count().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        token_count,
        timestamp: chrono::Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::config::{DirectoryConfig, WebserverConfig};
    use crate::directory::TokenDirectory;
    use crate::webserver::{routes::create_router, state::AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_token_count() {
        let directory = Arc::new(TokenDirectory::in_memory(DirectoryConfig::default()));
        let app = create_router(Arc::new(AppState::new(directory, WebserverConfig::default())));

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["token_count"], 3);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
