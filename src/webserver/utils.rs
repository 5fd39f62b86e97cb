/// Response helpers shared by all route handlers
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::errors::DirectoryError;
use crate::webserver::models::{ErrorDetails, ErrorResponse};

/// Build the standard JSON error envelope
pub fn error_response(
    status: StatusCode,
    code: &str,
    message: &str,
    details: Option<&str>,
) -> Response {
    let body = ErrorResponse {
        error: ErrorDetails {
            code: code.to_string(),
            message: message.to_string(),
            details: details.map(str::to_string),
            timestamp: chrono::Utc::now(),
        },
    };
    (status, Json(body)).into_response()
}

impl DirectoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            DirectoryError::InvalidSortField(_) => StatusCode::BAD_REQUEST,
            DirectoryError::UnknownBlockchain(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let details = match &self {
            DirectoryError::NotFound { entity, id } => {
                Some(format!("No {} with id {}", entity.to_lowercase(), id))
            }
            DirectoryError::InvalidSortField(_) => {
                Some("Sortable fields: id, symbol, blockchain_id".to_string())
            }
            DirectoryError::UnknownBlockchain(id) => Some(format!("No blockchain with id {}", id)),
        };
        error_response(
            self.status_code(),
            self.code(),
            &self.to_string(),
            details.as_deref(),
        )
    }
}
