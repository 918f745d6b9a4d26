use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Error envelope returned by every failing endpoint:
/// `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler's `Result`.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Map a domain failure onto its HTTP status and error envelope.
pub fn error_response(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Upstream { status } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        DomainError::Unavailable(_) => StatusCode::BAD_GATEWAY,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!(%status, transient = e.is_transient(), "Request failed: {}", e);
    }

    (status, Json(ApiResponse::error(e.to_string())))
}
