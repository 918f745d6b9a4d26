//! Postal-code (CEP) passthrough

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::domain::{DomainError, PostalCodeLookup};
use crate::interfaces::http::common::{error_response, ApiResponse};

#[derive(Clone)]
pub struct PostalHandlerState {
    pub lookup: Arc<dyn PostalCodeLookup>,
}

#[utoipa::path(
    get,
    path = "/cep/{cep}",
    tag = "Postal",
    params(("cep" = String, Path, description = "Postal code (CEP), e.g. 01001000")),
    responses(
        (status = 200, description = "Upstream address JSON, relayed verbatim"),
        (status = 400, description = "Upstream rejected the code", body = ApiResponse<String>),
        (status = 502, description = "Upstream unreachable", body = ApiResponse<String>)
    )
)]
pub async fn lookup_postal_code(
    State(state): State<PostalHandlerState>,
    Path(cep): Path<String>,
) -> Response {
    let upstream = match state.lookup.lookup(&cep).await {
        Ok(upstream) => upstream,
        Err(e) => return error_response(e).into_response(),
    };

    if !upstream.is_success() {
        return error_response(DomainError::Upstream {
            status: upstream.status,
        })
        .into_response();
    }

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);
    let content_type = upstream
        .content_type
        .unwrap_or_else(|| "application/json".to_string());

    (
        status,
        [(header::CONTENT_TYPE, content_type)],
        Body::from(upstream.body),
    )
        .into_response()
}
