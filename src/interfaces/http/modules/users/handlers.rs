//! User CRUD API handlers
//!
//! Thin wrappers over `UserService`; status mapping goes through
//! `common::error_response`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};

use super::dto::{LegacyIdQuery, UserDto, UserRequest};
use crate::application::UserService;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::{error_response, ApiError, ApiResponse, ValidatedJson};

/// Base path of the user resource
pub const USERS_PATH: &str = "/api/User";

/// User handler state, concrete over `UserRepository` for Axum compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<UserRepository>>,
}

#[utoipa::path(
    get,
    path = "/api/User",
    tag = "Users",
    responses(
        (status = 200, description = "All users, ordered by id", body = Vec<UserDto>)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.user_service.list().await.map_err(error_response)?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/User/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.get(id).await.map_err(error_response)?;
    Ok(Json(UserDto::from(user)))
}

/// `GET /api/User/id?id=N`: older clients pass the id as a query parameter.
#[utoipa::path(
    get,
    path = "/api/User/id",
    tag = "Users",
    params(LegacyIdQuery),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_user_by_query(
    state: State<UserHandlerState>,
    Query(query): Query<LegacyIdQuery>,
) -> Result<Json<UserDto>, ApiError> {
    get_user(state, Path(query.id)).await
}

#[utoipa::path(
    post,
    path = "/api/User",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserDto,
            headers(("Location" = String, description = "URL of the new user"))),
        (status = 400, description = "Malformed JSON or missing required field", body = ApiResponse<String>)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<UserDto>), ApiError> {
    let user = state
        .user_service
        .create(request.into())
        .await
        .map_err(error_response)?;

    let location = format!("{}/{}", USERS_PATH, user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserDto::from(user)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/User/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserRequest,
    responses(
        (status = 204, description = "User replaced"),
        (status = 400, description = "Invalid payload or path id does not match body id", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<StatusCode, ApiError> {
    let body_id = request.id;
    state
        .user_service
        .replace(id, body_id, request.into())
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/User/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .user_service
        .delete(id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
