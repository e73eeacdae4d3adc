// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{CreateUserCommand, DeleteUserCommand, UpdateUserCommand},
    dto::{UserDto, UserPage},
    error::ApplicationError,
    queries::users::{GetUserByIdQuery, ListUsersQuery},
};
use crate::domain::user::UserId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// 1-based page number; values below 1 are floored to 1.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size; clamped to the configured maximum.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Case-insensitive substring filter on first name, last name, or email.
    #[serde(default)]
    pub q: Option<String>,
}

/// Route-parameter parsing happens before anything else so malformed ids
/// never reach storage.
fn parse_id(raw: &str) -> HttpResult<UserId> {
    UserId::parse_param(raw).map_err(|err| HttpError::from_error(ApplicationError::from(err)))
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of users with pagination metadata.", body = UserPage),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListUsersParams>,
) -> HttpResult<Json<UserPage>> {
    state
        .services
        .user_queries
        .list_users(ListUsersQuery {
            page: params.page,
            limit: params.limit,
            q: params.q,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = crate::presentation::http::openapi::UserPayloadBody,
    responses(
        (status = 201, description = "User created; the id is storage-assigned.", body = UserDto),
        (status = 400, description = "Invalid payload or duplicate email.", body = crate::presentation::http::error::ErrorBody),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<serde_json::Value>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let user = state
        .services
        .user_commands
        .create_user(CreateUserCommand { payload })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id, a non-negative integer.")),
    responses(
        (status = 200, description = "The requested user.", body = UserDto),
        (status = 400, description = "Malformed id.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No user with this id.", body = crate::presentation::http::error::ErrorBody),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<UserDto>> {
    let id = parse_id(&id)?;

    state
        .services
        .user_queries
        .get_user_by_id(GetUserByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id, a non-negative integer.")),
    request_body = crate::presentation::http::openapi::UserPayloadBody,
    responses(
        (status = 200, description = "The updated user.", body = UserDto),
        (status = 400, description = "Malformed id, invalid payload, or duplicate email.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No user with this id.", body = crate::presentation::http::error::ErrorBody),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> HttpResult<Json<UserDto>> {
    let id = parse_id(&id)?;

    state
        .services
        .user_commands
        .update_user(UpdateUserCommand { id, payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id, a non-negative integer.")),
    responses(
        (status = 204, description = "User deleted."),
        (status = 400, description = "Malformed id.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No user with this id.", body = crate::presentation::http::error::ErrorBody),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id)?;

    state
        .services
        .user_commands
        .delete_user(DeleteUserCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
