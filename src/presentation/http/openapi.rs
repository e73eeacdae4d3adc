// src/presentation/http/openapi.rs
use crate::application::dto::{UserDto, UserPage};
use crate::presentation::http::error::ErrorBody;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Documentation-only mirror of the user payload: the handlers accept raw
/// JSON and shape-check it themselves, so this type exists to describe the
/// contract in the OpenAPI document.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayloadBody {
    pub first_name: String,
    pub last_name: String,
    /// Basic `local@domain.tld` shape; stored lowercased.
    pub email: String,
    /// ISO date, `YYYY-MM-DD`.
    pub dob: String,
    pub image_url: String,
    pub accepted_terms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::create_user,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::users::delete_user,
        super::routes::health,
        super::routes::welcome
    ),
    components(
        schemas(
            StatusResponse,
            WelcomeResponse,
            UserPayloadBody,
            UserDto,
            UserPage,
            ErrorBody
        )
    ),
    tags(
        (name = "Users", description = "User directory CRUD endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "User Directory API",
        description = "REST backend for the user directory",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI serves the raw document at `/openapi.json`; Redoc reuses the
/// same instance.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
