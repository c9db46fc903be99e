use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{UserCommandServiceTrait, UserQueryServiceTrait},
    domain::responses::{ApiResponse, UserResponse},
    errors::{ErrorResponse, HttpError},
    service::UserService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "User",
    responses(
        (status = 200, description = "Every user, ordered by id", body = ApiResponse<Vec<UserResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_users(
    Extension(service): Extension<UserService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User, or null data when absent", body = ApiResponse<UserResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user(
    Extension(service): Extension<UserService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Whether a user was deleted", body = ApiResponse<bool>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    Extension(service): Extension<UserService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.delete_user(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users", get(get_users))
        .route("/api/users/{id}", get(get_user).delete(delete_user))
        .layer(Extension(app_state.di_container.user_service.clone()))
}
