use crate::middleware::validate::SimpleValidatedJson;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::{JobSeekerProfileCommandServiceTrait, JobSeekerProfileQueryServiceTrait},
    domain::{
        requests::{CreateJobSeekerProfileRequest, UpdateJobSeekerProfileRequest},
        responses::{ApiResponse, JobSeekerProfileResponse},
    },
    errors::{ErrorResponse, HttpError},
    service::JobSeekerProfileService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/job-seeker-profiles/user/{user_id}",
    tag = "JobSeekerProfile",
    params(("user_id" = i32, Path, description = "Owning user ID")),
    responses(
        (status = 200, description = "Profile, or null data when absent", body = ApiResponse<JobSeekerProfileResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_job_seeker_profile(
    Extension(service): Extension<JobSeekerProfileService>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_user_id(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/job-seeker-profiles",
    tag = "JobSeekerProfile",
    request_body = CreateJobSeekerProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = ApiResponse<JobSeekerProfileResponse>),
        (status = 400, description = "Unknown user or wrong role", body = ErrorResponse),
        (status = 409, description = "User already has a profile", body = ErrorResponse)
    )
)]
pub async fn create_job_seeker_profile(
    Extension(service): Extension<JobSeekerProfileService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateJobSeekerProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_profile(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/job-seeker-profiles/{id}",
    tag = "JobSeekerProfile",
    params(("id" = i32, Path, description = "Profile ID")),
    request_body = UpdateJobSeekerProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<JobSeekerProfileResponse>),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn update_job_seeker_profile(
    Extension(service): Extension<JobSeekerProfileService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateJobSeekerProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let response = service.command.update_profile(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn job_seeker_profile_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/job-seeker-profiles", post(create_job_seeker_profile))
        .route("/api/job-seeker-profiles/{id}", put(update_job_seeker_profile))
        .route(
            "/api/job-seeker-profiles/user/{user_id}",
            get(get_job_seeker_profile),
        )
        .layer(Extension(
            app_state.di_container.job_seeker_profile_service.clone(),
        ))
}
