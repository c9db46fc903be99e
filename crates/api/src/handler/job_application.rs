use crate::middleware::validate::SimpleValidatedJson;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    abstract_trait::{JobApplicationCommandServiceTrait, JobApplicationQueryServiceTrait},
    domain::{
        requests::{CreateJobApplicationRequest, UpdateApplicationStatusRequest},
        responses::{
            ApiResponse, ApplicationWithDetailsResponse, ApplicationWithSeekerResponse,
            JobApplicationResponse,
        },
    },
    errors::{ErrorResponse, HttpError},
    service::JobApplicationService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/job-applications",
    tag = "JobApplication",
    responses(
        (status = 200, description = "Every application with posting, company and applicant", body = ApiResponse<Vec<ApplicationWithDetailsResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_all_applications(
    Extension(service): Extension<JobApplicationService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/job-applications",
    tag = "JobApplication",
    request_body = CreateJobApplicationRequest,
    responses(
        (status = 201, description = "Application submitted as pending", body = ApiResponse<JobApplicationResponse>),
        (status = 404, description = "Posting or job seeker not found", body = ErrorResponse),
        (status = 409, description = "Posting inactive or already applied", body = ErrorResponse)
    )
)]
pub async fn create_application(
    Extension(service): Extension<JobApplicationService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateJobApplicationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_application(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/job-applications/{id}/status",
    tag = "JobApplication",
    params(("id" = i32, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<JobApplicationResponse>),
        (status = 404, description = "Application not found", body = ErrorResponse),
        (status = 409, description = "Transition not allowed", body = ErrorResponse)
    )
)]
pub async fn update_application_status(
    Extension(service): Extension<JobApplicationService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateApplicationStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let response = service.command.update_status(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/job-applications/job/{job_posting_id}",
    tag = "JobApplication",
    params(("job_posting_id" = i32, Path, description = "Posting ID")),
    responses(
        (status = 200, description = "Applications for the posting", body = ApiResponse<Vec<JobApplicationResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_job_applications(
    Extension(service): Extension<JobApplicationService>,
    Path(job_posting_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_job_posting(job_posting_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/job-applications/job/{job_posting_id}/details",
    tag = "JobApplication",
    params(("job_posting_id" = i32, Path, description = "Posting ID")),
    responses(
        (status = 200, description = "Applications for the posting with applicant name and email", body = ApiResponse<Vec<ApplicationWithSeekerResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_job_applications_with_details(
    Extension(service): Extension<JobApplicationService>,
    Path(job_posting_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .query
        .find_by_job_posting_with_seeker(job_posting_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/job-applications/seeker/{job_seeker_id}",
    tag = "JobApplication",
    params(("job_seeker_id" = i32, Path, description = "Job seeker profile ID")),
    responses(
        (status = 200, description = "The seeker's applications, newest first", body = ApiResponse<Vec<JobApplicationResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user_applications(
    Extension(service): Extension<JobApplicationService>,
    Path(job_seeker_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_job_seeker(job_seeker_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn job_application_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/job-applications",
            get(get_all_applications).post(create_application),
        )
        .route(
            "/api/job-applications/{id}/status",
            put(update_application_status),
        )
        .route(
            "/api/job-applications/job/{job_posting_id}",
            get(get_job_applications),
        )
        .route(
            "/api/job-applications/job/{job_posting_id}/details",
            get(get_job_applications_with_details),
        )
        .route(
            "/api/job-applications/seeker/{job_seeker_id}",
            get(get_user_applications),
        )
        .layer(Extension(
            app_state.di_container.job_application_service.clone(),
        ))
}
