use crate::middleware::validate::{SimpleValidatedJson, SimpleValidatedQuery};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{JobPostingCommandServiceTrait, JobPostingQueryServiceTrait},
    domain::{
        requests::{CreateJobPostingRequest, SearchJobPostingsRequest, UpdateJobPostingRequest},
        responses::{ApiResponse, JobPostingResponse},
    },
    errors::{ErrorResponse, HttpError},
    service::JobPostingService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/job-postings",
    tag = "JobPosting",
    responses(
        (status = 200, description = "Every posting, newest first", body = ApiResponse<Vec<JobPostingResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_job_postings(
    Extension(service): Extension<JobPostingService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/job-postings/search",
    tag = "JobPosting",
    params(SearchJobPostingsRequest),
    responses(
        (status = 200, description = "Active postings matching every filter", body = ApiResponse<Vec<JobPostingResponse>>),
        (status = 400, description = "Invalid paging parameters", body = ErrorResponse)
    )
)]
pub async fn search_job_postings(
    Extension(service): Extension<JobPostingService>,
    SimpleValidatedQuery(params): SimpleValidatedQuery<SearchJobPostingsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.search(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/job-postings/company/{company_id}",
    tag = "JobPosting",
    params(("company_id" = i32, Path, description = "Company profile ID")),
    responses(
        (status = 200, description = "The company's postings, newest first", body = ApiResponse<Vec<JobPostingResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_company_job_postings(
    Extension(service): Extension<JobPostingService>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_company(company_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/job-postings/{id}",
    tag = "JobPosting",
    params(("id" = i32, Path, description = "Posting ID")),
    responses(
        (status = 200, description = "Posting, or null data when absent", body = ApiResponse<JobPostingResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_job_posting(
    Extension(service): Extension<JobPostingService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/job-postings",
    tag = "JobPosting",
    request_body = CreateJobPostingRequest,
    responses(
        (status = 201, description = "Posting created and active", body = ApiResponse<JobPostingResponse>),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Company profile not found", body = ErrorResponse)
    )
)]
pub async fn create_job_posting(
    Extension(service): Extension<JobPostingService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateJobPostingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_job_posting(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/job-postings/{id}",
    tag = "JobPosting",
    params(("id" = i32, Path, description = "Posting ID")),
    request_body = UpdateJobPostingRequest,
    responses(
        (status = 200, description = "Posting updated", body = ApiResponse<JobPostingResponse>),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Posting not found", body = ErrorResponse)
    )
)]
pub async fn update_job_posting(
    Extension(service): Extension<JobPostingService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateJobPostingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let response = service.command.update_job_posting(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/job-postings/{id}",
    tag = "JobPosting",
    params(("id" = i32, Path, description = "Posting ID")),
    responses(
        (status = 200, description = "Whether a posting was deleted", body = ApiResponse<bool>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_job_posting(
    Extension(service): Extension<JobPostingService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.delete_job_posting(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn job_posting_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/job-postings",
            get(get_job_postings).post(create_job_posting),
        )
        .route("/api/job-postings/search", get(search_job_postings))
        .route(
            "/api/job-postings/company/{company_id}",
            get(get_company_job_postings),
        )
        .route(
            "/api/job-postings/{id}",
            get(get_job_posting)
                .put(update_job_posting)
                .delete(delete_job_posting),
        )
        .layer(Extension(app_state.di_container.job_posting_service.clone()))
}
