use crate::middleware::validate::SimpleValidatedJson;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::{CompanyProfileCommandServiceTrait, CompanyProfileQueryServiceTrait},
    domain::{
        requests::{
            CreateCompanyProfileRequest, UpdateCompanyProfileRequest,
            UpdateCompanyVerificationRequest, UploadCompanyCredentialsRequest,
        },
        responses::{ApiResponse, CompanyProfileResponse},
    },
    errors::{ErrorResponse, HttpError},
    service::CompanyProfileService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/company-profiles/user/{user_id}",
    tag = "CompanyProfile",
    params(("user_id" = i32, Path, description = "Owning user ID")),
    responses(
        (status = 200, description = "Profile, or null data when absent", body = ApiResponse<CompanyProfileResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_company_profile(
    Extension(service): Extension<CompanyProfileService>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_user_id(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/company-profiles",
    tag = "CompanyProfile",
    request_body = CreateCompanyProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = ApiResponse<CompanyProfileResponse>),
        (status = 400, description = "Unknown user, wrong role or missing name", body = ErrorResponse),
        (status = 409, description = "User already has a profile", body = ErrorResponse)
    )
)]
pub async fn create_company_profile(
    Extension(service): Extension<CompanyProfileService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCompanyProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_profile(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/company-profiles/{id}",
    tag = "CompanyProfile",
    params(("id" = i32, Path, description = "Profile ID")),
    request_body = UpdateCompanyProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<CompanyProfileResponse>),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn update_company_profile(
    Extension(service): Extension<CompanyProfileService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateCompanyProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let response = service.command.update_profile(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/company-profiles/{id}/verification",
    tag = "CompanyProfile",
    params(("id" = i32, Path, description = "Profile ID")),
    request_body = UpdateCompanyVerificationRequest,
    responses(
        (status = 200, description = "Verification decided", body = ApiResponse<CompanyProfileResponse>),
        (status = 400, description = "Status must be verified or rejected", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn update_company_verification(
    Extension(service): Extension<CompanyProfileService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateCompanyVerificationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let response = service.command.update_verification(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/company-profiles/{id}/credentials",
    tag = "CompanyProfile",
    params(("id" = i32, Path, description = "Profile ID")),
    request_body = UploadCompanyCredentialsRequest,
    responses(
        (status = 200, description = "Credentials reference stored", body = ApiResponse<CompanyProfileResponse>),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn upload_company_credentials(
    Extension(service): Extension<CompanyProfileService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UploadCompanyCredentialsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let response = service.command.upload_credentials(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn company_profile_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/company-profiles", post(create_company_profile))
        .route("/api/company-profiles/{id}", put(update_company_profile))
        .route(
            "/api/company-profiles/{id}/verification",
            put(update_company_verification),
        )
        .route(
            "/api/company-profiles/{id}/credentials",
            put(upload_company_credentials),
        )
        .route(
            "/api/company-profiles/user/{user_id}",
            get(get_company_profile),
        )
        .layer(Extension(
            app_state.di_container.company_profile_service.clone(),
        ))
}
