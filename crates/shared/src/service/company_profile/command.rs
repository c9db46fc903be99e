use crate::{
    abstract_trait::{
        CompanyProfileCommandServiceTrait, DynCompanyProfileCommandRepository,
        DynCompanyProfileQueryRepository, DynUserQueryRepository,
    },
    domain::{
        requests::{
            CreateCompanyProfileRequest, UpdateCompanyProfileRequest,
            UpdateCompanyVerificationRequest, UploadCompanyCredentialsRequest,
        },
        responses::{ApiResponse, CompanyProfileResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{UserRole, VerificationStatus},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct CompanyProfileCommandService {
    query: DynCompanyProfileQueryRepository,
    command: DynCompanyProfileCommandRepository,
    user_query: DynUserQueryRepository,
    metrics: Metrics,
}

impl CompanyProfileCommandService {
    pub async fn new(
        query: DynCompanyProfileQueryRepository,
        command: DynCompanyProfileCommandRepository,
        user_query: DynUserQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "company_profile_command_service");

        Self {
            query,
            command,
            user_query,
            metrics,
        }
    }

    async fn check_owner(&self, user_id: i32) -> Result<(), ServiceError> {
        let user = self.user_query.find_by_id(user_id).await?.ok_or_else(|| {
            ServiceError::ForeignKeyViolation(format!("user {user_id} does not exist"))
        })?;

        if user.role != UserRole::Company {
            warn!("⚠️ User {user_id} has role {}, not company", user.role);
            return Err(ServiceError::Validation(vec![format!(
                "user_id: user {user_id} is not a company"
            )]));
        }

        if self.query.find_by_user_id(user_id).await?.is_some() {
            return Err(ServiceError::ProfileExists(user_id));
        }

        Ok(())
    }
}

#[async_trait]
impl CompanyProfileCommandServiceTrait for CompanyProfileCommandService {
    async fn create_profile(
        &self,
        req: &CreateCompanyProfileRequest,
    ) -> Result<ApiResponse<CompanyProfileResponse>, ServiceError> {
        info!("🏗️ Creating company profile '{}'", req.company_name);

        let tracing_ctx = TracingContext::start("CreateCompanyProfile", Method::Post);

        if req.company_name.trim().is_empty() {
            tracing_ctx.complete_error(&self.metrics, "Company name is required");
            return Err(ServiceError::Validation(vec![
                "company_name: Company name is required".into(),
            ]));
        }

        if let Err(e) = self.check_owner(req.user_id).await {
            tracing_ctx.complete_error(&self.metrics, &e.to_string());
            return Err(e);
        }

        let req = req.clone().normalized();

        let profile = match self.command.create_profile(&req).await {
            Ok(profile) => profile,
            Err(RepositoryError::AlreadyExists(_)) => {
                tracing_ctx.complete_error(&self.metrics, "Profile already exists");
                return Err(ServiceError::ProfileExists(req.user_id));
            }
            Err(RepositoryError::ForeignKey(constraint)) => {
                tracing_ctx.complete_error(&self.metrics, "Owning user vanished");
                return Err(ServiceError::ForeignKeyViolation(constraint));
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        tracing_ctx.complete_success(&self.metrics, "Company profile created");

        Ok(ApiResponse::success(
            "Company profile created successfully",
            CompanyProfileResponse::from(profile),
        ))
    }

    async fn update_profile(
        &self,
        req: &UpdateCompanyProfileRequest,
    ) -> Result<ApiResponse<CompanyProfileResponse>, ServiceError> {
        info!("🔄 Updating company profile {}", req.id);

        let tracing_ctx = TracingContext::start("UpdateCompanyProfile", Method::Put);

        match self.command.update_profile(req).await {
            Ok(profile) => {
                tracing_ctx.complete_success(&self.metrics, "Company profile updated");
                Ok(ApiResponse::success(
                    "Company profile updated successfully",
                    CompanyProfileResponse::from(profile),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::missing_row(e, "Company profile", req.id))
            }
        }
    }

    async fn update_verification(
        &self,
        req: &UpdateCompanyVerificationRequest,
    ) -> Result<ApiResponse<CompanyProfileResponse>, ServiceError> {
        info!("🛡️ Setting company {} verification to {}", req.id, req.status);

        let tracing_ctx = TracingContext::start("UpdateCompanyVerification", Method::Put);

        if req.status == VerificationStatus::Pending {
            tracing_ctx.complete_error(&self.metrics, "Cannot reset verification to pending");
            return Err(ServiceError::Validation(vec![
                "status: Status must be verified or rejected".into(),
            ]));
        }

        match self.command.update_verification(req.id, req.status).await {
            Ok(profile) => {
                tracing_ctx.complete_success(&self.metrics, "Company verification updated");
                Ok(ApiResponse::success(
                    "Company verification updated successfully",
                    CompanyProfileResponse::from(profile),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::missing_row(e, "Company profile", req.id))
            }
        }
    }

    async fn upload_credentials(
        &self,
        req: &UploadCompanyCredentialsRequest,
    ) -> Result<ApiResponse<CompanyProfileResponse>, ServiceError> {
        info!("📎 Storing credentials for company {}", req.id);

        let tracing_ctx = TracingContext::start("UploadCompanyCredentials", Method::Put);

        if req.credentials_file_url.trim().is_empty() {
            tracing_ctx.complete_error(&self.metrics, "Empty credentials reference");
            return Err(ServiceError::Validation(vec![
                "credentials_file_url: credentials_file_url is required".into(),
            ]));
        }

        match self
            .command
            .update_credentials(req.id, &req.credentials_file_url)
            .await
        {
            Ok(profile) => {
                tracing_ctx.complete_success(&self.metrics, "Company credentials stored");
                Ok(ApiResponse::success(
                    "Company credentials uploaded successfully",
                    CompanyProfileResponse::from(profile),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::missing_row(e, "Company profile", req.id))
            }
        }
    }
}
