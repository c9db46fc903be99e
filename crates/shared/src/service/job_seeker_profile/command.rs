use crate::{
    abstract_trait::{
        DynJobSeekerProfileCommandRepository, DynJobSeekerProfileQueryRepository,
        DynUserQueryRepository, JobSeekerProfileCommandServiceTrait,
    },
    domain::{
        requests::{CreateJobSeekerProfileRequest, UpdateJobSeekerProfileRequest},
        responses::{ApiResponse, JobSeekerProfileResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::UserRole,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct JobSeekerProfileCommandService {
    query: DynJobSeekerProfileQueryRepository,
    command: DynJobSeekerProfileCommandRepository,
    user_query: DynUserQueryRepository,
    metrics: Metrics,
}

impl JobSeekerProfileCommandService {
    pub async fn new(
        query: DynJobSeekerProfileQueryRepository,
        command: DynJobSeekerProfileCommandRepository,
        user_query: DynUserQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "job_seeker_profile_command_service");

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

        if user.role != UserRole::JobSeeker {
            warn!("⚠️ User {user_id} has role {}, not job_seeker", user.role);
            return Err(ServiceError::Validation(vec![format!(
                "user_id: user {user_id} is not a job seeker"
            )]));
        }

        if self.query.find_by_user_id(user_id).await?.is_some() {
            return Err(ServiceError::ProfileExists(user_id));
        }

        Ok(())
    }
}

#[async_trait]
impl JobSeekerProfileCommandServiceTrait for JobSeekerProfileCommandService {
    async fn create_profile(
        &self,
        req: &CreateJobSeekerProfileRequest,
    ) -> Result<ApiResponse<JobSeekerProfileResponse>, ServiceError> {
        info!("🏗️ Creating job seeker profile for user {}", req.user_id);

        let tracing_ctx = TracingContext::start("CreateJobSeekerProfile", Method::Post);

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

        tracing_ctx.complete_success(&self.metrics, "Job seeker profile created");

        Ok(ApiResponse::success(
            "Job seeker profile created successfully",
            JobSeekerProfileResponse::from(profile),
        ))
    }

    async fn update_profile(
        &self,
        req: &UpdateJobSeekerProfileRequest,
    ) -> Result<ApiResponse<JobSeekerProfileResponse>, ServiceError> {
        info!("🔄 Updating job seeker profile {}", req.id);

        let tracing_ctx = TracingContext::start("UpdateJobSeekerProfile", Method::Put);

        match self.command.update_profile(req).await {
            Ok(profile) => {
                tracing_ctx.complete_success(&self.metrics, "Job seeker profile updated");
                Ok(ApiResponse::success(
                    "Job seeker profile updated successfully",
                    JobSeekerProfileResponse::from(profile),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::missing_row(e, "Job seeker profile", req.id))
            }
        }
    }
}
