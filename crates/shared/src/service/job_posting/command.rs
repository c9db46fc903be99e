use crate::{
    abstract_trait::{
        DynCompanyProfileQueryRepository, DynJobPostingCommandRepository,
        JobPostingCommandServiceTrait,
    },
    domain::{
        requests::{CreateJobPostingRequest, UpdateJobPostingRequest, blank_to_none},
        responses::{ApiResponse, JobPostingResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct JobPostingCommandService {
    command: DynJobPostingCommandRepository,
    company_query: DynCompanyProfileQueryRepository,
    metrics: Metrics,
}

impl JobPostingCommandService {
    pub async fn new(
        command: DynJobPostingCommandRepository,
        company_query: DynCompanyProfileQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "job_posting_command_service");

        Self {
            command,
            company_query,
            metrics,
        }
    }
}

#[async_trait]
impl JobPostingCommandServiceTrait for JobPostingCommandService {
    async fn create_job_posting(
        &self,
        req: &CreateJobPostingRequest,
    ) -> Result<ApiResponse<JobPostingResponse>, ServiceError> {
        info!(
            "🏗️ Creating {} posting '{}' for company {}",
            req.job_type, req.title, req.company_id
        );

        let tracing_ctx = TracingContext::start("CreateJobPosting", Method::Post);

        match self.company_query.find_by_id(req.company_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                warn!("⚠️ Company {} does not exist", req.company_id);
                tracing_ctx.complete_error(&self.metrics, "Company not found");
                return Err(ServiceError::not_found("Company profile", req.company_id));
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        }

        let create_req = CreateJobPostingRequest {
            location: blank_to_none(req.location.clone()),
            requirements: blank_to_none(req.requirements.clone()),
            duration: blank_to_none(req.duration.clone()),
            compensation: blank_to_none(req.compensation.clone()),
            ..req.clone()
        };

        let posting = match self.command.create_job_posting(&create_req).await {
            Ok(posting) => posting,
            Err(RepositoryError::ForeignKey(_)) => {
                tracing_ctx.complete_error(&self.metrics, "Company not found");
                return Err(ServiceError::not_found("Company profile", req.company_id));
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        tracing_ctx.complete_success(&self.metrics, "Job posting created");

        Ok(ApiResponse::success(
            "Job posting created successfully",
            JobPostingResponse::from(posting),
        ))
    }

    async fn update_job_posting(
        &self,
        req: &UpdateJobPostingRequest,
    ) -> Result<ApiResponse<JobPostingResponse>, ServiceError> {
        info!("🔄 Updating job posting {}", req.id);

        let tracing_ctx = TracingContext::start("UpdateJobPosting", Method::Put);

        match self.command.update_job_posting(req).await {
            Ok(posting) => {
                tracing_ctx.complete_success(&self.metrics, "Job posting updated");
                Ok(ApiResponse::success(
                    "Job posting updated successfully",
                    JobPostingResponse::from(posting),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::missing_row(e, "Job posting", req.id))
            }
        }
    }

    async fn delete_job_posting(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🗑️ Deleting job posting {id}");

        let tracing_ctx = TracingContext::start("DeleteJobPosting", Method::Delete);

        match self.command.delete_job_posting(id).await {
            Ok(deleted) => {
                tracing_ctx.complete_success(&self.metrics, "Job posting delete done");
                let message = if deleted {
                    "Job posting deleted successfully"
                } else {
                    "Job posting not found"
                };
                Ok(ApiResponse::success(message, deleted))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
