use crate::{
    abstract_trait::{
        DynJobApplicationCommandRepository, DynJobApplicationQueryRepository,
        DynJobPostingQueryRepository, DynJobSeekerProfileQueryRepository,
        JobApplicationCommandServiceTrait,
    },
    domain::{
        requests::{CreateJobApplicationRequest, UpdateApplicationStatusRequest},
        responses::{ApiResponse, JobApplicationResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::JobApplication,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

const STATUS_WRITE_ATTEMPTS: usize = 3;

pub struct JobApplicationCommandService {
    query: DynJobApplicationQueryRepository,
    command: DynJobApplicationCommandRepository,
    posting_query: DynJobPostingQueryRepository,
    seeker_query: DynJobSeekerProfileQueryRepository,
    metrics: Metrics,
}

impl JobApplicationCommandService {
    pub async fn new(
        query: DynJobApplicationQueryRepository,
        command: DynJobApplicationCommandRepository,
        posting_query: DynJobPostingQueryRepository,
        seeker_query: DynJobSeekerProfileQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "job_application_command_service");

        Self {
            query,
            command,
            posting_query,
            seeker_query,
            metrics,
        }
    }

    /// Checks run in a fixed order so the error names the first thing wrong:
    /// posting exists, posting is active, seeker exists, no prior application.
    async fn check_can_apply(&self, req: &CreateJobApplicationRequest) -> Result<(), ServiceError> {
        let posting = self
            .posting_query
            .find_by_id(req.job_posting_id)
            .await?
            .ok_or(ServiceError::PostingNotFound)?;

        if !posting.is_active {
            return Err(ServiceError::PostingInactive);
        }

        if self
            .seeker_query
            .find_by_id(req.job_seeker_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::SeekerNotFound);
        }

        if self
            .query
            .exists(req.job_posting_id, req.job_seeker_id)
            .await?
        {
            return Err(ServiceError::DuplicateApplication);
        }

        Ok(())
    }

    /// Reads the stored status, checks the move, then writes it only if the
    /// status is still the one that was checked. A concurrent writer makes the
    /// write miss, and the move is judged again against the new status.
    async fn apply_transition(
        &self,
        req: &UpdateApplicationStatusRequest,
    ) -> Result<JobApplication, ServiceError> {
        let mut last_seen = None;

        for _ in 0..STATUS_WRITE_ATTEMPTS {
            let current = self
                .query
                .find_by_id(req.id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Job application", req.id))?;

            if !current.status.can_transition_to(req.status) {
                return Err(ServiceError::InvalidStatusTransition {
                    from: current.status,
                    to: req.status,
                });
            }

            if let Some(application) = self
                .command
                .update_status(req.id, current.status, req.status)
                .await?
            {
                return Ok(application);
            }

            last_seen = Some(current.status);
        }

        Err(ServiceError::InvalidStatusTransition {
            from: last_seen.unwrap_or_default(),
            to: req.status,
        })
    }
}

#[async_trait]
impl JobApplicationCommandServiceTrait for JobApplicationCommandService {
    async fn create_application(
        &self,
        req: &CreateJobApplicationRequest,
    ) -> Result<ApiResponse<JobApplicationResponse>, ServiceError> {
        info!(
            "📨 Seeker {} applying to posting {}",
            req.job_seeker_id, req.job_posting_id
        );

        let tracing_ctx = TracingContext::start("CreateJobApplication", Method::Post);

        if let Err(e) = self.check_can_apply(req).await {
            warn!("⚠️ Application rejected: {e}");
            tracing_ctx.complete_error(&self.metrics, &e.to_string());
            return Err(e);
        }

        let req = req.clone().normalized();

        let application = match self.command.create_application(&req).await {
            Ok(application) => application,
            Err(RepositoryError::AlreadyExists(_)) => {
                tracing_ctx.complete_error(&self.metrics, "Duplicate application");
                return Err(ServiceError::DuplicateApplication);
            }
            Err(RepositoryError::ForeignKey(constraint)) => {
                tracing_ctx.complete_error(&self.metrics, "Posting or seeker vanished");
                return Err(ServiceError::ForeignKeyViolation(constraint));
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        tracing_ctx.complete_success(&self.metrics, "Application submitted");

        Ok(ApiResponse::success(
            "Application submitted successfully",
            JobApplicationResponse::from(application),
        ))
    }

    async fn update_status(
        &self,
        req: &UpdateApplicationStatusRequest,
    ) -> Result<ApiResponse<JobApplicationResponse>, ServiceError> {
        info!("🔄 Setting application {} to {}", req.id, req.status);

        let tracing_ctx = TracingContext::start("UpdateApplicationStatus", Method::Put);

        match self.apply_transition(req).await {
            Ok(application) => {
                tracing_ctx.complete_success(&self.metrics, "Application status updated");
                Ok(ApiResponse::success(
                    "Application status updated successfully",
                    JobApplicationResponse::from(application),
                ))
            }
            Err(e) => {
                warn!("⚠️ Status change for application {} refused: {e}", req.id);
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(e)
            }
        }
    }
}
