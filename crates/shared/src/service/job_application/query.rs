use crate::{
    abstract_trait::{DynJobApplicationQueryRepository, JobApplicationQueryServiceTrait},
    domain::responses::{
        ApiResponse, ApplicationWithDetailsResponse, ApplicationWithSeekerResponse,
        JobApplicationResponse,
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct JobApplicationQueryService {
    query: DynJobApplicationQueryRepository,
    metrics: Metrics,
}

impl JobApplicationQueryService {
    pub async fn new(
        query: DynJobApplicationQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "job_application_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl JobApplicationQueryServiceTrait for JobApplicationQueryService {
    async fn find_by_job_posting(
        &self,
        job_posting_id: i32,
    ) -> Result<ApiResponse<Vec<JobApplicationResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("GetJobApplicationsForJob", Method::Get);

        match self.query.find_by_job_posting(job_posting_id).await {
            Ok(applications) => {
                tracing_ctx.complete_success(&self.metrics, "Applications fetched");
                Ok(ApiResponse::success(
                    "Job applications retrieved successfully",
                    applications
                        .into_iter()
                        .map(JobApplicationResponse::from)
                        .collect(),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_job_posting_with_seeker(
        &self,
        job_posting_id: i32,
    ) -> Result<ApiResponse<Vec<ApplicationWithSeekerResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("GetJobApplicationsWithDetails", Method::Get);

        match self
            .query
            .find_by_job_posting_with_seeker(job_posting_id)
            .await
        {
            Ok(rows) => {
                tracing_ctx.complete_success(&self.metrics, "Applicants fetched");
                Ok(ApiResponse::success(
                    "Job applications retrieved successfully",
                    rows.into_iter()
                        .map(ApplicationWithSeekerResponse::from)
                        .collect(),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_job_seeker(
        &self,
        job_seeker_id: i32,
    ) -> Result<ApiResponse<Vec<JobApplicationResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("GetUserApplications", Method::Get);

        match self.query.find_by_job_seeker(job_seeker_id).await {
            Ok(applications) => {
                tracing_ctx.complete_success(&self.metrics, "Seeker applications fetched");
                Ok(ApiResponse::success(
                    "Job applications retrieved successfully",
                    applications
                        .into_iter()
                        .map(JobApplicationResponse::from)
                        .collect(),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_all(
        &self,
    ) -> Result<ApiResponse<Vec<ApplicationWithDetailsResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("GetAllApplications", Method::Get);

        match self.query.find_all_with_details().await {
            Ok(rows) => {
                tracing_ctx.complete_success(&self.metrics, "All applications fetched");
                Ok(ApiResponse::success(
                    "Job applications retrieved successfully",
                    rows.into_iter()
                        .map(ApplicationWithDetailsResponse::from)
                        .collect(),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
