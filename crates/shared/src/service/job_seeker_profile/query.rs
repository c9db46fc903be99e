use crate::{
    abstract_trait::{DynJobSeekerProfileQueryRepository, JobSeekerProfileQueryServiceTrait},
    domain::responses::{ApiResponse, JobSeekerProfileResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct JobSeekerProfileQueryService {
    query: DynJobSeekerProfileQueryRepository,
    metrics: Metrics,
}

impl JobSeekerProfileQueryService {
    pub async fn new(
        query: DynJobSeekerProfileQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "job_seeker_profile_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl JobSeekerProfileQueryServiceTrait for JobSeekerProfileQueryService {
    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Option<JobSeekerProfileResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("GetJobSeekerProfile", Method::Get);

        match self.query.find_by_user_id(user_id).await {
            Ok(profile) => {
                tracing_ctx.complete_success(&self.metrics, "Job seeker profile fetched");
                Ok(ApiResponse::success(
                    "Job seeker profile retrieved successfully",
                    profile.map(JobSeekerProfileResponse::from),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
