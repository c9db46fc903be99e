use crate::{
    abstract_trait::{DynJobPostingQueryRepository, JobPostingQueryServiceTrait},
    domain::{
        requests::SearchJobPostingsRequest,
        responses::{ApiResponse, JobPostingResponse},
    },
    errors::ServiceError,
    model::JobPosting,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use validator::Validate;

pub struct JobPostingQueryService {
    query: DynJobPostingQueryRepository,
    metrics: Metrics,
}

impl JobPostingQueryService {
    pub async fn new(query: DynJobPostingQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "job_posting_query_service");

        Self { query, metrics }
    }
}

fn to_responses(postings: Vec<JobPosting>) -> Vec<JobPostingResponse> {
    postings.into_iter().map(JobPostingResponse::from).collect()
}

#[async_trait]
impl JobPostingQueryServiceTrait for JobPostingQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<JobPostingResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("GetAllJobPostings", Method::Get);

        match self.query.find_all().await {
            Ok(postings) => {
                tracing_ctx.complete_success(&self.metrics, "Job postings fetched");
                Ok(ApiResponse::success(
                    "Job postings retrieved successfully",
                    to_responses(postings),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<Option<JobPostingResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("GetJobPosting", Method::Get);

        match self.query.find_by_id(id).await {
            Ok(posting) => {
                tracing_ctx.complete_success(&self.metrics, "Job posting fetched");
                Ok(ApiResponse::success(
                    "Job posting retrieved successfully",
                    posting.map(JobPostingResponse::from),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_company(
        &self,
        company_id: i32,
    ) -> Result<ApiResponse<Vec<JobPostingResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("GetCompanyJobPostings", Method::Get);

        match self.query.find_by_company(company_id).await {
            Ok(postings) => {
                tracing_ctx.complete_success(&self.metrics, "Company job postings fetched");
                Ok(ApiResponse::success(
                    "Company job postings retrieved successfully",
                    to_responses(postings),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn search(
        &self,
        req: &SearchJobPostingsRequest,
    ) -> Result<ApiResponse<Vec<JobPostingResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("SearchJobPostings", Method::Get);

        if let Err(errors) = req.validate() {
            tracing_ctx.complete_error(&self.metrics, "Invalid search parameters");
            return Err(ServiceError::from(errors));
        }

        match self.query.search(req).await {
            Ok(postings) => {
                tracing_ctx.complete_success(&self.metrics, "Job posting search done");
                Ok(ApiResponse::success(
                    "Job postings retrieved successfully",
                    to_responses(postings),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
