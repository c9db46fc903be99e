use crate::{
    abstract_trait::{CompanyProfileQueryServiceTrait, DynCompanyProfileQueryRepository},
    domain::responses::{ApiResponse, CompanyProfileResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct CompanyProfileQueryService {
    query: DynCompanyProfileQueryRepository,
    metrics: Metrics,
}

impl CompanyProfileQueryService {
    pub async fn new(
        query: DynCompanyProfileQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "company_profile_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl CompanyProfileQueryServiceTrait for CompanyProfileQueryService {
    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Option<CompanyProfileResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("GetCompanyProfile", Method::Get);

        match self.query.find_by_user_id(user_id).await {
            Ok(profile) => {
                tracing_ctx.complete_success(&self.metrics, "Company profile fetched");
                Ok(ApiResponse::success(
                    "Company profile retrieved successfully",
                    profile.map(CompanyProfileResponse::from),
                ))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
