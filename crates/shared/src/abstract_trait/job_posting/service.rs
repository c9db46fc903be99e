use crate::{
    domain::{
        requests::{CreateJobPostingRequest, SearchJobPostingsRequest, UpdateJobPostingRequest},
        responses::{ApiResponse, JobPostingResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynJobPostingQueryService = Arc<dyn JobPostingQueryServiceTrait + Send + Sync>;
pub type DynJobPostingCommandService = Arc<dyn JobPostingCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait JobPostingQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<JobPostingResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<Option<JobPostingResponse>>, ServiceError>;
    async fn find_by_company(
        &self,
        company_id: i32,
    ) -> Result<ApiResponse<Vec<JobPostingResponse>>, ServiceError>;
    async fn search(
        &self,
        req: &SearchJobPostingsRequest,
    ) -> Result<ApiResponse<Vec<JobPostingResponse>>, ServiceError>;
}

#[async_trait]
pub trait JobPostingCommandServiceTrait {
    async fn create_job_posting(
        &self,
        req: &CreateJobPostingRequest,
    ) -> Result<ApiResponse<JobPostingResponse>, ServiceError>;
    async fn update_job_posting(
        &self,
        req: &UpdateJobPostingRequest,
    ) -> Result<ApiResponse<JobPostingResponse>, ServiceError>;
    async fn delete_job_posting(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError>;
}
