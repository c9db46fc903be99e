use crate::{
    domain::requests::{
        CreateJobPostingRequest, SearchJobPostingsRequest, UpdateJobPostingRequest,
    },
    errors::RepositoryError,
    model::JobPosting,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynJobPostingQueryRepository = Arc<dyn JobPostingQueryRepositoryTrait + Send + Sync>;
pub type DynJobPostingCommandRepository = Arc<dyn JobPostingCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait JobPostingQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<JobPosting>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<JobPosting>, RepositoryError>;
    async fn find_by_company(&self, company_id: i32) -> Result<Vec<JobPosting>, RepositoryError>;
    /// Active postings only, most recent first.
    async fn search(
        &self,
        req: &SearchJobPostingsRequest,
    ) -> Result<Vec<JobPosting>, RepositoryError>;
}

#[async_trait]
pub trait JobPostingCommandRepositoryTrait {
    async fn create_job_posting(
        &self,
        req: &CreateJobPostingRequest,
    ) -> Result<JobPosting, RepositoryError>;
    async fn update_job_posting(
        &self,
        req: &UpdateJobPostingRequest,
    ) -> Result<JobPosting, RepositoryError>;
    async fn delete_job_posting(&self, id: i32) -> Result<bool, RepositoryError>;
}
