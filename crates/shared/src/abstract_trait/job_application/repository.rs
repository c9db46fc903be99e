use crate::{
    domain::requests::CreateJobApplicationRequest,
    errors::RepositoryError,
    model::{ApplicationStatus, ApplicationWithDetails, ApplicationWithSeeker, JobApplication},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynJobApplicationQueryRepository =
    Arc<dyn JobApplicationQueryRepositoryTrait + Send + Sync>;
pub type DynJobApplicationCommandRepository =
    Arc<dyn JobApplicationCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait JobApplicationQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<JobApplication>, RepositoryError>;
    async fn exists(
        &self,
        job_posting_id: i32,
        job_seeker_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn find_by_job_posting(
        &self,
        job_posting_id: i32,
    ) -> Result<Vec<JobApplication>, RepositoryError>;
    async fn find_by_job_posting_with_seeker(
        &self,
        job_posting_id: i32,
    ) -> Result<Vec<ApplicationWithSeeker>, RepositoryError>;
    async fn find_by_job_seeker(
        &self,
        job_seeker_id: i32,
    ) -> Result<Vec<JobApplication>, RepositoryError>;
    async fn find_all_with_details(&self) -> Result<Vec<ApplicationWithDetails>, RepositoryError>;
}

#[async_trait]
pub trait JobApplicationCommandRepositoryTrait {
    async fn create_application(
        &self,
        req: &CreateJobApplicationRequest,
    ) -> Result<JobApplication, RepositoryError>;
    /// Writes `to` only while the row still holds `from`; `None` when the row
    /// is gone or another writer changed its status first.
    async fn update_status(
        &self,
        id: i32,
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) -> Result<Option<JobApplication>, RepositoryError>;
}
