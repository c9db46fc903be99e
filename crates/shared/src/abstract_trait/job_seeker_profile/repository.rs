use crate::{
    domain::requests::{CreateJobSeekerProfileRequest, UpdateJobSeekerProfileRequest},
    errors::RepositoryError,
    model::JobSeekerProfile,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynJobSeekerProfileQueryRepository =
    Arc<dyn JobSeekerProfileQueryRepositoryTrait + Send + Sync>;
pub type DynJobSeekerProfileCommandRepository =
    Arc<dyn JobSeekerProfileCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait JobSeekerProfileQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<JobSeekerProfile>, RepositoryError>;
    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<JobSeekerProfile>, RepositoryError>;
}

#[async_trait]
pub trait JobSeekerProfileCommandRepositoryTrait {
    async fn create_profile(
        &self,
        req: &CreateJobSeekerProfileRequest,
    ) -> Result<JobSeekerProfile, RepositoryError>;
    async fn update_profile(
        &self,
        req: &UpdateJobSeekerProfileRequest,
    ) -> Result<JobSeekerProfile, RepositoryError>;
}
