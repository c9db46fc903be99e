use crate::{
    domain::{
        requests::{CreateJobSeekerProfileRequest, UpdateJobSeekerProfileRequest},
        responses::{ApiResponse, JobSeekerProfileResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynJobSeekerProfileQueryService =
    Arc<dyn JobSeekerProfileQueryServiceTrait + Send + Sync>;
pub type DynJobSeekerProfileCommandService =
    Arc<dyn JobSeekerProfileCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait JobSeekerProfileQueryServiceTrait {
    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Option<JobSeekerProfileResponse>>, ServiceError>;
}

#[async_trait]
pub trait JobSeekerProfileCommandServiceTrait {
    async fn create_profile(
        &self,
        req: &CreateJobSeekerProfileRequest,
    ) -> Result<ApiResponse<JobSeekerProfileResponse>, ServiceError>;
    async fn update_profile(
        &self,
        req: &UpdateJobSeekerProfileRequest,
    ) -> Result<ApiResponse<JobSeekerProfileResponse>, ServiceError>;
}
