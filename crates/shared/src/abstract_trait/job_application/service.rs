use crate::{
    domain::{
        requests::{CreateJobApplicationRequest, UpdateApplicationStatusRequest},
        responses::{
            ApiResponse, ApplicationWithDetailsResponse, ApplicationWithSeekerResponse,
            JobApplicationResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynJobApplicationQueryService = Arc<dyn JobApplicationQueryServiceTrait + Send + Sync>;
pub type DynJobApplicationCommandService =
    Arc<dyn JobApplicationCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait JobApplicationQueryServiceTrait {
    async fn find_by_job_posting(
        &self,
        job_posting_id: i32,
    ) -> Result<ApiResponse<Vec<JobApplicationResponse>>, ServiceError>;
    async fn find_by_job_posting_with_seeker(
        &self,
        job_posting_id: i32,
    ) -> Result<ApiResponse<Vec<ApplicationWithSeekerResponse>>, ServiceError>;
    async fn find_by_job_seeker(
        &self,
        job_seeker_id: i32,
    ) -> Result<ApiResponse<Vec<JobApplicationResponse>>, ServiceError>;
    async fn find_all(&self)
    -> Result<ApiResponse<Vec<ApplicationWithDetailsResponse>>, ServiceError>;
}

#[async_trait]
pub trait JobApplicationCommandServiceTrait {
    async fn create_application(
        &self,
        req: &CreateJobApplicationRequest,
    ) -> Result<ApiResponse<JobApplicationResponse>, ServiceError>;
    async fn update_status(
        &self,
        req: &UpdateApplicationStatusRequest,
    ) -> Result<ApiResponse<JobApplicationResponse>, ServiceError>;
}
