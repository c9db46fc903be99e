use crate::{
    domain::{
        requests::{
            CreateCompanyProfileRequest, UpdateCompanyProfileRequest,
            UpdateCompanyVerificationRequest, UploadCompanyCredentialsRequest,
        },
        responses::{ApiResponse, CompanyProfileResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCompanyProfileQueryService = Arc<dyn CompanyProfileQueryServiceTrait + Send + Sync>;
pub type DynCompanyProfileCommandService =
    Arc<dyn CompanyProfileCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CompanyProfileQueryServiceTrait {
    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Option<CompanyProfileResponse>>, ServiceError>;
}

#[async_trait]
pub trait CompanyProfileCommandServiceTrait {
    async fn create_profile(
        &self,
        req: &CreateCompanyProfileRequest,
    ) -> Result<ApiResponse<CompanyProfileResponse>, ServiceError>;
    async fn update_profile(
        &self,
        req: &UpdateCompanyProfileRequest,
    ) -> Result<ApiResponse<CompanyProfileResponse>, ServiceError>;
    async fn update_verification(
        &self,
        req: &UpdateCompanyVerificationRequest,
    ) -> Result<ApiResponse<CompanyProfileResponse>, ServiceError>;
    async fn upload_credentials(
        &self,
        req: &UploadCompanyCredentialsRequest,
    ) -> Result<ApiResponse<CompanyProfileResponse>, ServiceError>;
}
