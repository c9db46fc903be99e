use crate::{
    domain::requests::{CreateCompanyProfileRequest, UpdateCompanyProfileRequest},
    errors::RepositoryError,
    model::{CompanyProfile, VerificationStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCompanyProfileQueryRepository =
    Arc<dyn CompanyProfileQueryRepositoryTrait + Send + Sync>;
pub type DynCompanyProfileCommandRepository =
    Arc<dyn CompanyProfileCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CompanyProfileQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<CompanyProfile>, RepositoryError>;
    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<CompanyProfile>, RepositoryError>;
}

#[async_trait]
pub trait CompanyProfileCommandRepositoryTrait {
    async fn create_profile(
        &self,
        req: &CreateCompanyProfileRequest,
    ) -> Result<CompanyProfile, RepositoryError>;
    async fn update_profile(
        &self,
        req: &UpdateCompanyProfileRequest,
    ) -> Result<CompanyProfile, RepositoryError>;
    async fn update_verification(
        &self,
        id: i32,
        status: VerificationStatus,
    ) -> Result<CompanyProfile, RepositoryError>;
    async fn update_credentials(
        &self,
        id: i32,
        credentials_file_url: &str,
    ) -> Result<CompanyProfile, RepositoryError>;
}
