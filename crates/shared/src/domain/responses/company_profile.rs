use crate::model::{CompanyProfile, VerificationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CompanyProfileResponse {
    pub id: i32,
    pub user_id: i32,
    pub company_name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub credentials_file_url: Option<String>,
    pub verification_status: VerificationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyProfile> for CompanyProfileResponse {
    fn from(value: CompanyProfile) -> Self {
        CompanyProfileResponse {
            id: value.id,
            user_id: value.user_id,
            company_name: value.company_name,
            description: value.description,
            website: value.website,
            location: value.location,
            industry: value.industry,
            credentials_file_url: value.credentials_file_url,
            verification_status: value.verification_status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
