use super::{Patch, blank_to_none, required_text};
use crate::model::VerificationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateCompanyProfileRequest {
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i32,

    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub credentials_file_url: Option<String>,
}

impl CreateCompanyProfileRequest {
    pub fn normalized(self) -> Self {
        Self {
            user_id: self.user_id,
            company_name: self.company_name,
            description: blank_to_none(self.description),
            website: blank_to_none(self.website),
            location: blank_to_none(self.location),
            industry: blank_to_none(self.industry),
            credentials_file_url: blank_to_none(self.credentials_file_url),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateCompanyProfileRequest {
    #[serde(default)]
    pub id: i32,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    #[validate(custom(function = "required_text"))]
    pub company_name: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub website: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub location: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub industry: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub credentials_file_url: Patch<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateCompanyVerificationRequest {
    #[serde(default)]
    pub id: i32,

    #[validate(custom(function = "decided_verification"))]
    pub status: VerificationStatus,
}

/// An administrator can only move a company to `verified` or `rejected`.
pub(crate) fn decided_verification(status: &VerificationStatus) -> Result<(), ValidationError> {
    match status {
        VerificationStatus::Pending => Err(ValidationError::new("verification_status")
            .with_message("Status must be verified or rejected".into())),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UploadCompanyCredentialsRequest {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, message = "credentials_file_url is required"))]
    pub credentials_file_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_cannot_be_reset_to_pending() {
        let req = UpdateCompanyVerificationRequest {
            id: 1,
            status: VerificationStatus::Pending,
        };
        assert!(req.validate().is_err());

        let req = UpdateCompanyVerificationRequest {
            id: 1,
            status: VerificationStatus::Verified,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn company_name_cannot_be_cleared() {
        let req: UpdateCompanyProfileRequest =
            serde_json::from_value(serde_json::json!({ "company_name": null })).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn create_requires_company_name() {
        let req = CreateCompanyProfileRequest {
            user_id: 1,
            ..Default::default()
        };

        assert!(req.validate().unwrap_err().field_errors().contains_key("company_name"));
    }
}
