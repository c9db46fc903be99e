use super::blank_to_none;
use crate::model::ApplicationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateJobApplicationRequest {
    #[validate(range(min = 1, message = "job_posting_id must be positive"))]
    pub job_posting_id: i32,

    #[validate(range(min = 1, message = "job_seeker_id must be positive"))]
    pub job_seeker_id: i32,

    #[serde(default)]
    pub cover_letter: Option<String>,
}

impl CreateJobApplicationRequest {
    pub fn normalized(self) -> Self {
        Self {
            cover_letter: blank_to_none(self.cover_letter),
            ..self
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateApplicationStatusRequest {
    #[serde(default)]
    pub id: i32,

    pub status: ApplicationStatus,
}
