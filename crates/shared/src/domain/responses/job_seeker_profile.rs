use crate::model::JobSeekerProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct JobSeekerProfileResponse {
    pub id: i32,
    pub user_id: i32,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobSeekerProfile> for JobSeekerProfileResponse {
    fn from(value: JobSeekerProfile) -> Self {
        JobSeekerProfileResponse {
            id: value.id,
            user_id: value.user_id,
            bio: value.bio,
            skills: value.skills,
            education: value.education,
            experience: value.experience,
            resume_url: value.resume_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
