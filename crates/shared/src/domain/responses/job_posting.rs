use crate::model::{JobPosting, JobType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct JobPostingResponse {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub location: Option<String>,
    pub requirements: Option<String>,
    pub duration: Option<String>,
    pub compensation: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobPosting> for JobPostingResponse {
    fn from(value: JobPosting) -> Self {
        JobPostingResponse {
            id: value.id,
            company_id: value.company_id,
            title: value.title,
            description: value.description,
            job_type: value.job_type,
            location: value.location,
            requirements: value.requirements,
            duration: value.duration,
            compensation: value.compensation,
            application_deadline: value.application_deadline,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
