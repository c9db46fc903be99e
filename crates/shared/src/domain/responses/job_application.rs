use crate::model::{
    ApplicationStatus, ApplicationWithDetails, ApplicationWithSeeker, JobApplication,
    VerificationStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct JobApplicationResponse {
    pub id: i32,
    pub job_posting_id: i32,
    pub job_seeker_id: i32,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobApplication> for JobApplicationResponse {
    fn from(value: JobApplication) -> Self {
        JobApplicationResponse {
            id: value.id,
            job_posting_id: value.job_posting_id,
            job_seeker_id: value.job_seeker_id,
            status: value.status,
            cover_letter: value.cover_letter,
            applied_at: value.applied_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApplicationWithDetailsResponse {
    pub id: i32,
    pub job_title: String,
    pub company_name: String,
    pub company_verification_status: VerificationStatus,
    pub job_seeker_name: String,
    pub job_seeker_email: String,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ApplicationWithDetails> for ApplicationWithDetailsResponse {
    fn from(value: ApplicationWithDetails) -> Self {
        ApplicationWithDetailsResponse {
            id: value.id,
            job_title: value.job_title,
            company_name: value.company_name,
            company_verification_status: value.company_verification_status,
            job_seeker_name: format!(
                "{} {}",
                value.job_seeker_first_name, value.job_seeker_last_name
            ),
            job_seeker_email: value.job_seeker_email,
            status: value.status,
            cover_letter: value.cover_letter,
            applied_at: value.applied_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApplicationWithSeekerResponse {
    pub id: i32,
    pub job_seeker_id: i32,
    pub job_seeker_name: String,
    pub job_seeker_email: String,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ApplicationWithSeeker> for ApplicationWithSeekerResponse {
    fn from(value: ApplicationWithSeeker) -> Self {
        ApplicationWithSeekerResponse {
            id: value.id,
            job_seeker_id: value.job_seeker_id,
            job_seeker_name: format!(
                "{} {}",
                value.job_seeker_first_name, value.job_seeker_last_name
            ),
            job_seeker_email: value.job_seeker_email,
            status: value.status,
            cover_letter: value.cover_letter,
            applied_at: value.applied_at,
            updated_at: value.updated_at,
        }
    }
}
