use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use utoipa::ToSchema;

use super::VerificationStatus;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }

    /// `withdrawn` is terminal and nothing returns to `pending`.
    /// Re-applying the current status is always allowed.
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        if self == next {
            return true;
        }

        match (self, next) {
            (ApplicationStatus::Withdrawn, _) => false,
            (_, ApplicationStatus::Pending) => false,
            _ => true,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
    pub id: i32,
    pub job_posting_id: i32,
    pub job_seeker_id: i32,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin listing row: application joined with posting, company and applicant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationWithDetails {
    pub id: i32,
    pub job_title: String,
    pub company_name: String,
    pub company_verification_status: VerificationStatus,
    pub job_seeker_first_name: String,
    pub job_seeker_last_name: String,
    pub job_seeker_email: String,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Company listing row: application joined with the applicant's identity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationWithSeeker {
    pub id: i32,
    pub job_seeker_id: i32,
    pub job_seeker_first_name: String,
    pub job_seeker_last_name: String,
    pub job_seeker_email: String,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::ApplicationStatus::{self, *};
    use rstest::rstest;

    #[rstest]
    #[case(Pending, Accepted, true)]
    #[case(Pending, Rejected, true)]
    #[case(Pending, Withdrawn, true)]
    #[case(Accepted, Rejected, true)]
    #[case(Rejected, Accepted, true)]
    #[case(Accepted, Withdrawn, true)]
    #[case(Accepted, Accepted, true)]
    #[case(Accepted, Pending, false)]
    #[case(Rejected, Pending, false)]
    #[case(Withdrawn, Accepted, false)]
    #[case(Withdrawn, Pending, false)]
    #[case(Withdrawn, Withdrawn, true)]
    fn status_transitions(
        #[case] from: ApplicationStatus,
        #[case] to: ApplicationStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[test]
    fn new_applications_start_pending() {
        assert_eq!(ApplicationStatus::default(), Pending);
    }
}
