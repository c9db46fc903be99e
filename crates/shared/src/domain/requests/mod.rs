mod auth;
mod company_profile;
mod job_application;
mod job_posting;
mod job_seeker_profile;
mod patch;
mod user;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::company_profile::{
    CreateCompanyProfileRequest, UpdateCompanyProfileRequest, UpdateCompanyVerificationRequest,
    UploadCompanyCredentialsRequest,
};
pub use self::job_application::{CreateJobApplicationRequest, UpdateApplicationStatusRequest};
pub use self::job_posting::{
    CreateJobPostingRequest, DEFAULT_SEARCH_LIMIT, SearchJobPostingsRequest,
    UpdateJobPostingRequest, escape_like,
};
pub use self::job_seeker_profile::{CreateJobSeekerProfileRequest, UpdateJobSeekerProfileRequest};
pub use self::patch::{Patch, not_null, required_text};
pub use self::user::CreateUserRequest;

/// Empty or whitespace-only optional text is stored as NULL.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::blank_to_none;

    #[test]
    fn blank_strings_become_none() {
        assert_eq!(blank_to_none(Some(String::new())), None);
        assert_eq!(blank_to_none(Some("   ".into())), None);
        assert_eq!(blank_to_none(None), None);
        assert_eq!(blank_to_none(Some("Rust".into())), Some("Rust".into()));
    }
}
