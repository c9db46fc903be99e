mod api;
mod company_profile;
mod job_application;
mod job_posting;
mod job_seeker_profile;
mod user;

pub use self::api::ApiResponse;
pub use self::company_profile::CompanyProfileResponse;
pub use self::job_application::{
    ApplicationWithDetailsResponse, ApplicationWithSeekerResponse, JobApplicationResponse,
};
pub use self::job_posting::JobPostingResponse;
pub use self::job_seeker_profile::JobSeekerProfileResponse;
pub use self::user::{AuthUserResponse, UserResponse, to_user_response};
