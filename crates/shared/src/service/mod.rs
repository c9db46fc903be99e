mod auth;
mod company_profile;
mod job_application;
mod job_posting;
mod job_seeker_profile;
mod user;

#[cfg(test)]
mod tests;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::company_profile::{CompanyProfileService, CompanyProfileServiceDeps};
pub use self::job_application::{JobApplicationService, JobApplicationServiceDeps};
pub use self::job_posting::{JobPostingService, JobPostingServiceDeps};
pub use self::job_seeker_profile::{JobSeekerProfileService, JobSeekerProfileServiceDeps};
pub use self::user::UserService;
