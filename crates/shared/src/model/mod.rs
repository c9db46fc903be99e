mod company_profile;
mod job_application;
mod job_posting;
mod job_seeker_profile;
mod user;

pub use self::company_profile::{CompanyProfile, VerificationStatus};
pub use self::job_application::{
    ApplicationStatus, ApplicationWithDetails, ApplicationWithSeeker, JobApplication,
};
pub use self::job_posting::{JobPosting, JobType};
pub use self::job_seeker_profile::JobSeekerProfile;
pub use self::user::{User, UserRole};
