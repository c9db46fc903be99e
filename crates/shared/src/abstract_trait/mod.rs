mod auth;
mod company_profile;
mod hashing;
mod job_application;
mod job_posting;
mod job_seeker_profile;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::company_profile::{
    CompanyProfileCommandRepositoryTrait, CompanyProfileCommandServiceTrait,
    CompanyProfileQueryRepositoryTrait, CompanyProfileQueryServiceTrait,
    DynCompanyProfileCommandRepository, DynCompanyProfileCommandService,
    DynCompanyProfileQueryRepository, DynCompanyProfileQueryService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::job_application::{
    DynJobApplicationCommandRepository, DynJobApplicationCommandService,
    DynJobApplicationQueryRepository, DynJobApplicationQueryService,
    JobApplicationCommandRepositoryTrait, JobApplicationCommandServiceTrait,
    JobApplicationQueryRepositoryTrait, JobApplicationQueryServiceTrait,
};
pub use self::job_posting::{
    DynJobPostingCommandRepository, DynJobPostingCommandService, DynJobPostingQueryRepository,
    DynJobPostingQueryService, JobPostingCommandRepositoryTrait, JobPostingCommandServiceTrait,
    JobPostingQueryRepositoryTrait, JobPostingQueryServiceTrait,
};
pub use self::job_seeker_profile::{
    DynJobSeekerProfileCommandRepository, DynJobSeekerProfileCommandService,
    DynJobSeekerProfileQueryRepository, DynJobSeekerProfileQueryService,
    JobSeekerProfileCommandRepositoryTrait, JobSeekerProfileCommandServiceTrait,
    JobSeekerProfileQueryRepositoryTrait, JobSeekerProfileQueryServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserCommandService, DynUserQueryRepository, DynUserQueryService,
    UserCommandRepositoryTrait, UserCommandServiceTrait, UserQueryRepositoryTrait,
    UserQueryServiceTrait,
};
