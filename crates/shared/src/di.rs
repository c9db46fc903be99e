use crate::{
    abstract_trait::{DynAuthService, DynHashing},
    repository::Repositories,
    service::{
        AuthService, AuthServiceDeps, CompanyProfileService, CompanyProfileServiceDeps,
        JobApplicationService, JobApplicationServiceDeps, JobPostingService,
        JobPostingServiceDeps, JobSeekerProfileService, JobSeekerProfileServiceDeps, UserService,
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: UserService,
    pub job_seeker_profile_service: JobSeekerProfileService,
    pub company_profile_service: CompanyProfileService,
    pub job_posting_service: JobPostingService,
    pub job_application_service: JobApplicationService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("user_service", &self.user_service)
            .field("job_seeker_profile_service", &self.job_seeker_profile_service)
            .field("company_profile_service", &self.company_profile_service)
            .field("job_posting_service", &self.job_posting_service)
            .field("job_application_service", &self.job_application_service)
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub repositories: Repositories,
    pub hash: DynHashing,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            repositories,
            hash,
            registry,
        } = deps;

        let Repositories {
            user,
            job_seeker_profile,
            company_profile,
            job_posting,
            job_application,
        } = repositories;

        let auth_service = Arc::new(
            AuthService::new(AuthServiceDeps {
                query: user.query.clone(),
                command: user.command.clone(),
                hash,
                registry: registry.clone(),
            })
            .await,
        ) as DynAuthService;

        let user_service =
            UserService::new(user.query.clone(), user.command, registry.clone()).await;

        let job_seeker_profile_service =
            JobSeekerProfileService::new(JobSeekerProfileServiceDeps {
                query: job_seeker_profile.query.clone(),
                command: job_seeker_profile.command,
                user_query: user.query.clone(),
                registry: registry.clone(),
            })
            .await;

        let company_profile_service = CompanyProfileService::new(CompanyProfileServiceDeps {
            query: company_profile.query.clone(),
            command: company_profile.command,
            user_query: user.query,
            registry: registry.clone(),
        })
        .await;

        let job_posting_service = JobPostingService::new(JobPostingServiceDeps {
            query: job_posting.query.clone(),
            command: job_posting.command,
            company_query: company_profile.query,
            registry: registry.clone(),
        })
        .await;

        let job_application_service = JobApplicationService::new(JobApplicationServiceDeps {
            query: job_application.query,
            command: job_application.command,
            posting_query: job_posting.query,
            seeker_query: job_seeker_profile.query,
            registry,
        })
        .await;

        Self {
            auth_service,
            user_service,
            job_seeker_profile_service,
            company_profile_service,
            job_posting_service,
            job_application_service,
        }
    }
}
