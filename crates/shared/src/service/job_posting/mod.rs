mod command;
mod query;

use self::command::JobPostingCommandService;
use self::query::JobPostingQueryService;
use crate::abstract_trait::{
    DynCompanyProfileQueryRepository, DynJobPostingCommandRepository, DynJobPostingCommandService,
    DynJobPostingQueryRepository, DynJobPostingQueryService,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct JobPostingService {
    pub query: DynJobPostingQueryService,
    pub command: DynJobPostingCommandService,
}

impl fmt::Debug for JobPostingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobPostingService")
            .field("query", &"Arc<dyn JobPostingQueryServiceTrait>")
            .field("command", &"Arc<dyn JobPostingCommandServiceTrait>")
            .finish()
    }
}

pub struct JobPostingServiceDeps {
    pub query: DynJobPostingQueryRepository,
    pub command: DynJobPostingCommandRepository,
    pub company_query: DynCompanyProfileQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl JobPostingService {
    pub async fn new(deps: JobPostingServiceDeps) -> Self {
        let JobPostingServiceDeps {
            query,
            command,
            company_query,
            registry,
        } = deps;

        let query_service = Arc::new(JobPostingQueryService::new(query, registry.clone()).await)
            as DynJobPostingQueryService;
        let command_service =
            Arc::new(JobPostingCommandService::new(command, company_query, registry).await)
                as DynJobPostingCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
