mod command;
mod query;

use self::command::JobSeekerProfileCommandService;
use self::query::JobSeekerProfileQueryService;
use crate::abstract_trait::{
    DynJobSeekerProfileCommandRepository, DynJobSeekerProfileCommandService,
    DynJobSeekerProfileQueryRepository, DynJobSeekerProfileQueryService, DynUserQueryRepository,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct JobSeekerProfileService {
    pub query: DynJobSeekerProfileQueryService,
    pub command: DynJobSeekerProfileCommandService,
}

impl fmt::Debug for JobSeekerProfileService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobSeekerProfileService")
            .field("query", &"Arc<dyn JobSeekerProfileQueryServiceTrait>")
            .field("command", &"Arc<dyn JobSeekerProfileCommandServiceTrait>")
            .finish()
    }
}

pub struct JobSeekerProfileServiceDeps {
    pub query: DynJobSeekerProfileQueryRepository,
    pub command: DynJobSeekerProfileCommandRepository,
    pub user_query: DynUserQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl JobSeekerProfileService {
    pub async fn new(deps: JobSeekerProfileServiceDeps) -> Self {
        let JobSeekerProfileServiceDeps {
            query,
            command,
            user_query,
            registry,
        } = deps;

        let query_service =
            Arc::new(JobSeekerProfileQueryService::new(query.clone(), registry.clone()).await)
                as DynJobSeekerProfileQueryService;
        let command_service = Arc::new(
            JobSeekerProfileCommandService::new(query, command, user_query, registry).await,
        ) as DynJobSeekerProfileCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
