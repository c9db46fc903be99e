mod command;
mod query;

use self::command::JobApplicationCommandService;
use self::query::JobApplicationQueryService;
use crate::abstract_trait::{
    DynJobApplicationCommandRepository, DynJobApplicationCommandService,
    DynJobApplicationQueryRepository, DynJobApplicationQueryService, DynJobPostingQueryRepository,
    DynJobSeekerProfileQueryRepository,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct JobApplicationService {
    pub query: DynJobApplicationQueryService,
    pub command: DynJobApplicationCommandService,
}

impl fmt::Debug for JobApplicationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobApplicationService")
            .field("query", &"Arc<dyn JobApplicationQueryServiceTrait>")
            .field("command", &"Arc<dyn JobApplicationCommandServiceTrait>")
            .finish()
    }
}

pub struct JobApplicationServiceDeps {
    pub query: DynJobApplicationQueryRepository,
    pub command: DynJobApplicationCommandRepository,
    pub posting_query: DynJobPostingQueryRepository,
    pub seeker_query: DynJobSeekerProfileQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl JobApplicationService {
    pub async fn new(deps: JobApplicationServiceDeps) -> Self {
        let JobApplicationServiceDeps {
            query,
            command,
            posting_query,
            seeker_query,
            registry,
        } = deps;

        let query_service =
            Arc::new(JobApplicationQueryService::new(query.clone(), registry.clone()).await)
                as DynJobApplicationQueryService;
        let command_service = Arc::new(
            JobApplicationCommandService::new(
                query,
                command,
                posting_query,
                seeker_query,
                registry,
            )
            .await,
        ) as DynJobApplicationCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
