mod command;
mod query;

use self::command::CompanyProfileCommandService;
use self::query::CompanyProfileQueryService;
use crate::abstract_trait::{
    DynCompanyProfileCommandRepository, DynCompanyProfileCommandService,
    DynCompanyProfileQueryRepository, DynCompanyProfileQueryService, DynUserQueryRepository,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct CompanyProfileService {
    pub query: DynCompanyProfileQueryService,
    pub command: DynCompanyProfileCommandService,
}

impl fmt::Debug for CompanyProfileService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompanyProfileService")
            .field("query", &"Arc<dyn CompanyProfileQueryServiceTrait>")
            .field("command", &"Arc<dyn CompanyProfileCommandServiceTrait>")
            .finish()
    }
}

pub struct CompanyProfileServiceDeps {
    pub query: DynCompanyProfileQueryRepository,
    pub command: DynCompanyProfileCommandRepository,
    pub user_query: DynUserQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl CompanyProfileService {
    pub async fn new(deps: CompanyProfileServiceDeps) -> Self {
        let CompanyProfileServiceDeps {
            query,
            command,
            user_query,
            registry,
        } = deps;

        let query_service =
            Arc::new(CompanyProfileQueryService::new(query.clone(), registry.clone()).await)
                as DynCompanyProfileQueryService;
        let command_service = Arc::new(
            CompanyProfileCommandService::new(query, command, user_query, registry).await,
        ) as DynCompanyProfileCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
