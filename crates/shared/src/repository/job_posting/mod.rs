mod command;
mod query;

use self::command::JobPostingCommandRepository;
use self::query::JobPostingQueryRepository;

use std::sync::Arc;

use crate::{
    abstract_trait::{DynJobPostingCommandRepository, DynJobPostingQueryRepository},
    config::ConnectionPool,
};

const POSTING_COLUMNS: &str = "id, company_id, title, description, type, location, \
     requirements, duration, compensation, application_deadline, is_active, created_at, \
     updated_at";

#[derive(Clone)]
pub struct JobPostingRepository {
    pub query: DynJobPostingQueryRepository,
    pub command: DynJobPostingCommandRepository,
}

impl JobPostingRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(JobPostingQueryRepository::new(pool.clone())) as DynJobPostingQueryRepository;
        let command =
            Arc::new(JobPostingCommandRepository::new(pool)) as DynJobPostingCommandRepository;

        Self { query, command }
    }
}
