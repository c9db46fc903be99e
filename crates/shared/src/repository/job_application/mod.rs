mod command;
mod query;

use self::command::JobApplicationCommandRepository;
use self::query::JobApplicationQueryRepository;

use std::sync::Arc;

use crate::{
    abstract_trait::{DynJobApplicationCommandRepository, DynJobApplicationQueryRepository},
    config::ConnectionPool,
};

const APPLICATION_COLUMNS: &str =
    "id, job_posting_id, job_seeker_id, status, cover_letter, applied_at, updated_at";

#[derive(Clone)]
pub struct JobApplicationRepository {
    pub query: DynJobApplicationQueryRepository,
    pub command: DynJobApplicationCommandRepository,
}

impl JobApplicationRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(JobApplicationQueryRepository::new(pool.clone()))
            as DynJobApplicationQueryRepository;
        let command = Arc::new(JobApplicationCommandRepository::new(pool))
            as DynJobApplicationCommandRepository;

        Self { query, command }
    }
}
