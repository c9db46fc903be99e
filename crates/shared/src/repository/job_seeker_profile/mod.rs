mod command;
mod query;

use self::command::JobSeekerProfileCommandRepository;
use self::query::JobSeekerProfileQueryRepository;

use std::sync::Arc;

use crate::{
    abstract_trait::{DynJobSeekerProfileCommandRepository, DynJobSeekerProfileQueryRepository},
    config::ConnectionPool,
};

const PROFILE_COLUMNS: &str =
    "id, user_id, bio, skills, education, experience, resume_url, created_at, updated_at";

#[derive(Clone)]
pub struct JobSeekerProfileRepository {
    pub query: DynJobSeekerProfileQueryRepository,
    pub command: DynJobSeekerProfileCommandRepository,
}

impl JobSeekerProfileRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(JobSeekerProfileQueryRepository::new(pool.clone()))
            as DynJobSeekerProfileQueryRepository;
        let command = Arc::new(JobSeekerProfileCommandRepository::new(pool))
            as DynJobSeekerProfileCommandRepository;

        Self { query, command }
    }
}
