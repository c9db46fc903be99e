mod command;
mod query;

use self::command::UserCommandRepository;
use self::query::UserQueryRepository;

use std::sync::Arc;

use crate::{
    abstract_trait::{DynUserCommandRepository, DynUserQueryRepository},
    config::ConnectionPool,
};

const USER_COLUMNS: &str =
    "id, email, password_hash, role, first_name, last_name, phone, created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl UserRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(UserQueryRepository::new(pool.clone())) as DynUserQueryRepository;
        let command = Arc::new(UserCommandRepository::new(pool)) as DynUserCommandRepository;

        Self { query, command }
    }
}
