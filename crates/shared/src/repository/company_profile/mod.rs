mod command;
mod query;

use self::command::CompanyProfileCommandRepository;
use self::query::CompanyProfileQueryRepository;

use std::sync::Arc;

use crate::{
    abstract_trait::{DynCompanyProfileCommandRepository, DynCompanyProfileQueryRepository},
    config::ConnectionPool,
};

const COMPANY_COLUMNS: &str = "id, user_id, company_name, description, website, location, \
     industry, credentials_file_url, verification_status, created_at, updated_at";

#[derive(Clone)]
pub struct CompanyProfileRepository {
    pub query: DynCompanyProfileQueryRepository,
    pub command: DynCompanyProfileCommandRepository,
}

impl CompanyProfileRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(CompanyProfileQueryRepository::new(pool.clone()))
            as DynCompanyProfileQueryRepository;
        let command = Arc::new(CompanyProfileCommandRepository::new(pool))
            as DynCompanyProfileCommandRepository;

        Self { query, command }
    }
}
