use super::COMPANY_COLUMNS;
use crate::{
    abstract_trait::CompanyProfileQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::CompanyProfile,
};
use async_trait::async_trait;
use tracing::error;

pub struct CompanyProfileQueryRepository {
    db: ConnectionPool,
}

impl CompanyProfileQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyProfileQueryRepositoryTrait for CompanyProfileQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<CompanyProfile>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CompanyProfile>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM company_profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch company profile {id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<CompanyProfile>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CompanyProfile>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM company_profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch company profile for user {user_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }
}
