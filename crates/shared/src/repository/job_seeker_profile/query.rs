use super::PROFILE_COLUMNS;
use crate::{
    abstract_trait::JobSeekerProfileQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::JobSeekerProfile,
};
use async_trait::async_trait;
use tracing::error;

pub struct JobSeekerProfileQueryRepository {
    db: ConnectionPool,
}

impl JobSeekerProfileQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobSeekerProfileQueryRepositoryTrait for JobSeekerProfileQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<JobSeekerProfile>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, JobSeekerProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM job_seeker_profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch job seeker profile {id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<JobSeekerProfile>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, JobSeekerProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM job_seeker_profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch job seeker profile for user {user_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }
}
