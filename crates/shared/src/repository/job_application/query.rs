use super::APPLICATION_COLUMNS;
use crate::{
    abstract_trait::JobApplicationQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{ApplicationWithDetails, ApplicationWithSeeker, JobApplication},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct JobApplicationQueryRepository {
    db: ConnectionPool,
}

impl JobApplicationQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobApplicationQueryRepositoryTrait for JobApplicationQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<JobApplication>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, JobApplication>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM job_applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch application {id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn exists(
        &self,
        job_posting_id: i32,
        job_seeker_id: i32,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM job_applications
                WHERE job_posting_id = $1 AND job_seeker_id = $2
            )
            "#,
        )
        .bind(job_posting_id)
        .bind(job_seeker_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to check for an existing application: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_job_posting(
        &self,
        job_posting_id: i32,
    ) -> Result<Vec<JobApplication>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, JobApplication>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM job_applications
            WHERE job_posting_id = $1
            ORDER BY applied_at DESC, id DESC
            "#
        ))
        .bind(job_posting_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch applications for posting {job_posting_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_job_posting_with_seeker(
        &self,
        job_posting_id: i32,
    ) -> Result<Vec<ApplicationWithSeeker>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, ApplicationWithSeeker>(
            r#"
            SELECT
                ja.id,
                ja.job_seeker_id,
                u.first_name AS job_seeker_first_name,
                u.last_name AS job_seeker_last_name,
                u.email AS job_seeker_email,
                ja.status,
                ja.cover_letter,
                ja.applied_at,
                ja.updated_at
            FROM job_applications ja
            JOIN job_seeker_profiles jsp ON jsp.id = ja.job_seeker_id
            JOIN users u ON u.id = jsp.user_id
            WHERE ja.job_posting_id = $1
            ORDER BY ja.applied_at DESC, ja.id DESC
            "#,
        )
        .bind(job_posting_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch applicants for posting {job_posting_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_job_seeker(
        &self,
        job_seeker_id: i32,
    ) -> Result<Vec<JobApplication>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, JobApplication>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM job_applications
            WHERE job_seeker_id = $1
            ORDER BY applied_at DESC, id DESC
            "#
        ))
        .bind(job_seeker_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch applications of seeker {job_seeker_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_all_with_details(&self) -> Result<Vec<ApplicationWithDetails>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, ApplicationWithDetails>(
            r#"
            SELECT
                ja.id,
                jp.title AS job_title,
                cp.company_name,
                cp.verification_status AS company_verification_status,
                u.first_name AS job_seeker_first_name,
                u.last_name AS job_seeker_last_name,
                u.email AS job_seeker_email,
                ja.status,
                ja.cover_letter,
                ja.applied_at,
                ja.updated_at
            FROM job_applications ja
            JOIN job_postings jp ON jp.id = ja.job_posting_id
            JOIN company_profiles cp ON cp.id = jp.company_id
            JOIN job_seeker_profiles jsp ON jsp.id = ja.job_seeker_id
            JOIN users u ON u.id = jsp.user_id
            ORDER BY ja.applied_at DESC, ja.id DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch applications: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} applications", rows.len());
        Ok(rows)
    }
}
