use super::APPLICATION_COLUMNS;
use crate::{
    abstract_trait::JobApplicationCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateJobApplicationRequest,
    errors::RepositoryError,
    model::{ApplicationStatus, JobApplication},
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct JobApplicationCommandRepository {
    db: ConnectionPool,
}

impl JobApplicationCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobApplicationCommandRepositoryTrait for JobApplicationCommandRepository {
    // The (job_posting_id, job_seeker_id) unique constraint is what settles
    // two concurrent applications; the loser surfaces as AlreadyExists.
    async fn create_application(
        &self,
        req: &CreateJobApplicationRequest,
    ) -> Result<JobApplication, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let application = sqlx::query_as::<_, JobApplication>(&format!(
            r#"
            INSERT INTO job_applications (job_posting_id, job_seeker_id, status, cover_letter)
            VALUES ($1, $2, $3, $4)
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(req.job_posting_id)
        .bind(req.job_seeker_id)
        .bind(ApplicationStatus::Pending)
        .bind(&req.cover_letter)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create application for posting {} by seeker {}: {:?}",
                req.job_posting_id, req.job_seeker_id, err
            );
            RepositoryError::from(err)
        })?;

        info!("✅ Created application {}", application.id);
        Ok(application)
    }

    async fn update_status(
        &self,
        id: i32,
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) -> Result<Option<JobApplication>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let application = sqlx::query_as::<_, JobApplication>(&format!(
            r#"
            UPDATE job_applications
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(from)
        .bind(to)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update application {id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        match &application {
            Some(_) => info!("🔄 Application {id} moved {from} -> {to}"),
            None => warn!("⚠️ Application {id} no longer {from}, status left as is"),
        }

        Ok(application)
    }
}
