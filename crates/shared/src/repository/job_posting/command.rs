use super::POSTING_COLUMNS;
use crate::{
    abstract_trait::JobPostingCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateJobPostingRequest, UpdateJobPostingRequest},
    errors::RepositoryError,
    model::JobPosting,
    repository::{push_patch, push_value},
};
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

/// `UPDATE job_postings` touching only the supplied fields plus `updated_at`.
fn update_query(req: &UpdateJobPostingRequest) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE job_postings SET ");
    let mut set = builder.separated(", ");
    push_value(&mut set, "title", req.title.clone());
    push_value(&mut set, "description", req.description.clone());
    push_value(&mut set, "type", req.job_type.clone());
    push_patch(&mut set, "location", req.location.clone());
    push_patch(&mut set, "requirements", req.requirements.clone());
    push_patch(&mut set, "duration", req.duration.clone());
    push_patch(&mut set, "compensation", req.compensation.clone());
    push_patch(
        &mut set,
        "application_deadline",
        req.application_deadline.clone(),
    );
    push_value(&mut set, "is_active", req.is_active.clone());
    set.push("updated_at = NOW()");

    builder
        .push(" WHERE id = ")
        .push_bind(req.id)
        .push(format!(" RETURNING {POSTING_COLUMNS}"));

    builder
}

pub struct JobPostingCommandRepository {
    db: ConnectionPool,
}

impl JobPostingCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobPostingCommandRepositoryTrait for JobPostingCommandRepository {
    async fn create_job_posting(
        &self,
        req: &CreateJobPostingRequest,
    ) -> Result<JobPosting, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let posting = sqlx::query_as::<_, JobPosting>(&format!(
            r#"
            INSERT INTO job_postings (
                company_id, title, description, type, location, requirements, duration,
                compensation, application_deadline, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE)
            RETURNING {POSTING_COLUMNS}
            "#
        ))
        .bind(req.company_id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.job_type)
        .bind(&req.location)
        .bind(&req.requirements)
        .bind(&req.duration)
        .bind(&req.compensation)
        .bind(req.application_deadline)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create job posting '{}': {:?}", req.title, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created job posting {} '{}'", posting.id, posting.title);
        Ok(posting)
    }

    async fn update_job_posting(
        &self,
        req: &UpdateJobPostingRequest,
    ) -> Result<JobPosting, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut builder = update_query(req);

        let posting = builder
            .build_query_as::<JobPosting>()
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update job posting {}: {:?}", req.id, err);
                RepositoryError::from(err)
            })?;

        info!("🔄 Updated job posting {}", posting.id);
        Ok(posting)
    }

    async fn delete_job_posting(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete job posting {id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        let deleted = result.rows_affected() > 0;
        info!("🗑️ Delete job posting {id}: deleted={deleted}");
        Ok(deleted)
    }
}
