use super::PROFILE_COLUMNS;
use crate::{
    abstract_trait::JobSeekerProfileCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateJobSeekerProfileRequest, UpdateJobSeekerProfileRequest},
    errors::RepositoryError,
    model::JobSeekerProfile,
    repository::push_patch,
};
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

/// `UPDATE job_seeker_profiles`; absent fields are left out, `null` clears.
fn update_query(req: &UpdateJobSeekerProfileRequest) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE job_seeker_profiles SET ");
    let mut set = builder.separated(", ");
    push_patch(&mut set, "bio", req.bio.clone());
    push_patch(&mut set, "skills", req.skills.clone());
    push_patch(&mut set, "education", req.education.clone());
    push_patch(&mut set, "experience", req.experience.clone());
    push_patch(&mut set, "resume_url", req.resume_url.clone());
    set.push("updated_at = NOW()");

    builder
        .push(" WHERE id = ")
        .push_bind(req.id)
        .push(format!(" RETURNING {PROFILE_COLUMNS}"));

    builder
}

pub struct JobSeekerProfileCommandRepository {
    db: ConnectionPool,
}

impl JobSeekerProfileCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobSeekerProfileCommandRepositoryTrait for JobSeekerProfileCommandRepository {
    async fn create_profile(
        &self,
        req: &CreateJobSeekerProfileRequest,
    ) -> Result<JobSeekerProfile, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let profile = sqlx::query_as::<_, JobSeekerProfile>(&format!(
            r#"
            INSERT INTO job_seeker_profiles (user_id, bio, skills, education, experience, resume_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(req.user_id)
        .bind(&req.bio)
        .bind(&req.skills)
        .bind(&req.education)
        .bind(&req.experience)
        .bind(&req.resume_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create job seeker profile for user {}: {:?}",
                req.user_id, err
            );
            RepositoryError::from(err)
        })?;

        info!("✅ Created job seeker profile {}", profile.id);
        Ok(profile)
    }

    async fn update_profile(
        &self,
        req: &UpdateJobSeekerProfileRequest,
    ) -> Result<JobSeekerProfile, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut builder = update_query(req);

        let profile = builder
            .build_query_as::<JobSeekerProfile>()
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update job seeker profile {}: {:?}", req.id, err);
                RepositoryError::from(err)
            })?;

        info!("🔄 Updated job seeker profile {}", profile.id);
        Ok(profile)
    }
}
