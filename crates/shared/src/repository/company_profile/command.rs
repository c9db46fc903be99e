use super::COMPANY_COLUMNS;
use crate::{
    abstract_trait::CompanyProfileCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCompanyProfileRequest, UpdateCompanyProfileRequest},
    errors::RepositoryError,
    model::{CompanyProfile, VerificationStatus},
    repository::{push_patch, push_value},
};
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

/// `UPDATE company_profiles` for a partial profile edit.
fn update_query(req: &UpdateCompanyProfileRequest) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE company_profiles SET ");
    let mut set = builder.separated(", ");
    push_value(&mut set, "company_name", req.company_name.clone());
    push_patch(&mut set, "description", req.description.clone());
    push_patch(&mut set, "website", req.website.clone());
    push_patch(&mut set, "location", req.location.clone());
    push_patch(&mut set, "industry", req.industry.clone());
    push_patch(
        &mut set,
        "credentials_file_url",
        req.credentials_file_url.clone(),
    );
    set.push("updated_at = NOW()");

    builder
        .push(" WHERE id = ")
        .push_bind(req.id)
        .push(format!(" RETURNING {COMPANY_COLUMNS}"));

    builder
}

pub struct CompanyProfileCommandRepository {
    db: ConnectionPool,
}

impl CompanyProfileCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyProfileCommandRepositoryTrait for CompanyProfileCommandRepository {
    async fn create_profile(
        &self,
        req: &CreateCompanyProfileRequest,
    ) -> Result<CompanyProfile, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let profile = sqlx::query_as::<_, CompanyProfile>(&format!(
            r#"
            INSERT INTO company_profiles (
                user_id, company_name, description, website, location, industry,
                credentials_file_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(req.user_id)
        .bind(&req.company_name)
        .bind(&req.description)
        .bind(&req.website)
        .bind(&req.location)
        .bind(&req.industry)
        .bind(&req.credentials_file_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create company profile for user {}: {:?}",
                req.user_id, err
            );
            RepositoryError::from(err)
        })?;

        info!("✅ Created company profile '{}'", profile.company_name);
        Ok(profile)
    }

    async fn update_profile(
        &self,
        req: &UpdateCompanyProfileRequest,
    ) -> Result<CompanyProfile, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut builder = update_query(req);

        let profile = builder
            .build_query_as::<CompanyProfile>()
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update company profile {}: {:?}", req.id, err);
                RepositoryError::from(err)
            })?;

        info!("🔄 Updated company profile {}", profile.id);
        Ok(profile)
    }

    async fn update_verification(
        &self,
        id: i32,
        status: VerificationStatus,
    ) -> Result<CompanyProfile, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let profile = sqlx::query_as::<_, CompanyProfile>(&format!(
            r#"
            UPDATE company_profiles
            SET verification_status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update verification of company {id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Company {id} is now {status}");
        Ok(profile)
    }

    async fn update_credentials(
        &self,
        id: i32,
        credentials_file_url: &str,
    ) -> Result<CompanyProfile, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let profile = sqlx::query_as::<_, CompanyProfile>(&format!(
            r#"
            UPDATE company_profiles
            SET credentials_file_url = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(credentials_file_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to store credentials for company {id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("📎 Stored credentials for company {id}");
        Ok(profile)
    }
}
