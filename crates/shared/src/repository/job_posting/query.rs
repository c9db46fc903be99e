use super::POSTING_COLUMNS;
use crate::{
    abstract_trait::JobPostingQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{SearchJobPostingsRequest, escape_like},
    errors::RepositoryError,
    model::JobPosting,
};
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

/// Active postings matching every supplied filter, newest first, one page.
fn search_query(req: &SearchJobPostingsRequest) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new(format!(
        "SELECT {POSTING_COLUMNS} FROM job_postings WHERE is_active = TRUE"
    ));

    if let Some(term) = req.query_term() {
        let pattern = format!("%{}%", escape_like(term));
        builder
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR description ILIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }

    if let Some(job_type) = req.job_type {
        builder.push(" AND type = ").push_bind(job_type);
    }

    if let Some(location) = req.location_term() {
        builder
            .push(" AND location ILIKE ")
            .push_bind(format!("%{}%", escape_like(location)))
            .push(" ESCAPE '\\'");
    }

    if let Some(company_id) = req.company_id {
        builder.push(" AND company_id = ").push_bind(company_id);
    }

    builder
        .push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(req.limit)
        .push(" OFFSET ")
        .push_bind(req.offset);

    builder
}

pub struct JobPostingQueryRepository {
    db: ConnectionPool,
}

impl JobPostingQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobPostingQueryRepositoryTrait for JobPostingQueryRepository {
    async fn find_all(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let postings = sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {POSTING_COLUMNS} FROM job_postings ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch job postings: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} job postings", postings.len());
        Ok(postings)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<JobPosting>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {POSTING_COLUMNS} FROM job_postings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch job posting {id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_company(&self, company_id: i32) -> Result<Vec<JobPosting>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, JobPosting>(&format!(
            r#"
            SELECT {POSTING_COLUMNS}
            FROM job_postings
            WHERE company_id = $1
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(company_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch postings of company {company_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn search(
        &self,
        req: &SearchJobPostingsRequest,
    ) -> Result<Vec<JobPosting>, RepositoryError> {
        info!(
            "🔍 Searching job postings: query={:?} type={:?} location={:?} company={:?}",
            req.query_term(),
            req.job_type,
            req.location_term(),
            req.company_id
        );

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut builder = search_query(req);

        let postings = builder
            .build_query_as::<JobPosting>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Job posting search failed: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Search matched {} job postings", postings.len());
        Ok(postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobType;

    #[test]
    fn search_without_filters_pages_active_postings() {
        let builder = search_query(&SearchJobPostingsRequest::default());

        assert_eq!(
            builder.sql(),
            format!(
                "SELECT {POSTING_COLUMNS} FROM job_postings WHERE is_active = TRUE \
                 ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
            )
        );
    }

    #[test]
    fn search_with_every_filter_ands_them_together() {
        let builder = search_query(&SearchJobPostingsRequest {
            query: Some("rust".into()),
            job_type: Some(JobType::Volunteer),
            location: Some("Jakarta".into()),
            company_id: Some(3),
            limit: 10,
            offset: 20,
        });

        assert_eq!(
            builder.sql(),
            format!(
                "SELECT {POSTING_COLUMNS} FROM job_postings WHERE is_active = TRUE \
                 AND (title ILIKE $1 ESCAPE '\\' OR description ILIKE $2 ESCAPE '\\') \
                 AND type = $3 \
                 AND location ILIKE $4 ESCAPE '\\' \
                 AND company_id = $5 \
                 ORDER BY created_at DESC, id DESC LIMIT $6 OFFSET $7"
            )
        );
    }

    #[test]
    fn blank_terms_add_no_clause() {
        let builder = search_query(&SearchJobPostingsRequest {
            query: Some("  ".into()),
            location: Some("".into()),
            ..Default::default()
        });

        assert!(!builder.sql().contains("ILIKE"));
    }
}
