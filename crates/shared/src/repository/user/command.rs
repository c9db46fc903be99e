use super::USER_COLUMNS;
use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateUserRequest, errors::RepositoryError, model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, password_hash, role, first_name, last_name, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&req.email)
        .bind(&req.password_hash)
        .bind(req.role)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.phone)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user '{}': {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created user {} ({})", user.id, user.role);
        Ok(user)
    }

    // Profiles, postings and applications go with the user through
    // ON DELETE CASCADE, inside this single statement.
    async fn delete_user(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete user {id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        let deleted = result.rows_affected() > 0;
        info!("🗑️ Delete user {id}: deleted={deleted}");
        Ok(deleted)
    }
}
