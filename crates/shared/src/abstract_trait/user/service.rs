use crate::{
    domain::responses::{ApiResponse, UserResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;
pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32)
    -> Result<ApiResponse<Option<UserResponse>>, ServiceError>;
}

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn delete_user(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError>;
}
