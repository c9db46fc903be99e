use crate::{
    abstract_trait::{DynUserQueryRepository, UserQueryServiceTrait},
    domain::responses::{ApiResponse, UserResponse, to_user_response},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct UserQueryService {
    query: DynUserQueryRepository,
    metrics: Metrics,
}

impl UserQueryService {
    pub async fn new(query: DynUserQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "user_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("FindAllUsers", Method::Get);

        let users = match self.query.find_all().await {
            Ok(users) => users,
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        tracing_ctx.complete_success(&self.metrics, "Users fetched");

        Ok(ApiResponse::success(
            "Users retrieved successfully",
            users.into_iter().map(UserResponse::from).collect(),
        ))
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<Option<UserResponse>>, ServiceError> {
        info!("🔍 Fetching user id={id}");

        let tracing_ctx = TracingContext::start("FindUserById", Method::Get);

        let user = match self.query.find_by_id(id).await {
            Ok(user) => user,
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        let message = if user.is_some() {
            "User retrieved successfully"
        } else {
            "User not found"
        };
        tracing_ctx.complete_success(&self.metrics, message);

        Ok(ApiResponse::success(message, to_user_response(user)))
    }
}
