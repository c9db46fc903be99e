use crate::{
    abstract_trait::{DynUserCommandRepository, UserCommandServiceTrait},
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct UserCommandService {
    command: DynUserCommandRepository,
    metrics: Metrics,
}

impl UserCommandService {
    pub async fn new(command: DynUserCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "user_command_service");

        Self { command, metrics }
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn delete_user(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🗑️ Deleting user id={id}");

        let tracing_ctx = TracingContext::start("DeleteUser", Method::Delete);

        match self.command.delete_user(id).await {
            Ok(true) => {
                tracing_ctx.complete_success(&self.metrics, "User deleted");
                Ok(ApiResponse::success("User deleted successfully", true))
            }
            Ok(false) => {
                tracing_ctx.complete_success(&self.metrics, "No user to delete");
                Ok(ApiResponse::success("User not found", false))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
