use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynUserCommandRepository, DynUserQueryRepository,
    },
    domain::{
        requests::{CreateUserRequest, LoginRequest, RegisterRequest, blank_to_none},
        responses::{ApiResponse, AuthUserResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hash: DynHashing,
    metrics: Metrics,
}

pub struct AuthServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub hash: DynHashing,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            query,
            command,
            hash,
            registry,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "auth_service");

        Self {
            query,
            command,
            hash,
            metrics,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<AuthUserResponse>, ServiceError> {
        info!("🏗️ Registering new {} account", req.role);

        let tracing_ctx = TracingContext::start("Register", Method::Post);

        match self.query.find_by_email(&req.email).await {
            Ok(None) => {}
            Ok(Some(_)) => {
                warn!("⚠️ Email already registered");
                tracing_ctx.complete_error(&self.metrics, "Email already registered");
                return Err(ServiceError::DuplicateEmail);
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        }

        let password_hash = match self.hash.hash_password(&req.password).await {
            Ok(hash) => hash,
            Err(e) => {
                error!("❌ Failed to hash password: {e}");
                tracing_ctx.complete_error(&self.metrics, "Failed to hash password");
                return Err(e);
            }
        };

        let create_req = CreateUserRequest {
            email: req.email.clone(),
            password_hash,
            role: req.role,
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            phone: blank_to_none(req.phone.clone()),
        };

        let user = match self.command.create_user(&create_req).await {
            Ok(user) => user,
            // A concurrent registration won the unique index.
            Err(RepositoryError::AlreadyExists(_)) => {
                tracing_ctx.complete_error(&self.metrics, "Email already registered");
                return Err(ServiceError::DuplicateEmail);
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        tracing_ctx.complete_success(&self.metrics, "User registered");

        Ok(ApiResponse::success(
            "User registered successfully",
            AuthUserResponse::from(user),
        ))
    }

    async fn login(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<AuthUserResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("Login", Method::Post);

        let user = match self.query.find_by_email(&req.email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing_ctx.complete_error(&self.metrics, "Invalid credentials");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        if let Err(e) = self
            .hash
            .compare_password(&user.password_hash, &req.password)
            .await
        {
            tracing_ctx.complete_error(&self.metrics, "Invalid credentials");
            return Err(match e {
                ServiceError::Bcrypt(_) => ServiceError::InvalidCredentials,
                other => other,
            });
        }

        info!("🔓 User {} logged in", user.id);
        tracing_ctx.complete_success(&self.metrics, "Login succeeded");

        Ok(ApiResponse::success(
            "Login successful",
            AuthUserResponse::from(user),
        ))
    }
}
