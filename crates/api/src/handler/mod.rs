mod auth;
mod company_profile;
mod job_application;
mod job_posting;
mod job_seeker_profile;
mod user;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use prometheus_client::encoding::text::encode;
use serde_json::json;
use shared::{state::AppState, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::company_profile::company_profile_routes;
pub use self::job_application::job_application_routes;
pub use self::job_posting::job_posting_routes;
pub use self::job_seeker_profile::job_seeker_profile_routes;
pub use self::user::user_routes;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,

        user::get_users,
        user::get_user,
        user::delete_user,

        job_seeker_profile::get_job_seeker_profile,
        job_seeker_profile::create_job_seeker_profile,
        job_seeker_profile::update_job_seeker_profile,

        company_profile::get_company_profile,
        company_profile::create_company_profile,
        company_profile::update_company_profile,
        company_profile::update_company_verification,
        company_profile::upload_company_credentials,

        job_posting::get_job_postings,
        job_posting::search_job_postings,
        job_posting::get_company_job_postings,
        job_posting::get_job_posting,
        job_posting::create_job_posting,
        job_posting::update_job_posting,
        job_posting::delete_job_posting,

        job_application::get_all_applications,
        job_application::create_application,
        job_application::update_application_status,
        job_application::get_job_applications,
        job_application::get_job_applications_with_details,
        job_application::get_user_applications,
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "User", description = "User administration"),
        (name = "JobSeekerProfile", description = "Job seeker profiles"),
        (name = "CompanyProfile", description = "Company profiles and verification"),
        (name = "JobPosting", description = "Internship and volunteer postings"),
        (name = "JobApplication", description = "Applications and their status"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        error!("❌ Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now(),
    }))
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .route("/health", get(health_check))
            .with_state(shared_state.clone())
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(job_seeker_profile_routes(shared_state.clone()))
            .merge(company_profile_routes(shared_state.clone()))
            .merge(job_posting_routes(shared_state.clone()))
            .merge(job_application_routes(shared_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
