use super::AppRouter;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use shared::test_support::MemoryStore;
use tower::ServiceExt;

async fn app() -> Router {
    AppRouter::build(MemoryStore::new().app_state().await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn register(app: &Router, email: &str, role: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/register",
        Some(json!({
            "email": email,
            "password": "password123",
            "role": role,
            "first_name": "Grace",
            "last_name": "Hopper",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"].clone()
}

async fn company_with_posting(app: &Router) -> (i64, i64) {
    let user = register(app, "a@co.com", "company").await;
    let (_, company) = send(
        app,
        Method::POST,
        "/api/company-profiles",
        Some(json!({ "user_id": user["id"], "company_name": "Acme" })),
    )
    .await;
    let company_id = company["data"]["id"].as_i64().unwrap();

    let (status, posting) = send(
        app,
        Method::POST,
        "/api/job-postings",
        Some(json!({
            "company_id": company_id,
            "title": "Intern",
            "description": "Learn the ropes",
            "type": "internship",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{posting}");

    (company_id, posting["data"]["id"].as_i64().unwrap())
}

async fn seeker(app: &Router, email: &str) -> i64 {
    let user = register(app, email, "job_seeker").await;
    let (status, profile) = send(
        app,
        Method::POST,
        "/api/job-seeker-profiles",
        Some(json!({ "user_id": user["id"], "bio": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{profile}");
    assert!(profile["data"]["bio"].is_null());
    profile["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn register_and_login_never_expose_the_hash() {
    let app = app().await;
    let user = register(&app, "grace@example.com", "administrator").await;
    assert!(user.get("password_hash").is_none());
    assert_eq!(user["role"], "administrator");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "grace@example.com", "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["id"], user["id"]);
    assert!(body["data"].get("password_hash").is_none());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "grace@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn register_validates_and_rejects_duplicates() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({
            "email": "not-an-email",
            "password": "short",
            "role": "job_seeker",
            "first_name": "Grace",
            "last_name": "Hopper",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["email"].is_array());
    assert!(body["details"]["password"].is_array());

    register(&app, "dup@example.com", "job_seeker").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({
            "email": "dup@example.com",
            "password": "password123",
            "role": "company",
            "first_name": "Grace",
            "last_name": "Hopper",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Email is already registered");
}

#[tokio::test]
async fn deactivated_posting_leaves_search_results() {
    let app = app().await;
    let (_, posting_id) = company_with_posting(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/job-postings/search", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "Intern");
    assert_eq!(body["data"][0]["type"], "internship");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/job-postings/{posting_id}"),
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["title"], "Intern");

    let (_, body) = send(&app, Method::GET, "/api/job-postings/search", None).await;
    assert_eq!(body["data"], json!([]));

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/job-postings/{posting_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_active"], false);
}

#[tokio::test]
async fn search_query_parameters_are_validated_and_applied() {
    let app = app().await;
    company_with_posting(&app).await;

    let (status, _) = send(&app, Method::GET, "/api/job-postings/search?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/job-postings/search?type=volunteer",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/job-postings/search?query=ROPES&limit=5",
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn null_is_rejected_for_required_posting_fields() {
    let app = app().await;
    let (_, posting_id) = company_with_posting(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/job-postings/{posting_id}"),
        Some(json!({ "title": null })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["title"].is_array());

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/job-postings/999999",
        Some(json!({ "location": null })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn application_flow_over_http() {
    let app = app().await;
    let (_, posting_id) = company_with_posting(&app).await;
    let seeker_id = seeker(&app, "s@example.com").await;
    let apply = json!({ "job_posting_id": posting_id, "job_seeker_id": seeker_id });

    let (status, body) = send(&app, Method::POST, "/api/job-applications", Some(apply.clone())).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["status"], "pending");
    let application_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::POST, "/api/job-applications", Some(apply)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "You have already applied for this job");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/job-applications/{application_id}/status"),
        Some(json!({ "status": "accepted" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "accepted");

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/job-applications/seeker/{seeker_id}"),
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["status"], "accepted");

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/job-applications/job/{posting_id}/details"),
        None,
    )
    .await;
    assert_eq!(body["data"][0]["job_seeker_name"], "Grace Hopper");
    assert_eq!(body["data"][0]["job_seeker_email"], "s@example.com");

    let (_, body) = send(&app, Method::GET, "/api/job-applications", None).await;
    assert_eq!(body["data"][0]["company_name"], "Acme");
    assert_eq!(body["data"][0]["company_verification_status"], "pending");
}

#[tokio::test]
async fn applying_to_a_missing_posting_is_not_found() {
    let app = app().await;
    let seeker_id = seeker(&app, "s@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/job-applications",
        Some(json!({ "job_posting_id": 999999, "job_seeker_id": seeker_id })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Job posting not found");
}

#[tokio::test]
async fn company_verification_over_http() {
    let app = app().await;
    let (company_id, _) = company_with_posting(&app).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/company-profiles/{company_id}/verification"),
        Some(json!({ "status": "pending" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/company-profiles/{company_id}/verification"),
        Some(json!({ "status": "verified" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["verification_status"], "verified");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/company-profiles/999999/credentials",
        Some(json!({ "credentials_file_url": "https://files.test/x.pdf" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_rows_are_null_or_false() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/users/999999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    let (status, body) = send(&app, Method::DELETE, "/api/users/999999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], false);

    let (status, body) = send(&app, Method::DELETE, "/api/job-postings/999999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], false);

    let (_, body) = send(&app, Method::GET, "/api/company-profiles/user/999999", None).await;
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn deleting_the_company_user_removes_its_postings() {
    let app = app().await;
    let (company_id, _) = company_with_posting(&app).await;
    let (_, users) = send(&app, Method::GET, "/api/users", None).await;
    let user_id = users["data"][0]["id"].as_i64().unwrap();

    let (_, body) = send(&app, Method::DELETE, &format!("/api/users/{user_id}"), None).await;
    assert_eq!(body["data"], true);

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/job-postings/company/{company_id}"),
        None,
    )
    .await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn health_metrics_and_docs_are_served() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/job-postings/search"].is_object());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("application/openmetrics-text"));
}
