//! Shared integration-test harness
//!
//! Builds the full API router over a temporary SQLite file (migrations
//! applied) with a fixed JWT secret, and provides request helpers that
//! drive the router directly via `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use church_server::auth::{JwtConfig, JwtService};
use church_server::core::{Config, ServerState};
use church_server::db::DbService;

const TEST_JWT_SECRET: &str = "integration-test-secret-key-0123456789";

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    // Holds the database file alive for the test's duration
    _db_dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let db_dir = tempfile::tempdir().expect("create tempdir");
    let db_path = db_dir.path().join("test.db");
    let db = DbService::new(db_path.to_str().expect("utf8 db path"))
        .await
        .expect("open test database");

    let jwt_config = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiration_minutes: 60,
        issuer: "church-server".to_string(),
        audience: "church-portal".to_string(),
    };
    let config = Config {
        database_path: db_path.to_string_lossy().into_owned(),
        http_port: 0,
        cors_origin: "http://localhost:3000".to_string(),
        jwt: jwt_config.clone(),
        environment: "development".to_string(),
    };

    let state = ServerState::new(
        config,
        db.pool,
        Arc::new(JwtService::with_config(jwt_config)),
    );
    let router = church_server::api::router().with_state(state.clone());

    TestApp {
        router,
        state,
        _db_dir: db_dir,
    }
}

/// Fire a single request at the router and return (status, parsed JSON body).
pub async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("router response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, value)
}

pub async fn get(app: &TestApp, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post(
    app: &TestApp,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    send(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put(
    app: &TestApp,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, token, Some(body)).await
}

/// Register a portal account, returning (token, account JSON).
pub async fn register_account(app: &TestApp, name: &str, email: &str) -> (String, Value) {
    let (status, body) = post(
        app,
        "/api/auth/register",
        None,
        json!({
            "name": name,
            "email": email,
            "password": "a-fine-password",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    let token = body["token"].as_str().expect("token").to_string();
    (token, body["account"].clone())
}

/// Promote an account to Admin directly in storage and mint a matching token.
pub async fn promote_to_admin(app: &TestApp, account: &Value) -> String {
    let id = account["id"].as_i64().expect("account id");
    sqlx::query("UPDATE account SET role = 'Admin' WHERE id = ?")
        .bind(id)
        .execute(&app.state.pool)
        .await
        .expect("promote account");
    app.state
        .jwt_service
        .generate_token(id, account["email"].as_str().expect("email"), "Admin")
        .expect("admin token")
}

/// Submit an intake registration, returning the created member record JSON.
pub async fn register_member(app: &TestApp, name: &str, phone: &str) -> Value {
    let (status, body) = post(
        app,
        "/api/members/register",
        None,
        json!({
            "fullName": name,
            "countryCode": "+1",
            "phoneNumber": phone,
            "email": "intake@example.com",
            "birthMonth": 6,
            "birthDay": 15,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "intake register failed: {body}");
    body["member"].clone()
}
