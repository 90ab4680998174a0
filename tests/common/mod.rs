use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use coursedeck::config::cors::CorsConfig;
use coursedeck::config::jwt::JwtConfig;
use coursedeck::modules::users::model::{NewUser, Role};
use coursedeck::router::init_router;
use coursedeck::state::AppState;
use coursedeck::store::UserStore;
use coursedeck::store::memory::MemoryStore;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

/// Builds an app over a fresh in-memory store. The store handle is
/// returned alongside so tests can seed records directly.
pub fn setup_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        jwt_config: JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    };
    (init_router(state), store)
}

/// Fires one request at the app and returns status plus parsed JSON body
/// (null when the body is empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        // Most endpoints answer with JSON; extractor rejections (e.g. a
        // malformed request body) come back as plain text. Fall back to the
        // raw string rather than panicking so status-only assertions still run.
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

/// Obtains a token for `email` through the real issuance endpoint.
pub async fn issue_token(app: &Router, email: &str) -> String {
    let (status, body) = send(app, "POST", "/jwt", None, Some(json!({ "email": email }))).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token in response").to_string()
}

/// Seeds a user with an arbitrary role straight into the store, bypassing
/// the registration endpoint (which always creates students).
#[allow(dead_code)]
pub async fn seed_user(store: &MemoryStore, email: &str, role: Role) {
    store
        .insert_user(NewUser {
            name: "Seeded User".to_string(),
            email: email.to_string(),
            photo_url: None,
            role,
        })
        .await
        .unwrap();
}

/// Registers a user through the API and returns the created record.
#[allow(dead_code)]
pub async fn register_user(app: &Router, email: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/users",
        None,
        Some(json!({ "name": "Test User", "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}
