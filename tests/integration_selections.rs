mod common;

use axum::http::StatusCode;
use common::{issue_token, send, setup_test_app};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

fn selection_body(class_id: Uuid, email: &str) -> serde_json::Value {
    json!({ "classId": class_id, "userEmail": email })
}

#[tokio::test]
async fn test_add_selection_twice_is_idempotent() {
    let (app, _store) = setup_test_app();
    let class_id = Uuid::new_v4();

    let (status, created) = send(
        &app,
        "POST",
        "/selected",
        None,
        Some(selection_body(class_id, "a@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["userEmail"], json!("a@x.com"));

    let (status, body) = send(
        &app,
        "POST",
        "/selected",
        None,
        Some(selection_body(class_id, "a@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "class already selected" }));

    let token = issue_token(&app, "a@x.com").await;
    let (_, body) = send(&app, "GET", "/selected/a@x.com", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_same_class_selectable_by_different_users() {
    let (app, _store) = setup_test_app();
    let class_id = Uuid::new_v4();

    for email in ["a@x.com", "b@x.com"] {
        let (status, _) = send(
            &app,
            "POST",
            "/selected",
            None,
            Some(selection_body(class_id, email)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_concurrent_adds_store_exactly_one_record() {
    let (app, _store) = setup_test_app();
    let class_id = Uuid::new_v4();

    let request = |app: axum::Router| async move {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/selected")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(
                serde_json::to_string(&selection_body(class_id, "a@x.com")).unwrap(),
            ))
            .unwrap();
        app.oneshot(req).await.unwrap().status()
    };

    let (first, second) = tokio::join!(request(app.clone()), request(app.clone()));

    // One caller created, the other hit the unique key; neither errored.
    let statuses = [first, second];
    assert!(statuses.contains(&StatusCode::CREATED));
    assert!(statuses.iter().all(|s| s.is_success()));

    let token = issue_token(&app, "a@x.com").await;
    let (_, body) = send(&app, "GET", "/selected/a@x.com", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_selections_requires_ownership() {
    let (app, _store) = setup_test_app();
    send(
        &app,
        "POST",
        "/selected",
        None,
        Some(selection_body(Uuid::new_v4(), "a@x.com")),
    )
    .await;

    let token = issue_token(&app, "a@x.com").await;
    let (status, body) = send(&app, "GET", "/selected/a@x.com", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // A mismatched token gets a refusal, not an empty list.
    let other = issue_token(&app, "b@x.com").await;
    let (status, body) = send(&app, "GET", "/selected/a@x.com", Some(&other), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!(true));

    let (status, _) = send(&app, "GET", "/selected/a@x.com", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_remove_selection_requires_ownership() {
    let (app, _store) = setup_test_app();
    let (_, created) = send(
        &app,
        "POST",
        "/selected",
        None,
        Some(selection_body(Uuid::new_v4(), "a@x.com")),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "DELETE", &format!("/selected/{id}"), None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let other = issue_token(&app, "b@x.com").await;
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/selected/{id}"),
        Some(&other),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let owner = issue_token(&app, "a@x.com").await;
    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/selected/{id}"),
        Some(&owner),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("selection removed"));

    let (_, body) = send(&app, "GET", "/selected/a@x.com", Some(&owner), None).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_unknown_selection() {
    let (app, _store) = setup_test_app();

    let token = issue_token(&app, "a@x.com").await;
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/selected/{}", Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_selection_rejects_invalid_email() {
    let (app, _store) = setup_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/selected",
        None,
        Some(json!({ "classId": Uuid::new_v4(), "userEmail": "nope" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
