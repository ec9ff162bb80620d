use amora_database::Database;
use amora_domain::config::{ApiConfig, PasskeyEntry};
use amora_kernel::prelude::ApiState;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> (Router, String) {
    let mut config = ApiConfig::default();
    config.security.passkeys.push(PasskeyEntry {
        passkey: "love2023".to_owned(),
        username: "aviral".to_owned(),
    });

    let database = Database::builder()
        .url("mem://")
        .session("amora", "notes_test")
        .init()
        .await
        .expect("in-memory database");

    let identity = amora_identity::init(&config).expect("identity slice");
    let notes = amora_notes::init(database.clone());

    let state = ApiState::builder()
        .config(config)
        .db(database)
        .register_slice(identity)
        .register_slice(notes)
        .build()
        .expect("api state");

    let (app, _docs) = amora_identity::router().merge(amora_notes::router()).split_for_parts();
    let app = app.with_state(state);

    let login = request(Method::POST, "/auth/login", None, Some(json!({ "passkey": "love2023" })));
    let response = app.clone().oneshot(login).await.expect("login response");
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["token"].as_str().expect("token").to_owned();

    (app, token)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn author_comes_from_the_session() {
    let (app, token) = test_app().await;

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/notes",
            Some(&token),
            Some(json!({ "content": "missing you" })),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["author"], "aviral");
    assert_eq!(body["content"], "missing you");
}

#[tokio::test]
async fn create_rejects_blank_content() {
    let (app, token) = test_app().await;

    let response = app
        .oneshot(request(Method::POST, "/notes", Some(&token), Some(json!({ "content": "  " }))))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_replaces_content_only() {
    let (app, token) = test_app().await;

    let created = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/notes",
            Some(&token),
            Some(json!({ "content": "draft" })),
        ))
        .await
        .expect("response");
    let id = body_json(created).await["id"].as_str().expect("id").to_owned();

    let response = app
        .oneshot(request(
            Method::PUT,
            &format!("/notes/{id}"),
            Some(&token),
            Some(json!({ "content": "final" })),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["content"], "final");
    assert_eq!(body["author"], "aviral");
}

#[tokio::test]
async fn delete_then_list_is_empty() {
    let (app, token) = test_app().await;

    let created = app
        .clone()
        .oneshot(request(Method::POST, "/notes", Some(&token), Some(json!({ "content": "bye" }))))
        .await
        .expect("response");
    let id = body_json(created).await["id"].as_str().expect("id").to_owned();

    let response = app
        .clone()
        .oneshot(request(Method::DELETE, &format!("/notes/{id}"), Some(&token), None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let list =
        app.oneshot(request(Method::GET, "/notes", Some(&token), None)).await.expect("response");
    let body = body_json(list).await;
    assert!(body.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn update_unknown_note_is_not_found() {
    let (app, token) = test_app().await;

    let response = app
        .oneshot(request(
            Method::PUT,
            "/notes/zzzzzzzzzzzz",
            Some(&token),
            Some(json!({ "content": "hello" })),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
