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
        .session("amora", "timeline_test")
        .init()
        .await
        .expect("in-memory database");

    let identity = amora_identity::init(&config).expect("identity slice");
    let timeline = amora_timeline::init(database.clone());

    let state = ApiState::builder()
        .config(config)
        .db(database)
        .register_slice(identity)
        .register_slice(timeline)
        .build()
        .expect("api state");

    let (app, _docs) = amora_identity::router().merge(amora_timeline::router()).split_for_parts();
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

fn event_payload(title: &str, date: &str) -> Value {
    json!({
        "title": title,
        "date": date,
        "description": "a day to remember",
        "location": "Jaipur",
    })
}

#[tokio::test]
async fn list_requires_a_session() {
    let (app, _token) = test_app().await;

    let response =
        app.oneshot(request(Method::GET, "/timeline", None, None)).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_then_list_sorted_by_date() {
    let (app, token) = test_app().await;

    for (title, date) in [("Second", "2022-05-01"), ("First", "2021-08-15")] {
        let response = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/timeline",
                Some(&token),
                Some(event_payload(title, date)),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["title"], title);
        assert_eq!(body["id"].as_str().expect("id").len(), 12);
        assert!(body["createdAt"].as_str().is_some());
    }

    let response = app
        .oneshot(request(Method::GET, "/timeline", Some(&token), None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let events = body.as_array().expect("array");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["title"], "First");
    assert_eq!(events[1]["title"], "Second");
}

#[tokio::test]
async fn create_rejects_malformed_date() {
    let (app, token) = test_app().await;

    let response = app
        .oneshot(request(
            Method::POST,
            "/timeline",
            Some(&token),
            Some(event_payload("Trip", "15/08/2021")),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_merges_partial_payload() {
    let (app, token) = test_app().await;

    let created = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/timeline",
            Some(&token),
            Some(event_payload("Original", "2022-01-01")),
        ))
        .await
        .expect("response");
    let id = body_json(created).await["id"].as_str().expect("id").to_owned();

    let response = app
        .oneshot(request(
            Method::PUT,
            &format!("/timeline/{id}"),
            Some(&token),
            Some(json!({ "title": "Renamed" })),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["date"], "2022-01-01");
    assert_eq!(body["location"], "Jaipur");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let (app, token) = test_app().await;

    let response = app
        .oneshot(request(
            Method::PUT,
            "/timeline/zzzzzzzzzzzz",
            Some(&token),
            Some(json!({ "title": "Renamed" })),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_event() {
    let (app, token) = test_app().await;

    let created = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/timeline",
            Some(&token),
            Some(event_payload("Gone", "2022-01-01")),
        ))
        .await
        .expect("response");
    let id = body_json(created).await["id"].as_str().expect("id").to_owned();

    let response = app
        .clone()
        .oneshot(request(Method::DELETE, &format!("/timeline/{id}"), Some(&token), None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let again = app
        .oneshot(request(Method::DELETE, &format!("/timeline/{id}"), Some(&token), None))
        .await
        .expect("response");
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn foreign_table_ids_are_rejected() {
    let (app, token) = test_app().await;

    let response = app
        .oneshot(request(Method::DELETE, "/timeline/note:abc", Some(&token), None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
