use amora_database::Database;
use amora_domain::config::{ApiConfig, PasskeyEntry};
use amora_kernel::prelude::ApiState;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app(db_name: &str) -> (Router, String) {
    let mut config = ApiConfig::default();
    config.security.passkeys.push(PasskeyEntry {
        passkey: "love2023".to_owned(),
        username: "aviral".to_owned(),
    });

    let database = Database::builder()
        .url("mem://")
        .session("amora", db_name)
        .init()
        .await
        .expect("in-memory database");

    let identity = amora_identity::init(&config).expect("identity slice");
    let settings = amora_settings::init(database.clone());

    let state = ApiState::builder()
        .config(config)
        .db(database)
        .register_slice(identity)
        .register_slice(settings)
        .build()
        .expect("api state");

    let (app, _docs) = amora_identity::router().merge(amora_settings::router()).split_for_parts();
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
async fn first_read_creates_defaults() {
    let (app, token) = test_app("settings_defaults").await;

    let response =
        app.oneshot(request(Method::GET, "/settings", Some(&token), None)).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["anniversaryDate"], "2021-08-15");
    assert!(body["anniversaryMessage"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(body["birthdayDate"].is_null());
}

#[tokio::test]
async fn partial_update_merges() {
    let (app, token) = test_app("settings_merge").await;

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            "/settings",
            Some(&token),
            Some(json!({ "birthdayDate": "1999-03-22" })),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["birthdayDate"], "1999-03-22");
    // Untouched fields keep their defaults.
    assert_eq!(body["anniversaryDate"], "2021-08-15");

    // A later update does not clobber the earlier one.
    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            "/settings",
            Some(&token),
            Some(json!({ "anniversaryDate": "2020-02-29" })),
        ))
        .await
        .expect("response");
    let body = body_json(response).await;
    assert_eq!(body["anniversaryDate"], "2020-02-29");
    assert_eq!(body["birthdayDate"], "1999-03-22");
}

#[tokio::test]
async fn malformed_dates_are_rejected() {
    let (app, token) = test_app("settings_validation").await;

    let response = app
        .oneshot(request(
            Method::PUT,
            "/settings",
            Some(&token),
            Some(json!({ "anniversaryDate": "15-08-2021" })),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn settings_require_a_session() {
    let (app, _token) = test_app("settings_auth").await;

    let response =
        app.oneshot(request(Method::GET, "/settings", None, None)).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
