use amora_database::Database;
use amora_domain::config::{ApiConfig, PasskeyEntry};
use amora_identity::{init, router};
use amora_kernel::prelude::ApiState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> Router {
    let mut config = ApiConfig::default();
    config.security.passkeys.push(PasskeyEntry {
        passkey: "love2023".to_owned(),
        username: "aviral".to_owned(),
    });

    let database = Database::builder()
        .url("mem://")
        .session("amora", "identity_test")
        .init()
        .await
        .expect("in-memory database");

    let slice = init(&config).expect("identity slice");
    let state = ApiState::builder()
        .config(config)
        .db(database)
        .register_slice(slice)
        .build()
        .expect("api state");

    let (app, _docs) = router().split_for_parts();
    app.with_state(state)
}

fn login_request(passkey: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "passkey": passkey }).to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn login_with_known_passkey_issues_session() {
    let app = test_app().await;

    let response = app.oneshot(login_request("love2023")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], "aviral");
    assert_eq!(body["token"].as_str().expect("token").len(), 32);
    assert!(body["expiresAt"].as_str().is_some());
}

#[tokio::test]
async fn login_with_unknown_passkey_is_rejected() {
    let app = test_app().await;

    let response = app.oneshot(login_request("wrong")).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid passkey");
}

#[tokio::test]
async fn logout_discards_the_session() {
    let app = test_app().await;

    let login = app.clone().oneshot(login_request("love2023")).await.expect("response");
    let token = body_json(login).await["token"].as_str().expect("token").to_owned();

    let logout = Request::builder()
        .method("POST")
        .uri("/auth/logout")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(logout).await.expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The token no longer resolves to a session.
    let again = Request::builder()
        .method("POST")
        .uri("/auth/logout")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(again).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_token_is_rejected() {
    let app = test_app().await;

    let request =
        Request::builder().method("POST").uri("/auth/logout").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
