use crate::Identity;
use crate::error::IdentityError;
use crate::session::Session;
use amora_domain::constants::AUTH_TAG;
use amora_kernel::prelude::ApiState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

/// Login request carrying one of the configured passkeys.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    passkey: String,
}

/// Successful login payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    username: String,
    token: String,
    /// RFC 3339 expiry of the issued session.
    expires_at: String,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = OK, description = "Session created", body = LoginResponse),
        (status = UNAUTHORIZED, description = "Unknown passkey"),
    ),
    tag = AUTH_TAG,
)]
#[allow(clippy::unused_async)]
pub(crate) async fn login(
    State(state): State<ApiState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, IdentityError> {
    let entry = state
        .config
        .security
        .passkeys
        .iter()
        .find(|entry| entry.passkey == body.passkey)
        .ok_or(IdentityError::Unauthorized { message: "Invalid passkey".into() })?;

    let identity = state.try_get_slice::<Identity>()?;
    let session = identity.sessions.create(&entry.username);

    info!(username = %session.username, "Session created");

    Ok(Json(LoginResponse {
        username: session.username.clone(),
        expires_at: session.expires_at.to_rfc3339(),
        token: session.token,
    }))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = NO_CONTENT, description = "Session discarded"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = AUTH_TAG,
    security(("bearer_token" = [])),
)]
#[allow(clippy::unused_async)]
pub(crate) async fn logout(
    State(state): State<ApiState>,
    session: Session,
) -> Result<StatusCode, IdentityError> {
    state.try_get_slice::<Identity>()?.sessions.invalidate(&session.token);

    info!(username = %session.username, "Session discarded");

    Ok(StatusCode::NO_CONTENT)
}
