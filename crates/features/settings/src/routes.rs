use crate::Sitewide;
use crate::error::SettingsError;
use crate::model::{Settings, UpdateSettings};
use amora_domain::constants::SETTINGS_TAG;
use amora_identity::Session;
use amora_kernel::prelude::ApiState;
use axum::Json;
use axum::extract::State;
use tracing::info;

#[utoipa::path(
    get,
    path = "/settings",
    responses(
        (status = OK, description = "Current settings (created with defaults on first read)", body = Settings),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = SETTINGS_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn get_settings(
    _session: Session,
    State(state): State<ApiState>,
) -> Result<Json<Settings>, SettingsError> {
    let slice = state.try_get_slice::<Sitewide>()?;
    Ok(Json(slice.repository.get_or_create().await?))
}

#[utoipa::path(
    put,
    path = "/settings",
    request_body = UpdateSettings,
    responses(
        (status = OK, description = "Settings merged", body = Settings),
        (status = BAD_REQUEST, description = "Invalid payload"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = SETTINGS_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn update_settings(
    _session: Session,
    State(state): State<ApiState>,
    Json(payload): Json<UpdateSettings>,
) -> Result<Json<Settings>, SettingsError> {
    payload.validate()?;

    let slice = state.try_get_slice::<Sitewide>()?;
    let settings = slice.repository.merge(payload).await?;

    info!("Settings updated");

    Ok(Json(settings))
}
