use crate::Timeline;
use crate::error::TimelineError;
use crate::model::{CreateTimelineEvent, TimelineEvent, UpdateTimelineEvent};
use amora_domain::constants::TIMELINE_TAG;
use amora_identity::Session;
use amora_kernel::prelude::ApiState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::info;

#[utoipa::path(
    get,
    path = "/timeline",
    responses(
        (status = OK, description = "All milestones, oldest first", body = [TimelineEvent]),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = TIMELINE_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn list_events(
    _session: Session,
    State(state): State<ApiState>,
) -> Result<Json<Vec<TimelineEvent>>, TimelineError> {
    let slice = state.try_get_slice::<Timeline>()?;
    Ok(Json(slice.repository.list().await?))
}

#[utoipa::path(
    post,
    path = "/timeline",
    request_body = CreateTimelineEvent,
    responses(
        (status = CREATED, description = "Milestone created", body = TimelineEvent),
        (status = BAD_REQUEST, description = "Invalid payload"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = TIMELINE_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn create_event(
    _session: Session,
    State(state): State<ApiState>,
    Json(payload): Json<CreateTimelineEvent>,
) -> Result<(StatusCode, Json<TimelineEvent>), TimelineError> {
    payload.validate()?;

    let slice = state.try_get_slice::<Timeline>()?;
    let event = slice.repository.create(payload).await?;

    info!(id = %event.id, "Timeline event created");

    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    put,
    path = "/timeline/{id}",
    request_body = UpdateTimelineEvent,
    params(("id" = String, Path, description = "Event id")),
    responses(
        (status = OK, description = "Milestone updated", body = TimelineEvent),
        (status = BAD_REQUEST, description = "Invalid payload"),
        (status = NOT_FOUND, description = "No such event"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = TIMELINE_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn update_event(
    _session: Session,
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTimelineEvent>,
) -> Result<Json<TimelineEvent>, TimelineError> {
    payload.validate()?;

    let slice = state.try_get_slice::<Timeline>()?;
    let event = slice
        .repository
        .update(&id, payload)
        .await?
        .ok_or(TimelineError::NotFound { id })?;

    info!(id = %event.id, "Timeline event updated");

    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/timeline/{id}",
    params(("id" = String, Path, description = "Event id")),
    responses(
        (status = OK, description = "Milestone deleted"),
        (status = NOT_FOUND, description = "No such event"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = TIMELINE_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn delete_event(
    _session: Session,
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, TimelineError> {
    let slice = state.try_get_slice::<Timeline>()?;

    if !slice.repository.delete(&id).await? {
        return Err(TimelineError::NotFound { id });
    }

    info!(%id, "Timeline event deleted");

    Ok(Json(json!({ "success": true })))
}
