use crate::Notes;
use crate::error::NotesError;
use crate::model::{CreateNote, Note, UpdateNote};
use amora_domain::constants::NOTES_TAG;
use amora_identity::Session;
use amora_kernel::prelude::ApiState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::info;

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = OK, description = "All notes, most recent first", body = [Note]),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = NOTES_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn list_notes(
    _session: Session,
    State(state): State<ApiState>,
) -> Result<Json<Vec<Note>>, NotesError> {
    let slice = state.try_get_slice::<Notes>()?;
    Ok(Json(slice.repository.list().await?))
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNote,
    responses(
        (status = CREATED, description = "Note written", body = Note),
        (status = BAD_REQUEST, description = "Invalid payload"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = NOTES_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn create_note(
    session: Session,
    State(state): State<ApiState>,
    Json(payload): Json<CreateNote>,
) -> Result<(StatusCode, Json<Note>), NotesError> {
    payload.validate()?;

    let slice = state.try_get_slice::<Notes>()?;
    let note = slice.repository.create(payload.content, &session.username).await?;

    info!(id = %note.id, author = %note.author, "Note written");

    Ok((StatusCode::CREATED, Json(note)))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    request_body = UpdateNote,
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = OK, description = "Note updated", body = Note),
        (status = BAD_REQUEST, description = "Invalid payload"),
        (status = NOT_FOUND, description = "No such note"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = NOTES_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn update_note(
    _session: Session,
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNote>,
) -> Result<Json<Note>, NotesError> {
    payload.validate()?;

    let slice = state.try_get_slice::<Notes>()?;
    let note = slice
        .repository
        .update(&id, payload.content)
        .await?
        .ok_or(NotesError::NotFound { id })?;

    info!(id = %note.id, "Note updated");

    Ok(Json(note))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = OK, description = "Note deleted"),
        (status = NOT_FOUND, description = "No such note"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = NOTES_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn delete_note(
    _session: Session,
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, NotesError> {
    let slice = state.try_get_slice::<Notes>()?;

    if !slice.repository.delete(&id).await? {
        return Err(NotesError::NotFound { id });
    }

    info!(%id, "Note deleted");

    Ok(Json(json!({ "success": true })))
}
