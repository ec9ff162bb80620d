use crate::Gallery;
use crate::error::GalleryError;
use crate::model::{CreatePhoto, Photo};
use amora_domain::constants::GALLERY_TAG;
use amora_identity::Session;
use amora_kernel::prelude::ApiState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::info;

#[utoipa::path(
    get,
    path = "/photos",
    responses(
        (status = OK, description = "All photos, newest first", body = [Photo]),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = GALLERY_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn list_photos(
    _session: Session,
    State(state): State<ApiState>,
) -> Result<Json<Vec<Photo>>, GalleryError> {
    let slice = state.try_get_slice::<Gallery>()?;
    Ok(Json(slice.repository.list().await?))
}

#[utoipa::path(
    post,
    path = "/photos",
    request_body = CreatePhoto,
    responses(
        (status = CREATED, description = "Photo added", body = Photo),
        (status = BAD_REQUEST, description = "Invalid payload"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = GALLERY_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn create_photo(
    _session: Session,
    State(state): State<ApiState>,
    Json(payload): Json<CreatePhoto>,
) -> Result<(StatusCode, Json<Photo>), GalleryError> {
    payload.validate()?;

    let slice = state.try_get_slice::<Gallery>()?;
    let photo = slice.repository.create(payload).await?;

    info!(id = %photo.id, "Photo added");

    Ok((StatusCode::CREATED, Json(photo)))
}

#[utoipa::path(
    put,
    path = "/photos/{id}/like",
    params(("id" = String, Path, description = "Photo id")),
    responses(
        (status = OK, description = "Like flag flipped", body = Photo),
        (status = NOT_FOUND, description = "No such photo"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = GALLERY_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn toggle_like(
    _session: Session,
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Photo>, GalleryError> {
    let slice = state.try_get_slice::<Gallery>()?;
    let photo =
        slice.repository.toggle_like(&id).await?.ok_or(GalleryError::NotFound { id })?;

    info!(id = %photo.id, liked = photo.liked, "Photo like toggled");

    Ok(Json(photo))
}

#[utoipa::path(
    delete,
    path = "/photos/{id}",
    params(("id" = String, Path, description = "Photo id")),
    responses(
        (status = OK, description = "Photo deleted"),
        (status = NOT_FOUND, description = "No such photo"),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = GALLERY_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn delete_photo(
    _session: Session,
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, GalleryError> {
    let slice = state.try_get_slice::<Gallery>()?;

    if !slice.repository.delete(&id).await? {
        return Err(GalleryError::NotFound { id });
    }

    info!(%id, "Photo deleted");

    Ok(Json(json!({ "success": true })))
}
