use amora_database::DatabaseError;
use amora_kernel::prelude::ApiStateError;
use amora_kernel::security::resource::ResourceGuardError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`GalleryError`] enum of this crate.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Rejected input, e.g. an empty image URL or a malformed date.
    #[error("{message}")]
    Validation { message: Cow<'static, str> },

    /// The referenced photo does not exist.
    #[error("Photo '{id}' not found")]
    NotFound { id: String },

    /// Storage failures.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Missing or invalid shared state.
    #[error(transparent)]
    State(#[from] ApiStateError),
}

impl From<ResourceGuardError> for GalleryError {
    fn from(err: ResourceGuardError) -> Self {
        Self::Validation { message: err.to_string().into() }
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Database(_) | Self::State(_) => {
                tracing::error!(error = %self, "Gallery request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
