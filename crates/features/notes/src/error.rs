use amora_database::DatabaseError;
use amora_kernel::prelude::ApiStateError;
use amora_kernel::security::resource::ResourceGuardError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`NotesError`] enum of this crate.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Rejected input, e.g. empty content.
    #[error("{message}")]
    Validation { message: Cow<'static, str> },

    /// The referenced note does not exist.
    #[error("Note '{id}' not found")]
    NotFound { id: String },

    /// Storage failures.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Missing or invalid shared state.
    #[error(transparent)]
    State(#[from] ApiStateError),
}

impl From<ResourceGuardError> for NotesError {
    fn from(err: ResourceGuardError) -> Self {
        Self::Validation { message: err.to_string().into() }
    }
}

impl IntoResponse for NotesError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Database(_) | Self::State(_) => {
                tracing::error!(error = %self, "Notes request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
