use amora_database::DatabaseError;
use amora_kernel::prelude::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`SettingsError`] enum of this crate.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Rejected input, e.g. a malformed date.
    #[error("{message}")]
    Validation { message: Cow<'static, str> },

    /// Storage failures.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Missing or invalid shared state.
    #[error(transparent)]
    State(#[from] ApiStateError),
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Database(_) | Self::State(_) => {
                tracing::error!(error = %self, "Settings request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
