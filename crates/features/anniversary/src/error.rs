use amora_database::DatabaseError;
use amora_kernel::prelude::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`AnniversaryError`] enum of this crate.
#[derive(Debug, Error)]
pub enum AnniversaryError {
    /// Storage failures while loading settings.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Missing or invalid shared state.
    #[error(transparent)]
    State(#[from] ApiStateError),

    /// Internal fallback, e.g. a stored date that no longer parses.
    #[error("Internal anniversary error: {message}")]
    Internal { message: Cow<'static, str> },
}

impl IntoResponse for AnniversaryError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Anniversary request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "Internal server error" })))
            .into_response()
    }
}
