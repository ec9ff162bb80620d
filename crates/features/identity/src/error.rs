use amora_kernel::prelude::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`IdentityError`] enum of this crate.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Configuration errors for identity/authentication.
    #[error("Identity config error: {message}")]
    Config { message: Cow<'static, str> },

    /// Rejected credentials or sessions.
    #[error("{message}")]
    Unauthorized { message: Cow<'static, str> },

    /// Missing or invalid shared state.
    #[error(transparent)]
    State(#[from] ApiStateError),

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal identity error: {message}")]
    Internal { message: Cow<'static, str> },
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::Config { .. } | Self::State(_) | Self::Internal { .. } => {
                tracing::error!(error = %self, "Identity request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
