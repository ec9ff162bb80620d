//! Identity feature slice: passkey login, bearer-token sessions, and the
//! [`Session`] extractor the other slices guard their routes with.

mod error;
mod routes;
mod session;

pub use crate::error::IdentityError;
pub use crate::session::Session;

use crate::session::SessionStore;
use amora_domain::config::ApiConfig;
use amora_domain::registry::{FeatureSlice, InitializedSlice};
use amora_kernel::prelude::ApiState;
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug)]
pub struct IdentityInner {
    pub(crate) sessions: SessionStore,
}

/// Identity feature state.
#[derive(Debug, Clone)]
pub struct Identity {
    inner: Arc<IdentityInner>,
}

impl Deref for Identity {
    type Target = IdentityInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Identity {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the identity feature.
///
/// # Errors
/// Returns [`IdentityError::Config`] if no passkeys are configured, since
/// nobody could ever log in.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, IdentityError> {
    if config.security.passkeys.is_empty() {
        return Err(IdentityError::Config { message: "No passkeys configured".into() });
    }

    let sessions = SessionStore::new(&config.security.sessions);
    tracing::info!(passkeys = config.security.passkeys.len(), "Identity slice initialized");

    Ok(InitializedSlice::new(Identity { inner: Arc::new(IdentityInner { sessions }) }))
}

/// Routes owned by this slice, nested under `/api` by the facade.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(routes::login)).routes(routes!(routes::logout))
}
