//! Settings feature slice: the singleton record holding the anniversary and
//! birthday configuration the rest of the site renders from.

mod error;
mod model;
mod repository;
mod routes;

pub use crate::error::SettingsError;
pub use crate::model::{Settings, UpdateSettings};

use crate::repository::SettingsRepository;
use amora_database::Database;
use amora_domain::registry::{FeatureSlice, InitializedSlice};
use amora_kernel::prelude::ApiState;
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug)]
pub struct SitewideInner {
    pub(crate) repository: SettingsRepository,
}

/// Settings feature state. Named to avoid clashing with the [`Settings`]
/// record it serves.
#[derive(Debug, Clone)]
pub struct Sitewide {
    inner: Arc<SitewideInner>,
}

impl Deref for Sitewide {
    type Target = SitewideInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Sitewide {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the settings feature.
pub fn init(database: Database) -> InitializedSlice {
    tracing::info!("Settings slice initialized");

    let inner = SitewideInner { repository: SettingsRepository::new(database) };

    InitializedSlice::new(Sitewide { inner: Arc::new(inner) })
}

/// Routes owned by this slice, nested under `/api` by the facade.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(routes::get_settings, routes::update_settings))
}
