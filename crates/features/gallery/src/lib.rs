//! Gallery feature slice: CRUD over shared photos plus a like toggle.

mod error;
mod model;
mod repository;
mod routes;

pub use crate::error::GalleryError;
pub use crate::model::{CreatePhoto, Photo};

use crate::repository::GalleryRepository;
use amora_database::Database;
use amora_domain::registry::{FeatureSlice, InitializedSlice};
use amora_kernel::prelude::ApiState;
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug)]
pub struct GalleryInner {
    pub(crate) repository: GalleryRepository,
}

/// Gallery feature state.
#[derive(Debug, Clone)]
pub struct Gallery {
    inner: Arc<GalleryInner>,
}

impl Deref for Gallery {
    type Target = GalleryInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Gallery {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the gallery feature.
pub fn init(database: Database) -> InitializedSlice {
    tracing::info!("Gallery slice initialized");

    let inner = GalleryInner { repository: GalleryRepository::new(database) };

    InitializedSlice::new(Gallery { inner: Arc::new(inner) })
}

/// Routes owned by this slice, nested under `/api` by the facade.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(routes::list_photos, routes::create_photo))
        .routes(routes!(routes::toggle_like))
        .routes(routes!(routes::delete_photo))
}
