//! Notes feature slice: short messages the two leave for each other.
//! Authorship is taken from the session, never from the payload.

mod error;
mod model;
mod repository;
mod routes;

pub use crate::error::NotesError;
pub use crate::model::{CreateNote, Note, UpdateNote};

use crate::repository::NotesRepository;
use amora_database::Database;
use amora_domain::registry::{FeatureSlice, InitializedSlice};
use amora_kernel::prelude::ApiState;
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug)]
pub struct NotesInner {
    pub(crate) repository: NotesRepository,
}

/// Notes feature state.
#[derive(Debug, Clone)]
pub struct Notes {
    inner: Arc<NotesInner>,
}

impl Deref for Notes {
    type Target = NotesInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Notes {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the notes feature.
pub fn init(database: Database) -> InitializedSlice {
    tracing::info!("Notes slice initialized");

    let inner = NotesInner { repository: NotesRepository::new(database) };

    InitializedSlice::new(Notes { inner: Arc::new(inner) })
}

/// Routes owned by this slice, nested under `/api` by the facade.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(routes::list_notes, routes::create_note))
        .routes(routes!(routes::update_note, routes::delete_note))
}
