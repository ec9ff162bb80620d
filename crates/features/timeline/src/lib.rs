//! Timeline feature slice: CRUD over relationship milestones, listed
//! chronologically.

mod error;
mod model;
mod repository;
mod routes;

pub use crate::error::TimelineError;
pub use crate::model::{CreateTimelineEvent, TimelineEvent, UpdateTimelineEvent};

use crate::repository::TimelineRepository;
use amora_database::Database;
use amora_domain::registry::{FeatureSlice, InitializedSlice};
use amora_kernel::prelude::ApiState;
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug)]
pub struct TimelineInner {
    pub(crate) repository: TimelineRepository,
}

/// Timeline feature state.
#[derive(Debug, Clone)]
pub struct Timeline {
    inner: Arc<TimelineInner>,
}

impl Deref for Timeline {
    type Target = TimelineInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Timeline {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the timeline feature.
pub fn init(database: Database) -> InitializedSlice {
    tracing::info!("Timeline slice initialized");

    let inner = TimelineInner { repository: TimelineRepository::new(database) };

    InitializedSlice::new(Timeline { inner: Arc::new(inner) })
}

/// Routes owned by this slice, nested under `/api` by the facade.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(routes::list_events, routes::create_event))
        .routes(routes!(routes::update_event, routes::delete_event))
}
