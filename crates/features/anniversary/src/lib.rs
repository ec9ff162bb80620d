//! Anniversary feature slice: the countdown to the next anniversary and the
//! elapsed time since the first one, computed server-side from the stored
//! settings record.

mod countdown;
mod duration;
mod error;
mod repository;
mod routes;

pub use crate::countdown::{Countdown, compute_countdown};
pub use crate::duration::{DurationSince, compute_duration};
pub use crate::error::AnniversaryError;

use crate::repository::AnniversaryRepository;
use amora_database::Database;
use amora_domain::registry::{FeatureSlice, InitializedSlice};
use amora_kernel::prelude::ApiState;
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug)]
pub struct AnniversaryInner {
    pub(crate) repository: AnniversaryRepository,
}

/// Anniversary feature state.
#[derive(Debug, Clone)]
pub struct Anniversary {
    inner: Arc<AnniversaryInner>,
}

impl Deref for Anniversary {
    type Target = AnniversaryInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Anniversary {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the anniversary feature.
pub fn init(database: Database) -> InitializedSlice {
    tracing::info!("Anniversary slice initialized");

    let inner = AnniversaryInner { repository: AnniversaryRepository::new(database) };

    InitializedSlice::new(Anniversary { inner: Arc::new(inner) })
}

/// Routes owned by this slice, nested under `/api` by the facade.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(routes::get_anniversary))
}
