//! Facade crate for Amora features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register all feature slices against a config and database.
//! - Use [`server::router::api_router`] for the composed `/api` routes.

use amora_database::Database;
pub use amora_domain as domain;
use amora_domain::config::ApiConfig;
pub use amora_kernel as kernel;

pub mod server {
    pub mod router {
        pub use amora_kernel::server::router::system_router;

        use amora_kernel::prelude::ApiState;
        use utoipa_axum::router::OpenApiRouter;

        /// All feature routes, ready to be nested under `/api`.
        #[must_use]
        pub fn api_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new()
                .merge(crate::features::identity::router())
                .merge(crate::features::anniversary::router())
                .merge(crate::features::timeline::router())
                .merge(crate::features::gallery::router())
                .merge(crate::features::notes::router())
                .merge(crate::features::settings::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use amora_anniversary as anniversary;
    pub use amora_gallery as gallery;
    pub use amora_identity as identity;
    pub use amora_notes as notes;
    pub use amora_settings as settings;
    pub use amora_timeline as timeline;

    /// Compiled-in feature slices.
    pub const ENABLED: &[&str] =
        &["identity", "anniversary", "timeline", "gallery", "notes", "settings"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
    database: &Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let slices = vec![
        features::identity::init(config)?,
        features::anniversary::init(database.clone()),
        features::timeline::init(database.clone()),
        features::gallery::init(database.clone()),
        features::notes::init(database.clone()),
        features::settings::init(database.clone()),
    ];

    Ok(slices)
}
