//! Convenience re-exports for slice crates and applications.

pub use crate::safe_nanoid;
pub use crate::security::resource::ResourceGuard;
pub use crate::server::state::{ApiState, ApiStateBuilder, ApiStateError};
