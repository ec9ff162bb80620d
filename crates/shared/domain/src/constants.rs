//! Shared constants for API tags and couple-site defaults.

/// OpenAPI tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for authentication endpoints.
pub const AUTH_TAG: &str = "Auth";
/// OpenAPI tag for the anniversary countdown endpoint.
pub const ANNIVERSARY_TAG: &str = "Anniversary";
/// OpenAPI tag for timeline endpoints.
pub const TIMELINE_TAG: &str = "Timeline";
/// OpenAPI tag for photo gallery endpoints.
pub const GALLERY_TAG: &str = "Gallery";
/// OpenAPI tag for shared notes endpoints.
pub const NOTES_TAG: &str = "Notes";
/// OpenAPI tag for settings endpoints.
pub const SETTINGS_TAG: &str = "Settings";

/// Anniversary date used when no settings record exists yet.
pub const DEFAULT_ANNIVERSARY_DATE: &str = "2021-08-15";

/// Message shown on the anniversary day when none is configured.
pub const DEFAULT_ANNIVERSARY_MESSAGE: &str = "Today marks another beautiful year of our \
    journey together. Every moment with you has been a blessing. Here's to many more years \
    of love, laughter, and creating precious memories.";
