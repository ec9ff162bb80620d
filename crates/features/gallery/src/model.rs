use crate::error::GalleryError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A photo in the shared gallery. The image itself lives elsewhere;
/// `image_url` is an opaque reference.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub image_url: String,
    pub liked: bool,
    /// RFC 3339, set server-side.
    pub created_at: String,
}

/// Payload for adding a photo.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePhoto {
    pub title: String,
    pub date: String,
    pub image_url: String,
}

impl CreatePhoto {
    pub(crate) fn validate(&self) -> Result<(), GalleryError> {
        if self.title.trim().is_empty() {
            return Err(GalleryError::Validation { message: "Title must not be empty".into() });
        }
        if self.image_url.trim().is_empty() {
            return Err(GalleryError::Validation {
                message: "Image URL must not be empty".into(),
            });
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| {
            GalleryError::Validation {
                message: format!("Date '{}' is not in YYYY-MM-DD format", self.date).into(),
            }
        })?;
        Ok(())
    }
}
