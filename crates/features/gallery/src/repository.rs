use crate::error::GalleryError;
use crate::model::{CreatePhoto, Photo};
use amora_database::{Database, DatabaseError};
use amora_kernel::prelude::ResourceGuard;
use amora_kernel::safe_nanoid;
use chrono::Utc;

const TABLE: &str = "photo";
const FIELDS: &str = "record::id(id) AS id, title, date, imageUrl, liked, createdAt";

#[derive(Debug)]
pub(crate) struct GalleryRepository {
    db: Database,
}

impl GalleryRepository {
    pub(crate) const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Lists all photos, newest first.
    pub(crate) async fn list(&self) -> Result<Vec<Photo>, GalleryError> {
        let photos = self
            .db
            .query(format!("SELECT {FIELDS} FROM {TABLE} ORDER BY date DESC"))
            .await
            .map_err(DatabaseError::from)?
            .take::<Vec<Photo>>(0)
            .map_err(DatabaseError::from)?;

        Ok(photos)
    }

    pub(crate) async fn create(&self, payload: CreatePhoto) -> Result<Photo, GalleryError> {
        let photo = Photo {
            id: safe_nanoid!(),
            title: payload.title,
            date: payload.date,
            image_url: payload.image_url,
            liked: false,
            created_at: Utc::now().to_rfc3339(),
        };

        self.db
            .query(format!(
                "CREATE type::thing('{TABLE}', $id) SET title = $title, date = $date, \
                 imageUrl = $image_url, liked = $liked, createdAt = $created_at"
            ))
            .bind(("id", photo.id.clone()))
            .bind(("title", photo.title.clone()))
            .bind(("date", photo.date.clone()))
            .bind(("image_url", photo.image_url.clone()))
            .bind(("liked", photo.liked))
            .bind(("created_at", photo.created_at.clone()))
            .await
            .map_err(DatabaseError::from)?
            .check()
            .map_err(DatabaseError::from)?;

        Ok(photo)
    }

    /// Flips the photo's `liked` flag. `None` means the photo does not exist.
    pub(crate) async fn toggle_like(&self, id: &str) -> Result<Option<Photo>, GalleryError> {
        let key = ResourceGuard::verify(id, TABLE)?;

        let photo = self
            .db
            .query(format!("UPDATE type::thing('{TABLE}', $id) SET liked = !liked"))
            .query(format!("SELECT {FIELDS} FROM type::thing('{TABLE}', $id)"))
            .bind(("id", key))
            .await
            .map_err(DatabaseError::from)?
            .take::<Vec<Photo>>(1)
            .map_err(DatabaseError::from)?
            .into_iter()
            .next();

        Ok(photo)
    }

    /// Deletes the photo; `false` means it did not exist.
    pub(crate) async fn delete(&self, id: &str) -> Result<bool, GalleryError> {
        let key = ResourceGuard::verify(id, TABLE)?;

        let existing = self
            .db
            .query(format!("SELECT VALUE record::id(id) FROM type::thing('{TABLE}', $id)"))
            .query(format!("DELETE type::thing('{TABLE}', $id)"))
            .bind(("id", key))
            .await
            .map_err(DatabaseError::from)?
            .take::<Vec<String>>(0)
            .map_err(DatabaseError::from)?;

        Ok(!existing.is_empty())
    }
}
