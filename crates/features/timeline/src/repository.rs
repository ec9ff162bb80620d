use crate::error::TimelineError;
use crate::model::{CreateTimelineEvent, TimelineEvent, UpdateTimelineEvent};
use amora_database::{Database, DatabaseError};
use amora_kernel::prelude::ResourceGuard;
use amora_kernel::safe_nanoid;
use chrono::Utc;

const TABLE: &str = "timeline_event";
const FIELDS: &str = "record::id(id) AS id, title, date, description, location, imageUrl, createdAt";

#[derive(Debug)]
pub(crate) struct TimelineRepository {
    db: Database,
}

impl TimelineRepository {
    pub(crate) const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Lists all events, oldest milestone first.
    pub(crate) async fn list(&self) -> Result<Vec<TimelineEvent>, TimelineError> {
        let events = self
            .db
            .query(format!("SELECT {FIELDS} FROM {TABLE} ORDER BY date ASC"))
            .await
            .map_err(DatabaseError::from)?
            .take::<Vec<TimelineEvent>>(0)
            .map_err(DatabaseError::from)?;

        Ok(events)
    }

    pub(crate) async fn create(
        &self,
        payload: CreateTimelineEvent,
    ) -> Result<TimelineEvent, TimelineError> {
        let event = TimelineEvent {
            id: safe_nanoid!(),
            title: payload.title,
            date: payload.date,
            description: payload.description,
            location: payload.location,
            image_url: payload.image_url,
            created_at: Utc::now().to_rfc3339(),
        };

        self.db
            .query(format!(
                "CREATE type::thing('{TABLE}', $id) SET title = $title, date = $date, \
                 description = $description, location = $location, imageUrl = $image_url, \
                 createdAt = $created_at"
            ))
            .bind(("id", event.id.clone()))
            .bind(("title", event.title.clone()))
            .bind(("date", event.date.clone()))
            .bind(("description", event.description.clone()))
            .bind(("location", event.location.clone()))
            .bind(("image_url", event.image_url.clone()))
            .bind(("created_at", event.created_at.clone()))
            .await
            .map_err(DatabaseError::from)?
            .check()
            .map_err(DatabaseError::from)?;

        Ok(event)
    }

    /// Merges `payload` into the stored event. `None` means the event does
    /// not exist.
    pub(crate) async fn update(
        &self,
        id: &str,
        payload: UpdateTimelineEvent,
    ) -> Result<Option<TimelineEvent>, TimelineError> {
        let key = ResourceGuard::verify(id, TABLE)?;

        let event = self
            .db
            .query(format!("UPDATE type::thing('{TABLE}', $id) MERGE $data"))
            .query(format!("SELECT {FIELDS} FROM type::thing('{TABLE}', $id)"))
            .bind(("id", key))
            .bind(("data", payload))
            .await
            .map_err(DatabaseError::from)?
            .take::<Vec<TimelineEvent>>(1)
            .map_err(DatabaseError::from)?
            .into_iter()
            .next();

        Ok(event)
    }

    /// Deletes the event; `false` means it did not exist.
    pub(crate) async fn delete(&self, id: &str) -> Result<bool, TimelineError> {
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
