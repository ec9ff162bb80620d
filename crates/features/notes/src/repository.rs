use crate::error::NotesError;
use crate::model::Note;
use amora_database::{Database, DatabaseError};
use amora_kernel::prelude::ResourceGuard;
use amora_kernel::safe_nanoid;
use chrono::Utc;

const TABLE: &str = "note";
const FIELDS: &str = "record::id(id) AS id, content, author, createdAt";

#[derive(Debug)]
pub(crate) struct NotesRepository {
    db: Database,
}

impl NotesRepository {
    pub(crate) const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Lists all notes, most recent first.
    pub(crate) async fn list(&self) -> Result<Vec<Note>, NotesError> {
        let notes = self
            .db
            .query(format!("SELECT {FIELDS} FROM {TABLE} ORDER BY createdAt DESC"))
            .await
            .map_err(DatabaseError::from)?
            .take::<Vec<Note>>(0)
            .map_err(DatabaseError::from)?;

        Ok(notes)
    }

    pub(crate) async fn create(&self, content: String, author: &str) -> Result<Note, NotesError> {
        let note = Note {
            id: safe_nanoid!(),
            content,
            author: author.to_owned(),
            created_at: Utc::now().to_rfc3339(),
        };

        self.db
            .query(format!(
                "CREATE type::thing('{TABLE}', $id) SET content = $content, author = $author, \
                 createdAt = $created_at"
            ))
            .bind(("id", note.id.clone()))
            .bind(("content", note.content.clone()))
            .bind(("author", note.author.clone()))
            .bind(("created_at", note.created_at.clone()))
            .await
            .map_err(DatabaseError::from)?
            .check()
            .map_err(DatabaseError::from)?;

        Ok(note)
    }

    /// Replaces the note's content. `None` means the note does not exist.
    pub(crate) async fn update(&self, id: &str, content: String) -> Result<Option<Note>, NotesError> {
        let key = ResourceGuard::verify(id, TABLE)?;

        let note = self
            .db
            .query(format!("UPDATE type::thing('{TABLE}', $id) SET content = $content"))
            .query(format!("SELECT {FIELDS} FROM type::thing('{TABLE}', $id)"))
            .bind(("id", key))
            .bind(("content", content))
            .await
            .map_err(DatabaseError::from)?
            .take::<Vec<Note>>(1)
            .map_err(DatabaseError::from)?
            .into_iter()
            .next();

        Ok(note)
    }

    /// Deletes the note; `false` means it did not exist.
    pub(crate) async fn delete(&self, id: &str) -> Result<bool, NotesError> {
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
