use crate::error::NotesError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A note left for the other person.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    /// Username of whoever was logged in when the note was written.
    pub author: String,
    /// RFC 3339, set server-side.
    pub created_at: String,
}

/// Payload for writing a note. The author comes from the session, not the
/// payload.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateNote {
    pub content: String,
}

impl CreateNote {
    pub(crate) fn validate(&self) -> Result<(), NotesError> {
        validate_content(&self.content)
    }
}

/// Payload for editing a note's content.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateNote {
    pub content: String,
}

impl UpdateNote {
    pub(crate) fn validate(&self) -> Result<(), NotesError> {
        validate_content(&self.content)
    }
}

fn validate_content(content: &str) -> Result<(), NotesError> {
    if content.trim().is_empty() {
        return Err(NotesError::Validation { message: "Content must not be empty".into() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_is_rejected() {
        let payload = CreateNote { content: " \n ".to_owned() };
        assert!(payload.validate().is_err());

        let payload = UpdateNote { content: String::new() };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn non_empty_content_is_accepted() {
        let payload = CreateNote { content: "missing you".to_owned() };
        assert!(payload.validate().is_ok());
    }
}
