use crate::error::TimelineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A milestone on the relationship timeline.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub description: String,
    pub location: Option<String>,
    pub image_url: Option<String>,
    /// RFC 3339, set server-side.
    pub created_at: String,
}

/// Payload for creating a timeline event.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTimelineEvent {
    pub title: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateTimelineEvent {
    pub(crate) fn validate(&self) -> Result<(), TimelineError> {
        validate_title(&self.title)?;
        validate_date(&self.date)
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTimelineEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl UpdateTimelineEvent {
    pub(crate) fn validate(&self) -> Result<(), TimelineError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(date) = &self.date {
            validate_date(date)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), TimelineError> {
    if title.trim().is_empty() {
        return Err(TimelineError::Validation { message: "Title must not be empty".into() });
    }
    Ok(())
}

pub(crate) fn validate_date(date: &str) -> Result<(), TimelineError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| TimelineError::Validation {
        message: format!("Date '{date}' is not in YYYY-MM-DD format").into(),
    })?;
    Ok(())
}
