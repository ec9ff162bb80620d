use crate::error::AnniversaryError;
use amora_database::{Database, DatabaseError};
use amora_domain::constants::{DEFAULT_ANNIVERSARY_DATE, DEFAULT_ANNIVERSARY_MESSAGE};
use chrono::NaiveDate;
use serde::Deserialize;

/// The slice of the settings record the countdown needs.
#[derive(Debug)]
pub(crate) struct AnniversarySettings {
    pub date: NaiveDate,
    pub raw_date: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    anniversary_date: Option<String>,
    anniversary_message: Option<String>,
}

#[derive(Debug)]
pub(crate) struct AnniversaryRepository {
    db: Database,
}

impl AnniversaryRepository {
    pub(crate) const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Loads the stored anniversary settings, falling back to defaults when
    /// no settings record exists yet.
    ///
    /// The settings slice validates dates on write, so a stored date that
    /// fails to parse here means the record was edited out-of-band; that
    /// surfaces as an internal error.
    pub(crate) async fn load(&self) -> Result<AnniversarySettings, AnniversaryError> {
        let stored = self
            .db
            .query("SELECT anniversaryDate, anniversaryMessage FROM settings:main")
            .await
            .map_err(DatabaseError::from)?
            .take::<Vec<StoredSettings>>(0)
            .map_err(DatabaseError::from)?
            .into_iter()
            .next();

        let raw_date = stored
            .as_ref()
            .and_then(|settings| settings.anniversary_date.clone())
            .unwrap_or_else(|| DEFAULT_ANNIVERSARY_DATE.to_owned());
        let message = stored
            .and_then(|settings| settings.anniversary_message)
            .unwrap_or_else(|| DEFAULT_ANNIVERSARY_MESSAGE.to_owned());

        let date =
            NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d").map_err(|e| {
                AnniversaryError::Internal {
                    message: format!("Stored anniversary date '{raw_date}' is invalid: {e}")
                        .into(),
                }
            })?;

        Ok(AnniversarySettings { date, raw_date, message })
    }
}
