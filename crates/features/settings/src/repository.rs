use crate::error::SettingsError;
use crate::model::{Settings, UpdateSettings};
use amora_database::{Database, DatabaseError};
use amora_domain::constants::{DEFAULT_ANNIVERSARY_DATE, DEFAULT_ANNIVERSARY_MESSAGE};

// The settings record is a singleton with a fixed id.
const RECORD: &str = "settings:main";
const FIELDS: &str = "anniversaryDate, birthdayDate, anniversaryMessage, birthdayMessage";

#[derive(Debug)]
pub(crate) struct SettingsRepository {
    db: Database,
}

impl SettingsRepository {
    pub(crate) const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Returns the settings record, creating it with defaults on first read.
    pub(crate) async fn get_or_create(&self) -> Result<Settings, SettingsError> {
        if let Some(settings) = self.load().await? {
            return Ok(settings);
        }

        let defaults = Settings {
            anniversary_date: DEFAULT_ANNIVERSARY_DATE.to_owned(),
            birthday_date: None,
            anniversary_message: Some(DEFAULT_ANNIVERSARY_MESSAGE.to_owned()),
            birthday_message: None,
        };

        self.db
            .query(format!(
                "UPSERT {RECORD} SET anniversaryDate = $anniversary_date, \
                 anniversaryMessage = $anniversary_message"
            ))
            .bind(("anniversary_date", defaults.anniversary_date.clone()))
            .bind(("anniversary_message", defaults.anniversary_message.clone()))
            .await
            .map_err(DatabaseError::from)?
            .check()
            .map_err(DatabaseError::from)?;

        Ok(defaults)
    }

    /// Merges `payload` into the settings record, creating defaults first if
    /// the record does not exist yet.
    pub(crate) async fn merge(&self, payload: UpdateSettings) -> Result<Settings, SettingsError> {
        let current = self.get_or_create().await?;

        self.db
            .query(format!("UPDATE {RECORD} MERGE $data"))
            .bind(("data", payload))
            .await
            .map_err(DatabaseError::from)?
            .check()
            .map_err(DatabaseError::from)?;

        Ok(self.load().await?.unwrap_or(current))
    }

    async fn load(&self) -> Result<Option<Settings>, SettingsError> {
        let settings = self
            .db
            .query(format!("SELECT {FIELDS} FROM {RECORD}"))
            .await
            .map_err(DatabaseError::from)?
            .take::<Vec<Settings>>(0)
            .map_err(DatabaseError::from)?
            .into_iter()
            .next();

        Ok(settings)
    }
}
