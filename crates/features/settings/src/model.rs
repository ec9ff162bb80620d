use crate::error::SettingsError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The singleton site settings record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// `YYYY-MM-DD`.
    pub anniversary_date: String,
    /// `YYYY-MM-DD`, if set.
    pub birthday_date: Option<String>,
    pub anniversary_message: Option<String>,
    pub birthday_message: Option<String>,
}

/// Partial settings update; absent fields keep their stored value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anniversary_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anniversary_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday_message: Option<String>,
}

impl UpdateSettings {
    pub(crate) fn validate(&self) -> Result<(), SettingsError> {
        if let Some(date) = &self.anniversary_date {
            validate_date(date)?;
        }
        if let Some(date) = &self.birthday_date {
            validate_date(date)?;
        }
        Ok(())
    }
}

fn validate_date(date: &str) -> Result<(), SettingsError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| SettingsError::Validation {
        message: format!("Date '{date}' is not in YYYY-MM-DD format").into(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_valid() {
        let payload: UpdateSettings = serde_json::from_value(serde_json::json!({}))
            .expect("empty update should deserialize");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let payload: UpdateSettings =
            serde_json::from_value(serde_json::json!({ "anniversaryDate": "Aug 15, 2021" }))
                .expect("deserialize");
        assert!(payload.validate().is_err());

        let payload: UpdateSettings =
            serde_json::from_value(serde_json::json!({ "birthdayDate": "2021-13-40" }))
                .expect("deserialize");
        assert!(payload.validate().is_err());
    }
}
