use crate::error::AnniversaryError;
use crate::repository::AnniversarySettings;
use crate::{Anniversary, Countdown, DurationSince, compute_countdown, compute_duration};
use amora_domain::constants::ANNIVERSARY_TAG;
use amora_identity::Session;
use amora_kernel::prelude::ApiState;
use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

/// Countdown to the next anniversary, numeric and as 2-digit display strings.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CountdownView {
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    display: CountdownDisplay,
}

/// Zero-padded strings, ready for a flip-clock style UI.
#[derive(Debug, Serialize, ToSchema)]
struct CountdownDisplay {
    days: String,
    hours: String,
    minutes: String,
    seconds: String,
}

impl From<Countdown> for CountdownView {
    fn from(countdown: Countdown) -> Self {
        Self {
            days: countdown.days,
            hours: countdown.hours,
            minutes: countdown.minutes,
            seconds: countdown.seconds,
            display: CountdownDisplay {
                days: format!("{:02}", countdown.days),
                hours: format!("{:02}", countdown.hours),
                minutes: format!("{:02}", countdown.minutes),
                seconds: format!("{:02}", countdown.seconds),
            },
        }
    }
}

/// How long the two have been together, in calendar units.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct TogetherView {
    years: i32,
    months: i32,
    days: i32,
    formatted: String,
}

impl From<DurationSince> for TogetherView {
    fn from(duration: DurationSince) -> Self {
        Self {
            years: duration.years,
            months: duration.months,
            days: duration.days,
            formatted: duration.formatted,
        }
    }
}

/// Server-side rendering of the anniversary state.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnniversaryResponse {
    anniversary_date: String,
    message: String,
    is_anniversary_today: bool,
    years_passed: i32,
    countdown: CountdownView,
    together: TogetherView,
}

#[utoipa::path(
    get,
    path = "/anniversary",
    responses(
        (status = OK, description = "Countdown and elapsed time for the stored anniversary", body = AnniversaryResponse),
        (status = UNAUTHORIZED, description = "Missing or expired session"),
    ),
    tag = ANNIVERSARY_TAG,
    security(("bearer_token" = [])),
)]
pub(crate) async fn get_anniversary(
    _session: Session,
    State(state): State<ApiState>,
) -> Result<Json<AnniversaryResponse>, AnniversaryError> {
    let slice = state.try_get_slice::<Anniversary>()?;
    let settings: AnniversarySettings = slice.repository.load().await?;

    let now = Utc::now();
    let countdown = compute_countdown(settings.date, now);
    let together = compute_duration(settings.date, now.date_naive());

    Ok(Json(AnniversaryResponse {
        anniversary_date: settings.raw_date,
        message: settings.message,
        is_anniversary_today: countdown.is_anniversary_today,
        years_passed: countdown.years_passed,
        countdown: countdown.into(),
        together: together.into(),
    }))
}
