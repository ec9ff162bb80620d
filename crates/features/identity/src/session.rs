use crate::Identity;
use crate::error::IdentityError;
use amora_domain::config::SessionConfig;
use amora_kernel::prelude::ApiState;
use amora_kernel::safe_nanoid;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use chrono::{DateTime, Utc};
use moka::sync::Cache;
use std::time::Duration;

/// An authenticated session, created at login and discarded at logout or expiry.
///
/// Handlers take this as an extractor argument; a missing or unknown bearer
/// token short-circuits the request with `401 Unauthorized`.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Bounded in-memory session cache with time-to-live eviction.
///
/// Sessions do not survive a restart. For a two-person site that just means
/// logging in again.
#[derive(Debug)]
pub(crate) struct SessionStore {
    cache: Cache<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub(crate) fn new(config: &SessionConfig) -> Self {
        let ttl = Duration::from_secs(config.ttl_seconds.max(1));
        let cache =
            Cache::builder().max_capacity(config.cache_capacity).time_to_live(ttl).build();

        Self { cache, ttl }
    }

    pub(crate) fn create(&self, username: &str) -> Session {
        let issued_at = Utc::now();
        let session = Session {
            token: safe_nanoid!(32),
            username: username.to_owned(),
            issued_at,
            expires_at: issued_at + self.ttl,
        };

        self.cache.insert(session.token.clone(), session.clone());
        session
    }

    pub(crate) fn get(&self, token: &str) -> Option<Session> {
        // TTL eviction is lazy; the timestamp check closes the window
        // between expiry and eviction.
        self.cache.get(token).filter(|session| session.expires_at > Utc::now())
    }

    pub(crate) fn invalidate(&self, token: &str) {
        self.cache.invalidate(token);
    }
}

impl FromRequestParts<ApiState> for Session {
    type Rejection = IdentityError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(IdentityError::Unauthorized { message: "Missing bearer token".into() })?;

        let identity = state.try_get_slice::<Identity>()?;

        identity
            .sessions
            .get(token)
            .ok_or(IdentityError::Unauthorized { message: "Session expired or unknown".into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(&SessionConfig { ttl_seconds: 60, cache_capacity: 8 })
    }

    #[test]
    fn create_then_get_roundtrip() {
        let store = store();
        let session = store.create("aviral");

        let found = store.get(&session.token).expect("session should be retrievable");
        assert_eq!(found.username, "aviral");
        assert_eq!(found.token, session.token);
        assert!(found.expires_at > found.issued_at);
    }

    #[test]
    fn tokens_are_unique_per_login() {
        let store = store();
        let a = store.create("aviral");
        let b = store.create("aviral");
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn invalidate_discards_session() {
        let store = store();
        let session = store.create("shaili");

        store.invalidate(&session.token);
        assert!(store.get(&session.token).is_none());
    }

    #[test]
    fn unknown_token_is_none() {
        assert!(store().get("nope").is_none());
    }
}
