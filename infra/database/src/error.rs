use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`DatabaseError`] enum of this crate.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Validation errors.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Occurs when connectivity or health checks fail.
    #[error("Database connection failed{}: {message}", format_context(.context))]
    Connection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Occurs when authentication fails.
    #[error("Authentication failed{}: {message}", format_context(.context))]
    Auth { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A wrapper for underlying `SurrealDB` engine errors.
    #[error("SurrealDB error{}: {source}", format_context(.context))]
    Surreal {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Migration failures or invariant violations.
    #[error("Migration error{}: {message}", format_context(.context))]
    Migration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal database error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<surrealdb::Error> for DatabaseError {
    fn from(source: surrealdb::Error) -> Self {
        Self::Surreal { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> String {
    context.as_ref().map_or_else(String::new, |c| format!(" ({c})"))
}

/// Attaches a human-readable context to engine errors on their way up.
pub trait DatabaseErrorExt<T> {
    /// Converts the error into a [`DatabaseError::Surreal`] carrying `context`.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DatabaseError>;
}

impl<T> DatabaseErrorExt<T> for Result<T, surrealdb::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DatabaseError> {
        self.map_err(|source| DatabaseError::Surreal { source, context: Some(context.into()) })
    }
}
