use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceGuardError {
    #[error("Resource validation error: {message}")]
    Validation { message: Cow<'static, str> },
}

/// Utilities for safe resource handling and ID validation.
#[derive(Debug)]
pub struct ResourceGuard;

impl ResourceGuard {
    /// Validates a `SurrealDB` ID string against a specific table.
    ///
    /// Prevents "ID Spoofing" where a caller provides an ID from a different table
    /// (e.g., providing a 'settings:main' ID to a 'note' endpoint).
    ///
    /// # Arguments
    /// * `id` - The ID to verify (e.g., "note:123" or just "123")
    /// * `expected_table` - The table the ID must belong to (e.g., "note")
    ///
    /// # Errors
    /// Returns an error if the ID table does not match the expected table.
    pub fn verify<I, T>(id: I, expected_table: T) -> Result<String, ResourceGuardError>
    where
        I: AsRef<str>,
        T: AsRef<str>,
    {
        let id_ref = id.as_ref();
        let table_ref = expected_table.as_ref();

        if let Some((table, key)) = id_ref.split_once(':') {
            if table != table_ref {
                return Err(ResourceGuardError::Validation {
                    message: format!("Expected '{table_ref}', got '{table}'").into(),
                });
            }
            Ok(key.to_owned())
        } else {
            // The bare key is already what we want
            Ok(id_ref.to_owned())
        }
    }
}
