//! Domain-level load failure.
//!
//! Whatever went wrong in the adapter, the presentation only ever sees one
//! kind of failure carrying a human-readable message.

use thiserror::Error;

use super::ports::UserSourceError;

/// Message shown when a failure arrives without one.
pub const DEFAULT_LOAD_FAILURE_MESSAGE: &str = "Failed to load user data. Please try again later.";

/// The session's single fetch did not produce a user list.
///
/// ## Invariants
/// - `message` is never blank; blank input falls back to
///   [`DEFAULT_LOAD_FAILURE_MESSAGE`].
///
/// # Examples
/// ```
/// use user_directory::domain::{DEFAULT_LOAD_FAILURE_MESSAGE, LoadFailure};
///
/// assert_eq!(LoadFailure::new("offline").message(), "offline");
/// assert_eq!(LoadFailure::new("  ").message(), DEFAULT_LOAD_FAILURE_MESSAGE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadFailure {
    message: String,
}

impl LoadFailure {
    /// Wrap a failure message.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let message = if raw.trim().is_empty() {
            DEFAULT_LOAD_FAILURE_MESSAGE.to_owned()
        } else {
            raw
        };
        Self { message }
    }

    /// Human-readable description for the error banner.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl From<UserSourceError> for LoadFailure {
    fn from(error: UserSourceError) -> Self {
        Self::new(error.to_string())
    }
}
