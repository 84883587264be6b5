//! Error taxonomy for session operations.

use thiserror::Error;

/// Everything a session operation can fail with.
///
/// `StorageCorrupt` is recovered silently (rehydration clears storage and
/// lands on no-session); the others surface in the UI as banner text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account with this email already exists")]
    DuplicateEmail,
    #[error("Stored session could not be read")]
    StorageCorrupt,
    #[error("{0}")]
    Remote(String),
}

impl SessionError {
    pub fn remote(message: impl Into<String>) -> Self {
        SessionError::Remote(message.into())
    }

    /// Stable snake_case identifier, used in logs and wire payloads.
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::InvalidCredentials => "invalid_credentials",
            SessionError::DuplicateEmail => "duplicate_email",
            SessionError::StorageCorrupt => "storage_corrupt",
            SessionError::Remote(_) => "remote_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_are_user_facing() {
        assert_eq!(
            SessionError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            SessionError::DuplicateEmail.to_string(),
            "An account with this email already exists"
        );
        assert_eq!(
            SessionError::remote("network unreachable").to_string(),
            "network unreachable"
        );
    }

    #[test]
    fn test_codes_are_snake_case() {
        assert_eq!(SessionError::InvalidCredentials.code(), "invalid_credentials");
        assert_eq!(SessionError::DuplicateEmail.code(), "duplicate_email");
        assert_eq!(SessionError::StorageCorrupt.code(), "storage_corrupt");
        assert_eq!(SessionError::remote("x").code(), "remote_error");
    }
}
