//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Messages kept per project feed before the oldest are dropped.
pub const DEFAULT_CHAT_HISTORY_LIMIT: usize = 200;

/// Longest accepted chat message body, in bytes.
pub const DEFAULT_CHAT_MAX_BODY_LEN: usize = 1000;

/// Server configuration loaded from environment variables. Every knob has
/// a default; a missing or unparseable value never fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// CLIPBRIDGE_CHAT_HISTORY
    pub chat_history_limit: usize,

    /// CLIPBRIDGE_CHAT_MAX_BODY
    pub chat_max_body_len: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            chat_history_limit: env_usize("CLIPBRIDGE_CHAT_HISTORY", DEFAULT_CHAT_HISTORY_LIMIT),
            chat_max_body_len: env_usize("CLIPBRIDGE_CHAT_MAX_BODY", DEFAULT_CHAT_MAX_BODY_LEN),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_direct_construction() {
        let config = Config {
            chat_history_limit: 50,
            chat_max_body_len: 280,
        };

        assert_eq!(config.chat_history_limit, 50);
        assert_eq!(config.chat_max_body_len, 280);
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            chat_history_limit: 10,
            chat_max_body_len: 100,
        };
        let cloned = config.clone();

        assert_eq!(config.chat_history_limit, cloned.chat_history_limit);
        assert_eq!(config.chat_max_body_len, cloned.chat_max_body_len);
    }

    #[test]
    fn test_env_usize_falls_back_for_unset_var() {
        assert_eq!(env_usize("CLIPBRIDGE_TEST_VAR_THAT_IS_NEVER_SET", 7), 7);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific
        // values here.
        let config = Config::from_env();
        let _ = config.chat_history_limit;
        let _ = config.chat_max_body_len;
    }

    #[test]
    fn test_config_default_calls_from_env() {
        let config = Config::default();
        let _ = config.chat_history_limit;
    }
}
