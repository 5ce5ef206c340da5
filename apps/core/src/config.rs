//! Runtime configuration loaded from the environment.
//!
//! Every knob has a default that works against the public Wikipedia API, so the
//! crate runs with zero configuration. Tests override the base URL to point at
//! a mock server.

use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Default public endpoint for the external knowledge lookup.
const DEFAULT_LOOKUP_BASE_URL: &str = "https://en.wikipedia.org";

/// User agent registered with Wikipedia so the API does not block requests.
const DEFAULT_USER_AGENT: &str = "AI_Study_Buddy/1.0 (Educational Purpose)";

const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Settings for the knowledge lookup collaborator.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the Wikipedia-compatible API.
    pub lookup_base_url: String,
    /// Upper bound on a single lookup round trip.
    pub lookup_timeout: Duration,
    /// User-Agent header sent with every lookup request.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from the environment, falling back to defaults.
    ///
    /// Recognized variables: `LOOKUP_BASE_URL`, `LOOKUP_TIMEOUT_SECS`,
    /// `LOOKUP_USER_AGENT`. A present but malformed timeout is a configuration
    /// error rather than a silent default.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let lookup_base_url =
            env::var("LOOKUP_BASE_URL").unwrap_or_else(|_| DEFAULT_LOOKUP_BASE_URL.to_string());

        let lookup_timeout = match env::var("LOOKUP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!("LOOKUP_TIMEOUT_SECS is not a number: {}", raw))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        };

        let user_agent =
            env::var("LOOKUP_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            lookup_base_url,
            lookup_timeout,
            user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.lookup_base_url, "https://en.wikipedia.org");
        assert_eq!(settings.lookup_timeout, Duration::from_secs(10));
        assert!(settings.user_agent.contains("Study_Buddy"));
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            [
                ("LOOKUP_BASE_URL", Some("http://localhost:9999")),
                ("LOOKUP_TIMEOUT_SECS", Some("3")),
            ],
            || {
                let settings = Settings::from_env().unwrap();
                assert_eq!(settings.lookup_base_url, "http://localhost:9999");
                assert_eq!(settings.lookup_timeout, Duration::from_secs(3));
            },
        );
    }

    #[test]
    fn test_malformed_timeout_is_config_error() {
        temp_env::with_var("LOOKUP_TIMEOUT_SECS", Some("soon"), || {
            let err = Settings::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        });
    }
}
