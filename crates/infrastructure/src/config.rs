//! Client configuration from the environment.
//!
//! | Variable | Setting | Default |
//! |----------|---------|---------|
//! | `CONSOLE_BASE_URL` | base URL for relative paths | none |
//! | `CONSOLE_CSRF_COOKIE` | anti-forgery cookie name | `csrftoken` |
//! | `CONSOLE_USER_AGENT` | `User-Agent` header | `console-client/<version>` |
//! | `CONSOLE_LOG` | log filter directive | `info` |

use console_domain::{ClientSettings, DomainError};

/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "CONSOLE_BASE_URL";
/// Environment variable holding the anti-forgery cookie name.
pub const ENV_CSRF_COOKIE: &str = "CONSOLE_CSRF_COOKIE";
/// Environment variable holding the `User-Agent`.
pub const ENV_USER_AGENT: &str = "CONSOLE_USER_AGENT";
/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "CONSOLE_LOG";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `CONSOLE_BASE_URL` is not an absolute URL.
    #[error("CONSOLE_BASE_URL is invalid: {0}")]
    InvalidBaseUrl(DomainError),
}

/// Loads settings from the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] if the base URL does not parse.
pub fn settings_from_env() -> Result<ClientSettings, ConfigError> {
    settings_from_lookup(|key| std::env::var(key).ok())
}

/// Loads settings through an arbitrary variable lookup.
///
/// Blank values are treated as unset.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] if the base URL does not parse.
pub fn settings_from_lookup<F>(lookup: F) -> Result<ClientSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut settings = ClientSettings::default();

    if let Some(base_url) = get(ENV_BASE_URL) {
        settings = settings
            .with_base_url(base_url.trim())
            .map_err(ConfigError::InvalidBaseUrl)?;
    }
    if let Some(cookie) = get(ENV_CSRF_COOKIE) {
        settings.csrf_cookie_name = cookie;
    }
    if let Some(user_agent) = get(ENV_USER_AGENT) {
        settings.user_agent = user_agent;
    }
    if let Some(filter) = get(ENV_LOG) {
        settings.log_filter = filter;
    }

    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ClientSettings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        settings_from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), ClientSettings::default());
    }

    #[test]
    fn test_overrides() {
        let settings = load(&[
            (ENV_BASE_URL, "https://admin.example.com/"),
            (ENV_CSRF_COOKIE, "xsrf"),
            (ENV_LOG, "console_application=debug"),
        ])
        .unwrap();

        assert_eq!(
            settings.base_url.map(|u| u.to_string()),
            Some("https://admin.example.com/".to_string())
        );
        assert_eq!(settings.csrf_cookie_name, "xsrf");
        assert_eq!(settings.log_filter, "console_application=debug");
    }

    #[test]
    fn test_blank_values_ignored() {
        let settings = load(&[(ENV_CSRF_COOKIE, "  ")]).unwrap();
        assert_eq!(settings.csrf_cookie_name, "csrftoken");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            load(&[(ENV_BASE_URL, "admin.example.com")]),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }
}
