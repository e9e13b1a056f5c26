//! Client settings.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Default name of the anti-forgery cookie.
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings shared by the dispatchers and the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL used to resolve relative request paths.
    pub base_url: Option<Url>,
    /// Cookie holding the anti-forgery token for the CSRF client.
    pub csrf_cookie_name: String,
    /// `User-Agent` sent by the transport.
    pub user_agent: String,
    /// Log filter directive, e.g. `"info"` or `"console_application=debug"`.
    pub log_filter: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            csrf_cookie_name: DEFAULT_CSRF_COOKIE.to_string(),
            user_agent: format!("console-client/{}", env!("CARGO_PKG_VERSION")),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientSettings {
    /// Sets the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> DomainResult<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;
        self.base_url = Some(parsed);
        Ok(self)
    }

    /// Resolves a request URL against the base URL.
    ///
    /// Absolute URLs are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the URL is relative and no base
    /// is configured, or if joining fails.
    pub fn resolve_url(&self, url: &str) -> DomainResult<Url> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.base_url.as_ref().ok_or_else(|| {
                    DomainError::InvalidUrl(format!("relative URL without base: {url}"))
                })?;
                base.join(url)
                    .map_err(|e| DomainError::InvalidUrl(format!("{e}: {url}")))
            }
            Err(e) => Err(DomainError::InvalidUrl(format!("{e}: {url}"))),
        }
    }
}
