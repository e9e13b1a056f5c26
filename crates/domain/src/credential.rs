//! Bearer credentials and their resolution order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which login flow produced a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKind {
    /// Administrator session.
    Admin,
    /// Regular user session.
    User,
}

impl CredentialKind {
    /// Returns the kind as a static string, suitable for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// A resolved bearer token.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    kind: CredentialKind,
    token: String,
}

impl Credential {
    /// Creates a credential.
    #[must_use]
    pub fn new(kind: CredentialKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }

    /// Returns the credential kind.
    #[must_use]
    pub const fn kind(&self) -> CredentialKind {
        self.kind
    }

    /// Returns the raw token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("kind", &self.kind)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// The two token slots persisted by the console's login flows.
///
/// Serialized with the slot names the console stores them under.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSlots {
    /// Token written by the admin login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
    /// Token written by the user login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl CredentialSlots {
    /// Creates slots from optional admin and user tokens.
    #[must_use]
    pub fn new(admin_token: Option<String>, token: Option<String>) -> Self {
        Self { admin_token, token }
    }

    /// Picks the credential to attach.
    ///
    /// The admin token strictly wins over the user token. Empty tokens count
    /// as absent. `None` means the request goes out unauthenticated.
    #[must_use]
    pub fn resolve(&self) -> Option<Credential> {
        non_empty(self.admin_token.as_deref())
            .map(|t| Credential::new(CredentialKind::Admin, t))
            .or_else(|| non_empty(self.token.as_deref()).map(|t| Credential::new(CredentialKind::User, t)))
    }

    /// Returns true when neither slot holds a usable token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolve().is_none()
    }
}

impl fmt::Debug for CredentialSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |slot: &Option<String>| slot.as_ref().map(|_| "<redacted>");
        f.debug_struct("CredentialSlots")
            .field("admin_token", &redact(&self.admin_token))
            .field("token", &redact(&self.token))
            .finish()
    }
}

fn non_empty(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}
