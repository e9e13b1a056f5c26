//! Credential resolver port

use console_domain::{Credential, CredentialSlots};

/// Read-only access to the persisted login tokens.
///
/// The store is written by the login flows; dispatchers only read it, once
/// per request.
pub trait CredentialResolver: Send + Sync {
    /// Current content of the token slots.
    fn slots(&self) -> CredentialSlots;

    /// Credential to attach to the next request, admin first.
    fn resolve(&self) -> Option<Credential> {
        self.slots().resolve()
    }
}

/// Fixed slots, for callers that already hold the tokens.
impl CredentialResolver for CredentialSlots {
    fn slots(&self) -> CredentialSlots {
        self.clone()
    }
}
