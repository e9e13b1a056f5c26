//! In-memory credential store.
//!
//! Holds the two token slots written by the login flows. Clones share the
//! same slots, so the login flow and the dispatchers can each own a handle.

use std::sync::Arc;

use console_application::ports::CredentialResolver;
use console_domain::CredentialSlots;
use parking_lot::RwLock;

/// Thread-safe in-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    slots: Arc<RwLock<CredentialSlots>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `slots`.
    #[must_use]
    pub fn with_slots(slots: CredentialSlots) -> Self {
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// Store or remove the admin token.
    pub fn set_admin_token(&self, token: Option<String>) {
        self.slots.write().admin_token = token;
    }

    /// Store or remove the user token.
    pub fn set_user_token(&self, token: Option<String>) {
        self.slots.write().token = token;
    }

    /// Remove both tokens (logout).
    pub fn clear(&self) {
        *self.slots.write() = CredentialSlots::default();
    }

    /// Copy of the current slots.
    #[must_use]
    pub fn snapshot(&self) -> CredentialSlots {
        self.slots.read().clone()
    }
}

impl CredentialResolver for MemoryCredentialStore {
    fn slots(&self) -> CredentialSlots {
        self.snapshot()
    }
}
