//! File-backed credential persistence.
//!
//! Tokens are kept in a small JSON document using the slot names of the
//! console's browser storage:
//! ```json
//! { "admin_token": "eyJ...", "token": "eyJ..." }
//! ```

use std::path::{Path, PathBuf};

use console_domain::CredentialSlots;
use tokio::fs;

use super::MemoryCredentialStore;

/// Errors that can occur while loading or saving credentials.
#[derive(Debug, thiserror::Error)]
pub enum CredentialStoreError {
    /// I/O error.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// JSON file holding the persisted token slots.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the slots into a shared in-memory store.
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(&self) -> Result<MemoryCredentialStore, CredentialStoreError> {
        let slots = match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice::<CredentialSlots>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no persisted credentials");
                CredentialSlots::default()
            }
            Err(source) => {
                return Err(CredentialStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        Ok(MemoryCredentialStore::with_slots(slots))
    }

    /// Writes the current slots of `store` to the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, store: &MemoryCredentialStore) -> Result<(), CredentialStoreError> {
        let json = serde_json::to_vec_pretty(&store.snapshot())?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| CredentialStoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        fs::write(&self.path, json)
            .await
            .map_err(|source| CredentialStoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use console_application::ports::CredentialResolver;
    use console_domain::CredentialKind;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = FileCredentialStore::new(dir.path().join("tokens.json"))
            .load()
            .await
            .unwrap();
        assert!(store.resolve().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file = FileCredentialStore::new(dir.path().join("state").join("tokens.json"));

        let store = MemoryCredentialStore::new();
        store.set_admin_token(Some("adm".to_string()));
        store.set_user_token(Some("usr".to_string()));
        file.save(&store).await.unwrap();

        let loaded = file.load().await.unwrap();
        assert_eq!(loaded.snapshot(), store.snapshot());
        assert_eq!(loaded.resolve().unwrap().kind(), CredentialKind::Admin);
    }

    #[tokio::test]
    async fn test_invalid_json_rejected() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = FileCredentialStore::new(path).load().await;
        assert!(matches!(result, Err(CredentialStoreError::Serialization(_))));
    }
}
