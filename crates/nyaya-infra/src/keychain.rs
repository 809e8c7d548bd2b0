//! OS keychain storage for API credentials.
//!
//! Thin wrapper over the `keyring` crate (macOS Keychain / Linux Secret
//! Service). Only two entries are ever written: the OpenAI key and the
//! GitHub token. Secrets never touch the filesystem through this path.

use anyhow::Context;
use keyring::Entry;

/// Keychain service name under which entries are stored.
pub const KEYCHAIN_SERVICE: &str = "nyaya";

/// Entry name for the OpenAI API key.
pub const OPENAI_KEY_NAME: &str = "OPENAI_API_KEY";

/// Entry name for the GitHub token.
pub const GITHUB_TOKEN_NAME: &str = "GITHUB_TOKEN";

/// Credential store backed by the OS keychain.
pub struct KeychainStore {
    service: String,
}

impl KeychainStore {
    pub fn new() -> Self {
        Self::with_service(KEYCHAIN_SERVICE)
    }

    /// Use a different service name (tests, side-by-side installs).
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> anyhow::Result<Entry> {
        Entry::new(&self.service, key)
            .with_context(|| format!("Failed to open keychain entry '{key}'"))
    }

    /// Read an entry; `None` if it was never stored.
    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read keychain entry '{key}'"))
            }
        }
    }

    /// Store or overwrite an entry.
    pub fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entry(key)?
            .set_password(value)
            .with_context(|| format!("Failed to write keychain entry '{key}'"))
    }

    /// Remove an entry. Removing a missing entry is not an error.
    pub fn delete(&self, key: &str) -> anyhow::Result<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to delete keychain entry '{key}'"))
            }
        }
    }
}

impl Default for KeychainStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_name() {
        let store = KeychainStore::new();
        assert_eq!(store.service, KEYCHAIN_SERVICE);
    }

    #[test]
    fn test_custom_service_name() {
        let store = KeychainStore::with_service("nyaya-test");
        assert_eq!(store.service, "nyaya-test");
    }
}
