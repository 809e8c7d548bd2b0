//! Credential handling for the LLM provider key.
//!
//! The key itself is wrapped in [`Redacted`] so it can never leak through
//! Debug or Display output. Validity is a flag that only the credential
//! validator sets -- it is re-derived from the most recent validation
//! call, never inferred.

use serde::{Deserialize, Serialize};

use std::fmt;

/// A wrapper that redacts secret values in Debug and Display output.
///
/// The actual value is accessible via `.expose()`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Redacted(String);

impl Redacted {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Show masked representation: last 4 chars visible.
    pub fn masked(&self) -> String {
        if self.0.len() <= 4 {
            "****".to_string()
        } else {
            format!("****{}", &self.0[self.0.len() - 4..])
        }
    }
}

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Redacted(\"***\")")
    }
}

impl fmt::Display for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

/// A secret key for the LLM provider plus its validity flag.
///
/// Created unvalidated; the validity flag is mutated only by the
/// credential validator ([`mark_valid`](Credential::mark_valid) /
/// [`mark_invalid`](Credential::mark_invalid)). Cleared on explicit
/// user action by dropping the whole struct from the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    key: Redacted,
    valid: bool,
}

impl Credential {
    /// Wrap a candidate key. Starts out unvalidated.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Redacted::new(key),
            valid: false,
        }
    }

    /// The raw key, for constructing an authenticated client.
    pub fn expose(&self) -> &str {
        self.key.expose()
    }

    /// Masked representation for user-facing echo.
    pub fn masked(&self) -> String {
        self.key.masked()
    }

    /// Whether the most recent validation call accepted this key.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn mark_valid(&mut self) {
        self.valid = true;
    }

    pub fn mark_invalid(&mut self) {
        self.valid = false;
    }
}
