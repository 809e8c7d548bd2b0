//! Credential validation policy.
//!
//! A coarse liveness check, not a scope/permissions check: candidates
//! under the minimum length are rejected before any network traffic;
//! everything else gets one minimal list-models call against the
//! provider, and any successful response counts as valid.

use tracing::debug;

use crate::llm::LlmProvider;

/// Candidates shorter than this (after trimming) are rejected offline.
pub const MIN_CREDENTIAL_LEN: usize = 10;

/// Outcome of a credential validation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCheck {
    /// The provider accepted the key.
    Valid,
    /// Rejected by the length gate; no network call was made.
    TooShort,
    /// The provider rejected the key; `detail` carries the error text
    /// for diagnostics.
    Rejected { detail: String },
}

impl KeyCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, KeyCheck::Valid)
    }
}

/// Whether a candidate passes the offline length gate.
pub fn plausible(candidate: &str) -> bool {
    candidate.trim().len() >= MIN_CREDENTIAL_LEN
}

/// Validate a candidate key against the provider built from it.
///
/// Implausible candidates short-circuit to [`KeyCheck::TooShort`]
/// without touching the network.
pub async fn validate<P: LlmProvider>(candidate: &str, provider: &P) -> KeyCheck {
    if !plausible(candidate) {
        return KeyCheck::TooShort;
    }

    match provider.list_models().await {
        Ok(models) => {
            debug!(provider = provider.name(), models = models.len(), "Credential accepted");
            KeyCheck::Valid
        }
        Err(e) => KeyCheck::Rejected {
            detail: e.to_string(),
        },
    }
}
