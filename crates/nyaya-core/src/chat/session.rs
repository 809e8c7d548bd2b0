//! Session context for one interactive chat session.
//!
//! [`SessionContext`] owns everything scoped to a session: the
//! append-only conversation, the (optional) credential, and the explicit
//! response mode. Created at session start, dropped at session end --
//! there are no process-wide globals and nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nyaya_types::conversation::Conversation;
use nyaya_types::credential::Credential;
use nyaya_types::template::{TemplateId, template};

use std::fmt;

/// Which path produces assistant replies for this session.
///
/// The simulated (canned) path and the live LLM path are never blended:
/// `Live` is entered only while a credential is present and was marked
/// valid by the most recent validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    Simulated,
    Live,
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseMode::Simulated => write!(f, "simulated"),
            ResponseMode::Live => write!(f, "live"),
        }
    }
}

/// State confined to one logical chat session.
///
/// The conversation starts with the assistant greeting already appended,
/// matching what a user sees when the session opens.
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: Uuid,
    started_at: DateTime<Utc>,
    conversation: Conversation,
    credential: Option<Credential>,
    mode: ResponseMode,
}

impl SessionContext {
    /// Open a new session in simulated mode with the greeting seeded.
    pub fn new() -> Self {
        let mut conversation = Conversation::new();
        conversation.push_assistant(template(TemplateId::Greeting).text);

        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            conversation,
            credential: None,
            mode: ResponseMode::Simulated,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn mode(&self) -> ResponseMode {
        self.mode
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Append a user turn.
    pub fn record_user(&mut self, text: impl Into<String>) {
        self.conversation.push_user(text);
    }

    /// Append an assistant turn.
    pub fn record_assistant(&mut self, text: impl Into<String>) {
        self.conversation.push_assistant(text);
    }

    /// Install a credential. The session enters live mode only if the
    /// validator marked it valid.
    pub fn set_credential(&mut self, credential: Credential) {
        self.mode = if credential.is_valid() {
            ResponseMode::Live
        } else {
            ResponseMode::Simulated
        };
        self.credential = Some(credential);
    }

    /// Drop the credential and revert to simulated mode.
    ///
    /// Clearing is always an explicit user action; nothing else ever
    /// removes the key from the session.
    pub fn clear_credential(&mut self) {
        self.credential = None;
        self.mode = ResponseMode::Simulated;
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
