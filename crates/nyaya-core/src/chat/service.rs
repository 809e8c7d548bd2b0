//! Chat orchestration: request assembly and live/simulated routing.
//!
//! `ChatService` routes each user message by the session's explicit
//! [`ResponseMode`]: the live path builds one completion request from
//! the conversation so far, the simulated path goes through the canned
//! matcher. Replies are appended to the conversation; on a live-path
//! failure the user turn remains (the conversation is append-only,
//! nothing is rolled back) and the typed error is returned to the caller.

use tracing::{debug, warn};

use nyaya_types::conversation::{Conversation, MessageRole};
use nyaya_types::llm::{CompletionRequest, LlmError, Message, Usage};
use nyaya_types::template::{TemplateId, template};

use crate::llm::LlmProvider;

use super::session::{ResponseMode, SessionContext};
use super::simulate::simulated_reply;

/// Model identifier for every chat completion.
pub const CHAT_MODEL: &str = "gpt-4o";

/// Sampling temperature for every chat completion.
pub const CHAT_TEMPERATURE: f64 = 0.7;

/// One assistant reply, tagged with the path that produced it.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub mode: ResponseMode,
    /// Token usage; present only on the live path.
    pub usage: Option<Usage>,
}

/// Build the completion request for the conversation so far.
///
/// The fixed system instruction goes in the request's `system` slot;
/// system-role turns from the conversation itself are dropped so the
/// instruction is never duplicated.
pub fn build_request(conversation: &Conversation) -> CompletionRequest {
    let messages = conversation
        .turns()
        .iter()
        .filter_map(|turn| match turn.role {
            MessageRole::User | MessageRole::Assistant => Some(Message {
                role: turn.role,
                content: turn.text.clone(),
            }),
            MessageRole::System => None,
        })
        .collect();

    CompletionRequest {
        model: CHAT_MODEL.to_string(),
        messages,
        system: Some(template(TemplateId::LegalAssistant).text.to_string()),
        temperature: Some(CHAT_TEMPERATURE),
        max_tokens: None,
    }
}

/// Routes user messages to the live provider or the canned matcher.
pub struct ChatService<P: LlmProvider> {
    provider: Option<P>,
}

impl<P: LlmProvider> ChatService<P> {
    /// Create a service. `provider` should be `Some` exactly when the
    /// session's credential validated successfully.
    pub fn new(provider: Option<P>) -> Self {
        Self { provider }
    }

    /// Handle one user message: append it, produce a reply, append that.
    ///
    /// At most one outbound network call. On `Err` the user turn stays
    /// in the conversation and no assistant turn is appended; the
    /// session continues.
    pub async fn respond(
        &self,
        session: &mut SessionContext,
        input: &str,
    ) -> Result<ChatReply, LlmError> {
        session.record_user(input);

        match session.mode() {
            ResponseMode::Live => {
                let provider = self.provider.as_ref().ok_or_else(|| {
                    LlmError::InvalidRequest(
                        "session is in live mode but no provider is configured".to_string(),
                    )
                })?;

                let request = build_request(session.conversation());
                debug!(
                    session = %session.id(),
                    messages = request.messages.len(),
                    "Requesting live completion"
                );

                let response = provider.complete(&request).await.inspect_err(|e| {
                    warn!(session = %session.id(), error = %e, "Live completion failed");
                })?;

                session.record_assistant(response.content.clone());
                Ok(ChatReply {
                    text: response.content,
                    mode: ResponseMode::Live,
                    usage: Some(response.usage),
                })
            }
            ResponseMode::Simulated => {
                let text = simulated_reply(input);
                session.record_assistant(text.clone());
                Ok(ChatReply {
                    text,
                    mode: ResponseMode::Simulated,
                    usage: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyaya_types::conversation::Turn;
    use nyaya_types::credential::Credential;
    use nyaya_types::llm::CompletionResponse;
    use std::sync::Mutex;

    struct FixedProvider {
        reply: String,
        last_request: Mutex<Option<CompletionRequest>>,
    }

    impl FixedProvider {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                last_request: Mutex::new(None),
            }
        }
    }

    impl LlmProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            Ok(CompletionResponse {
                id: "cmpl-test".to_string(),
                content: self.reply.clone(),
                model: request.model.clone(),
                usage: Usage {
                    input_tokens: 12,
                    output_tokens: 34,
                },
            })
        }

        async fn list_models(&self) -> Result<Vec<String>, LlmError> {
            Ok(vec!["gpt-4o".to_string()])
        }
    }

    struct FailingProvider;

    impl LlmProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::AuthenticationFailed)
        }

        async fn list_models(&self) -> Result<Vec<String>, LlmError> {
            Err(LlmError::AuthenticationFailed)
        }
    }

    fn live_session() -> SessionContext {
        let mut session = SessionContext::new();
        let mut credential = Credential::new("sk-long-enough-key");
        credential.mark_valid();
        session.set_credential(credential);
        session
    }

    #[test]
    fn test_build_request_sets_fixed_model_and_temperature() {
        let conversation = Conversation::new();
        let request = build_request(&conversation);
        assert_eq!(request.model, CHAT_MODEL);
        assert_eq!(request.temperature, Some(CHAT_TEMPERATURE));
    }

    #[test]
    fn test_build_request_prepends_system_instruction() {
        let request = build_request(&Conversation::new());
        let system = request.system.unwrap();
        assert_eq!(system, template(TemplateId::LegalAssistant).text);
    }

    #[test]
    fn test_build_request_drops_system_turns() {
        let mut conversation = Conversation::new();
        conversation.push(Turn::now(MessageRole::System, "stale instruction"));
        conversation.push_user("question");
        conversation.push_assistant("answer");

        let request = build_request(&conversation);
        assert_eq!(request.messages.len(), 2);
        assert!(
            request
                .messages
                .iter()
                .all(|m| m.role != MessageRole::System)
        );
    }

    #[tokio::test]
    async fn test_respond_simulated_appends_both_turns() {
        let service: ChatService<FixedProvider> = ChatService::new(None);
        let mut session = SessionContext::new();
        let before = session.conversation().len();

        let reply = service
            .respond(&mut session, "How do I file an FIR in India?")
            .await
            .unwrap();

        assert_eq!(reply.mode, ResponseMode::Simulated);
        assert!(reply.usage.is_none());
        assert!(reply.text.starts_with("An FIR (First Information Report)"));
        assert_eq!(session.conversation().len(), before + 2);
        assert_eq!(
            session.conversation().last().unwrap().role,
            MessageRole::Assistant
        );
    }

    #[tokio::test]
    async fn test_respond_live_returns_completion_and_usage() {
        let service = ChatService::new(Some(FixedProvider::new("Under Section 154...")));
        let mut session = live_session();

        let reply = service
            .respond(&mut session, "Explain FIR registration")
            .await
            .unwrap();

        assert_eq!(reply.mode, ResponseMode::Live);
        assert_eq!(reply.text, "Under Section 154...");
        assert_eq!(reply.usage.unwrap().output_tokens, 34);
        assert_eq!(
            session.conversation().last().unwrap().text,
            "Under Section 154..."
        );
    }

    #[tokio::test]
    async fn test_respond_live_request_includes_latest_user_turn() {
        let provider = FixedProvider::new("ok");
        let service = ChatService::new(Some(provider));
        let mut session = live_session();

        service
            .respond(&mut session, "What is anticipatory bail?")
            .await
            .unwrap();

        let request = service
            .provider
            .as_ref()
            .unwrap()
            .last_request
            .lock()
            .unwrap()
            .clone()
            .unwrap();
        let last = request.messages.last().unwrap();
        assert_eq!(last.role, MessageRole::User);
        assert_eq!(last.content, "What is anticipatory bail?");
    }

    #[tokio::test]
    async fn test_respond_live_error_keeps_user_turn() {
        let service = ChatService::new(Some(FailingProvider));
        let mut session = live_session();
        let before = session.conversation().len();

        let err = service
            .respond(&mut session, "will this fail?")
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::AuthenticationFailed));
        assert_eq!(session.conversation().len(), before + 1);
        assert_eq!(
            session.conversation().last().unwrap().role,
            MessageRole::User
        );
    }

    #[tokio::test]
    async fn test_respond_live_without_provider_is_invalid_request() {
        let service: ChatService<FixedProvider> = ChatService::new(None);
        let mut session = live_session();

        let err = service.respond(&mut session, "hello").await.unwrap_err();
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }
}
