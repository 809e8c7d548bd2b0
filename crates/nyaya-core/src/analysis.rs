//! Repository analysis composer.
//!
//! Projects repository metadata plus a truncated README excerpt into a
//! [`RepositorySummary`], then issues one completion through the same
//! transport as the chat path. Independent of any conversation: the
//! result is never appended to session history.

use tracing::debug;

use nyaya_types::llm::{CompletionRequest, LlmError, Message, MessageRole};
use nyaya_types::repo::{RepositoryInfo, RepositorySummary};
use nyaya_types::template::{TemplateId, template};

use crate::chat::service::{CHAT_MODEL, CHAT_TEMPERATURE};
use crate::llm::LlmProvider;

/// README text beyond this many bytes is dropped from the summary.
pub const README_EXCERPT_LIMIT: usize = 1000;

/// Build the analysis projection from metadata and raw README text.
pub fn summarize(info: RepositoryInfo, readme: &str) -> RepositorySummary {
    RepositorySummary {
        full_name: info.full_name,
        description: info.description,
        language: info.language,
        star_count: info.star_count,
        fork_count: info.fork_count,
        open_issue_count: info.open_issue_count,
        readme_excerpt: truncate_readme(readme),
    }
}

/// Take the first [`README_EXCERPT_LIMIT`] bytes, backing off to the
/// previous UTF-8 boundary so multibyte text never splits a character.
fn truncate_readme(readme: &str) -> String {
    if readme.len() <= README_EXCERPT_LIMIT {
        return readme.to_string();
    }

    let mut end = README_EXCERPT_LIMIT;
    while !readme.is_char_boundary(end) {
        end -= 1;
    }
    readme[..end].to_string()
}

/// Build the single-turn completion request for a repository summary.
pub fn build_analysis_request(summary: &RepositorySummary) -> CompletionRequest {
    let description = summary.description.as_deref().unwrap_or("(none)");
    let language = summary.language.as_deref().unwrap_or("(unknown)");
    let readme = if summary.readme_excerpt.is_empty() {
        "(no README available)"
    } else {
        summary.readme_excerpt.as_str()
    };

    let body = format!(
        "Repository: {}\n\
         Description: {}\n\
         Primary language: {}\n\
         Stars: {}  Forks: {}  Open issues: {}\n\
         \n\
         README excerpt:\n\
         {}",
        summary.full_name,
        description,
        language,
        summary.star_count,
        summary.fork_count,
        summary.open_issue_count,
        readme,
    );

    CompletionRequest {
        model: CHAT_MODEL.to_string(),
        messages: vec![Message {
            role: MessageRole::User,
            content: body,
        }],
        system: Some(template(TemplateId::RepoAnalysis).text.to_string()),
        temperature: Some(CHAT_TEMPERATURE),
        max_tokens: None,
    }
}

/// Run the analysis: one completion call, returning the response text.
pub async fn analyze<P: LlmProvider>(
    provider: &P,
    summary: &RepositorySummary,
) -> Result<String, LlmError> {
    let request = build_analysis_request(summary);
    debug!(repo = %summary.full_name, "Requesting repository analysis");

    let response = provider.complete(&request).await?;
    Ok(response.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyaya_types::llm::{CompletionResponse, Usage};

    fn test_info() -> RepositoryInfo {
        RepositoryInfo {
            full_name: "foo/bar".to_string(),
            description: Some("A court-records indexer".to_string()),
            language: Some("Rust".to_string()),
            star_count: 42,
            fork_count: 7,
            open_issue_count: 3,
        }
    }

    struct EchoProvider;

    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                id: "cmpl-echo".to_string(),
                content: format!("analyzed {} messages", request.messages.len()),
                model: request.model.clone(),
                usage: Usage::default(),
            })
        }

        async fn list_models(&self) -> Result<Vec<String>, LlmError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_summarize_passes_metadata_through() {
        let summary = summarize(test_info(), "# bar\nIndexes court records.");
        assert_eq!(summary.full_name, "foo/bar");
        assert_eq!(summary.star_count, 42);
        assert_eq!(summary.readme_excerpt, "# bar\nIndexes court records.");
    }

    #[test]
    fn test_readme_truncated_to_limit() {
        let readme = "x".repeat(5000);
        let summary = summarize(test_info(), &readme);
        assert_eq!(summary.readme_excerpt.len(), README_EXCERPT_LIMIT);
    }

    #[test]
    fn test_readme_truncation_respects_char_boundaries() {
        // Multibyte char straddling the limit must not panic.
        let mut readme = "x".repeat(README_EXCERPT_LIMIT - 1);
        readme.push_str("日本語のテキスト");
        let summary = summarize(test_info(), &readme);
        assert!(summary.readme_excerpt.len() <= README_EXCERPT_LIMIT);
        assert!(summary.readme_excerpt.is_char_boundary(summary.readme_excerpt.len()));
    }

    #[test]
    fn test_short_readme_kept_whole() {
        let summary = summarize(test_info(), "short");
        assert_eq!(summary.readme_excerpt, "short");
    }

    #[test]
    fn test_analysis_request_is_single_turn_with_analysis_instruction() {
        let summary = summarize(test_info(), "README body");
        let request = build_analysis_request(&summary);

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert!(request.messages[0].content.contains("foo/bar"));
        assert!(request.messages[0].content.contains("README body"));
        assert_eq!(
            request.system.as_deref(),
            Some(template(TemplateId::RepoAnalysis).text)
        );
        assert_eq!(request.model, CHAT_MODEL);
    }

    #[test]
    fn test_analysis_request_marks_missing_readme() {
        let summary = summarize(test_info(), "");
        let request = build_analysis_request(&summary);
        assert!(request.messages[0].content.contains("(no README available)"));
    }

    #[tokio::test]
    async fn test_analyze_returns_completion_text() {
        let summary = summarize(test_info(), "README");
        let text = analyze(&EchoProvider, &summary).await.unwrap();
        assert_eq!(text, "analyzed 1 messages");
    }
}
