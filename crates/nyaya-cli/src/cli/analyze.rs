//! Repository analysis command.
//!
//! Structural URL check first, then two GitHub reads (metadata, README)
//! and one LLM completion. Every failure degrades to a printed message;
//! nothing here is fatal.

use console::style;
use secrecy::SecretString;

use nyaya_core::analysis;
use nyaya_core::chat::service::CHAT_MODEL;
use nyaya_core::repohost::RepoHost;
use nyaya_infra::github::GitHubClient;
use nyaya_infra::llm::OpenAiProvider;
use nyaya_types::repo::{RepoHostError, RepoRef};

use super::chat::renderer::MarkdownRenderer;
use super::{Cli, key, spinner};

pub async fn run(cli: &Cli, url: &str) -> anyhow::Result<()> {
    // Reject malformed URLs before any network call.
    let repo = match RepoRef::from_url(url) {
        Ok(repo) => repo,
        Err(e) => {
            println!("\n  {} {e}", style("!").red().bold());
            return Ok(());
        }
    };

    let Some(api_key) = key::resolve_api_key(cli) else {
        println!(
            "\n  {} Repository analysis needs an OpenAI API key. Set one with: nyaya key set",
            style("!").yellow().bold()
        );
        return Ok(());
    };

    let github = GitHubClient::new(key::resolve_github_token(cli));

    let pb = spinner("fetching repository...");
    let info = match github.get_repository(&repo).await {
        Ok(info) => info,
        Err(e) => {
            pb.finish_and_clear();
            println!("\n  {} Could not fetch {repo}: {e}", style("!").red().bold());
            return Ok(());
        }
    };
    let readme = match github.get_readme(&repo).await {
        Ok(text) => text,
        Err(RepoHostError::NotFound) => String::new(),
        Err(e) => {
            pb.finish_and_clear();
            println!("\n  {} Could not fetch README: {e}", style("!").red().bold());
            return Ok(());
        }
    };
    pb.finish_and_clear();

    println!();
    println!("  {}", style(&info.full_name).cyan().bold());
    if let Some(description) = &info.description {
        println!("  {}", style(description).dim());
    }
    println!(
        "  {}",
        style(format!(
            "\u{2605} {}  \u{2442} {}  {} open issues  {}",
            info.star_count,
            info.fork_count,
            info.open_issue_count,
            info.language.as_deref().unwrap_or("unknown language"),
        ))
        .dim()
    );
    println!();

    let summary = analysis::summarize(info, &readme);
    let provider = OpenAiProvider::new(SecretString::from(api_key), CHAT_MODEL);

    let pb = spinner("analyzing legal-tech relevance...");
    let result = analysis::analyze(&provider, &summary).await;
    pb.finish_and_clear();

    match result {
        Ok(text) => {
            let renderer = MarkdownRenderer::new();
            println!("{}", renderer.render(&text));
        }
        Err(e) => {
            println!("\n  {} Analysis failed: {e}", style("!").red().bold());
        }
    }
    Ok(())
}
