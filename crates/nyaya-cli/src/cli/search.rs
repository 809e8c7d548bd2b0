//! Repository search command.
//!
//! One GitHub search call, results rendered as a table. The page size
//! clamp to 1-10 lives here, not in the adapter.

use anyhow::anyhow;
use comfy_table::Table;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use console::style;

use nyaya_core::repohost::RepoHost;
use nyaya_infra::github::GitHubClient;
use nyaya_types::repo::{SearchOrder, SearchSort};

use super::{Cli, key, spinner};

pub async fn run(cli: &Cli, query: &str, sort: &str, order: &str, limit: u8) -> anyhow::Result<()> {
    let sort: SearchSort = sort.parse().map_err(|e: String| anyhow!(e))?;
    let order: SearchOrder = order.parse().map_err(|e: String| anyhow!(e))?;
    let per_page = limit.clamp(1, 10);

    let client = GitHubClient::new(key::resolve_github_token(cli));

    let pb = spinner("searching repositories...");
    let results = client.search_repositories(query, sort, order, per_page).await;
    pb.finish_and_clear();

    let results = match results {
        Ok(results) => results,
        Err(e) => {
            println!("\n  {} Search failed: {e}", style("!").red().bold());
            return Ok(());
        }
    };

    if results.is_empty() {
        println!("\n  {}", style("No repositories matched.").dim());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["Repository", "Stars", "Forks", "Issues", "Language", "Description"]);

    for repo in &results {
        table.add_row([
            repo.full_name.clone(),
            repo.star_count.to_string(),
            repo.fork_count.to_string(),
            repo.open_issue_count.to_string(),
            repo.language.clone().unwrap_or_else(|| "-".to_string()),
            truncate_cell(repo.description.as_deref().unwrap_or("-"), 48),
        ]);
    }

    println!();
    println!("{table}");
    println!(
        "  {}",
        style(format!(
            "{} result(s) for '{query}', sorted by {sort} ({order})",
            results.len()
        ))
        .dim()
    );
    Ok(())
}

/// Shorten long descriptions so the table stays on one screen.
fn truncate_cell(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_cell_short_text_unchanged() {
        assert_eq!(truncate_cell("short", 48), "short");
    }

    #[test]
    fn test_truncate_cell_long_text_ellipsized() {
        let long = "x".repeat(100);
        let cell = truncate_cell(&long, 48);
        assert_eq!(cell.chars().count(), 48);
        assert!(cell.ends_with("..."));
    }

    #[test]
    fn test_truncate_cell_multibyte_safe() {
        let text = "न्याय ".repeat(20);
        let cell = truncate_cell(&text, 10);
        assert_eq!(cell.chars().count(), 10);
    }
}
