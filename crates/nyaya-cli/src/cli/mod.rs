//! CLI command definitions and shared helpers for the `nyaya` binary.
//!
//! Uses clap derive macros for argument parsing. Credentials arrive via
//! flags/environment (clap's `env` feature) with the OS keychain as the
//! fallback source.

pub mod analyze;
pub mod chat;
pub mod key;
pub mod search;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with an AI assistant for Indian law, in live or demo mode.
#[derive(Parser)]
#[command(name = "nyaya", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// OpenAI API key; falls back to the OS keychain when unset.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// GitHub token for authenticated code-host calls (optional).
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub github_token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Search GitHub repositories.
    Search {
        /// Free-text search query.
        query: String,

        /// Sort field: stars, forks, or updated.
        #[arg(long, default_value = "stars")]
        sort: String,

        /// Sort order: desc or asc.
        #[arg(long, default_value = "desc")]
        order: String,

        /// Number of results (clamped to 1-10).
        #[arg(long, default_value_t = 5)]
        limit: u8,
    },

    /// Analyze a GitHub repository for legal-tech relevance.
    Analyze {
        /// Repository URL, e.g. https://github.com/owner/repo
        url: String,
    },

    /// Manage the stored OpenAI API key.
    Key {
        #[command(subcommand)]
        action: KeyCommand,
    },

    /// Generate shell completions.
    Completions { shell: Shell },
}

#[derive(Subcommand)]
pub enum KeyCommand {
    /// Store the OpenAI API key in the OS keychain.
    Set {
        /// Key value; prompted for (hidden input) when omitted.
        value: Option<String>,
    },

    /// Check the configured key against the provider.
    Validate,

    /// Remove the key from the OS keychain.
    Clear,
}

/// Spinner shown while a network call is in flight.
pub(crate) fn spinner(message: &str) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
