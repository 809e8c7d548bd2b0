//! Nyaya CLI entry point.
//!
//! Binary name: `nyaya`
//!
//! Parses CLI arguments, initializes tracing, then dispatches to the
//! appropriate command handler.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, KeyCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,nyaya=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match &cli.command {
        Commands::Chat => {
            cli::chat::run_chat_loop(&cli).await?;
        }

        Commands::Search {
            query,
            sort,
            order,
            limit,
        } => {
            cli::search::run(&cli, query, sort, order, *limit).await?;
        }

        Commands::Analyze { url } => {
            cli::analyze::run(&cli, url).await?;
        }

        Commands::Key { action } => match action {
            KeyCommand::Set { value } => {
                cli::key::set_key(value.as_deref())?;
            }
            KeyCommand::Validate => {
                cli::key::validate_key(&cli).await?;
            }
            KeyCommand::Clear => {
                cli::key::clear_key()?;
            }
        },

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "nyaya", &mut std::io::stdout());
        }
    }

    Ok(())
}
