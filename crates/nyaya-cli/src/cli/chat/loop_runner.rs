//! Main chat loop orchestration.
//!
//! Coordinates the complete session lifecycle: credential resolution
//! and validation, welcome banner, seeded greeting, input loop with
//! slash commands, and mode-aware reply rendering. The session context
//! is created here and dropped when the loop exits.

use std::time::Instant;

use console::style;
use secrecy::SecretString;
use tracing::info;

use nyaya_core::chat::service::{CHAT_MODEL, ChatService};
use nyaya_core::chat::session::{ResponseMode, SessionContext};
use nyaya_core::credential::{self, KeyCheck};
use nyaya_infra::llm::OpenAiProvider;
use nyaya_types::conversation::MessageRole;
use nyaya_types::credential::Credential;

use crate::cli::{Cli, key, spinner};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::MarkdownRenderer;

/// Validate the candidate key and build the live provider if accepted.
///
/// The credential is kept in the session even when invalid so the user
/// can see what was rejected; the provider exists only for valid keys.
async fn establish_credential(
    candidate: Option<String>,
) -> (Option<Credential>, Option<OpenAiProvider>) {
    let Some(candidate) = candidate else {
        return (None, None);
    };

    let provider = OpenAiProvider::new(SecretString::from(candidate.clone()), CHAT_MODEL);
    let pb = spinner("validating API key...");
    let check = credential::validate(&candidate, &provider).await;
    pb.finish_and_clear();

    match check {
        KeyCheck::Valid => {
            let mut cred = Credential::new(candidate);
            cred.mark_valid();
            (Some(cred), Some(provider))
        }
        KeyCheck::TooShort => {
            println!(
                "  {} API key is too short; running in demo mode.",
                style("!").yellow().bold()
            );
            (Some(Credential::new(candidate)), None)
        }
        KeyCheck::Rejected { detail } => {
            println!(
                "  {} API key rejected ({detail}); running in demo mode.",
                style("!").yellow().bold()
            );
            (Some(Credential::new(candidate)), None)
        }
    }
}

/// Run the interactive chat loop.
pub async fn run_chat_loop(cli: &Cli) -> anyhow::Result<()> {
    let candidate = key::resolve_api_key(cli);
    if candidate.is_none() {
        println!(
            "\n  {} No API key configured. Replies will use canned demo guidance.",
            style("!").yellow().bold()
        );
    }
    let (credential, provider) = establish_credential(candidate).await;

    let mut session = SessionContext::new();
    if let Some(cred) = credential {
        session.set_credential(cred);
    }
    let mut service: ChatService<OpenAiProvider> = ChatService::new(provider);

    info!(session = %session.id(), mode = %session.mode(), "Chat session started");
    print_welcome_banner(session.mode(), CHAT_MODEL, &session.id().to_string());

    let renderer = MarkdownRenderer::new();

    // Greeting is pre-seeded as the first conversation turn.
    if let Some(greeting) = session.conversation().last() {
        println!("  {}", renderer.render(&greeting.text).trim());
        println!();
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::New => {
                            let credential = session.credential().cloned();
                            session = SessionContext::new();
                            if let Some(cred) = credential {
                                session.set_credential(cred);
                            }
                            info!(session = %session.id(), "New session started");
                            println!(
                                "\n  {} Started a new session ({}).",
                                style("*").cyan().bold(),
                                style(&session.id().to_string()[..8]).dim()
                            );
                            if let Some(greeting) = session.conversation().last() {
                                println!("\n  {}", renderer.render(&greeting.text).trim());
                            }
                            println!();
                        }
                        ChatCommand::History => print_history(&session),
                        ChatCommand::Mode => {
                            let label = match session.mode() {
                                ResponseMode::Live => "live (validated key)",
                                ResponseMode::Simulated => "simulated (canned demo replies)",
                            };
                            println!("\n  {} Mode: {label}\n", style("*").cyan().bold());
                        }
                        ChatCommand::ClearKey => {
                            session.clear_credential();
                            service = ChatService::new(None);
                            println!(
                                "\n  {} API key cleared for this session; demo mode.\n",
                                style("*").cyan().bold()
                            );
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                        }
                    }
                    continue;
                }

                let pb = spinner("NyayaBot is thinking...");
                let start = Instant::now();
                let result = service.respond(&mut session, &text).await;
                pb.finish_and_clear();

                match result {
                    Ok(reply) => {
                        println!("\n  {}", style("NyayaBot >").cyan().bold());
                        println!("{}", renderer.render(&reply.text));
                        match reply.mode {
                            ResponseMode::Live => {
                                let tokens = reply.usage.map(|u| u.output_tokens).unwrap_or(0);
                                renderer.print_stats_footer(
                                    tokens,
                                    start.elapsed().as_millis() as u64,
                                    CHAT_MODEL,
                                );
                            }
                            ResponseMode::Simulated => renderer.print_demo_footer(),
                        }
                        println!();
                    }
                    Err(e) => {
                        eprintln!("\n  {} LLM error: {e}", style("!").red().bold());
                        eprintln!(
                            "  {}",
                            style(
                                "Your question stays in the history; try again or /key clear for demo mode."
                            )
                            .dim()
                        );
                    }
                }
            }
        }
    }

    info!(session = %session.id(), turns = session.conversation().len(), "Chat session ended");
    Ok(())
}

/// Print the full conversation with timestamps and role labels.
fn print_history(session: &SessionContext) {
    println!();
    for turn in session.conversation().turns() {
        let label = match turn.role {
            MessageRole::User => style("You").green().to_string(),
            MessageRole::Assistant => style("NyayaBot").cyan().to_string(),
            MessageRole::System => "System".to_string(),
        };
        let preview = if turn.text.chars().count() > 100 {
            let kept: String = turn.text.chars().take(97).collect();
            format!("{kept}...")
        } else {
            turn.text.clone()
        };
        println!(
            "  {} {} {}",
            style(turn.timestamp.format("%H:%M")).dim(),
            style(label).bold(),
            preview
        );
    }
    println!();
}
