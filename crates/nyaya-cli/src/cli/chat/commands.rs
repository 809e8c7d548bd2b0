//! Slash command parsing and help text for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for session
//! management, mode inspection, and credential clearing.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Start a new session (fresh conversation, same credential).
    New,
    /// Show conversation history for this session.
    History,
    /// Show the active response mode.
    Mode,
    /// Clear the credential for this session and revert to demo mode.
    ClearKey,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim().to_lowercase());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/new" => Some(ChatCommand::New),
        "/history" => Some(ChatCommand::History),
        "/mode" => Some(ChatCommand::Mode),
        "/key" => match arg.as_deref() {
            Some("clear") => Some(ChatCommand::ClearKey),
            _ => Some(ChatCommand::Unknown(
                "/key expects 'clear'".to_string(),
            )),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}      {}", style("/help").cyan(), "Show this help message");
    println!("  {}     {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}      {}", style("/exit").cyan(), "End the chat session");
    println!("  {}       {}", style("/new").cyan(), "Start a new session");
    println!(
        "  {}   {}",
        style("/history").cyan(),
        "Show conversation history"
    );
    println!(
        "  {}      {}",
        style("/mode").cyan(),
        "Show the active response mode"
    );
    println!(
        "  {} {}",
        style("/key clear").cyan(),
        "Drop the API key and switch to demo mode"
    );
    println!();
    println!("  {}", style("Ctrl+D to exit, Ctrl+C is safe").dim());
    println!();
}
