//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing the
//! active response mode, model, and session information, plus the
//! standing legal disclaimer.

use console::style;

use nyaya_core::chat::ResponseMode;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(mode: ResponseMode, model: &str, session_id: &str) {
    println!();
    println!("  \u{2696} {}", style("NyayaBot").cyan().bold());
    println!("  {}", style("Indian legal assistant").dim());
    println!();

    match mode {
        ResponseMode::Live => {
            println!("  {}  {}", style("Mode:").bold(), style("live").green());
            println!("  {}  {}", style("Model:").bold(), style(model).dim());
        }
        ResponseMode::Simulated => {
            println!(
                "  {}  {}",
                style("Mode:").bold(),
                style("demo (canned responses)").yellow()
            );
        }
    }
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Information provided is for educational purposes only and is not legal advice.")
            .dim()
    );
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
