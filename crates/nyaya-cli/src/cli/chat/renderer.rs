//! Terminal markdown rendering for assistant replies.
//!
//! Legal answers are prose with lists and emphasis, so `termimad`
//! covers the whole surface; there is no code-fence handling.

use termimad::MadSkin;

/// Markdown renderer with the chat color scheme.
pub struct MarkdownRenderer {
    skin: MadSkin,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(termimad::crossterm::style::Color::Cyan);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self { skin }
    }

    /// Render a complete markdown reply for terminal display.
    pub fn render(&self, markdown: &str) -> String {
        format!("{}", self.skin.term_text(markdown))
    }

    /// Stats footer after a live reply.
    ///
    /// Format: "| {tokens} tokens . {time}s . {model}"
    pub fn print_stats_footer(&self, tokens: u32, response_ms: u64, model: &str) {
        let seconds = response_ms as f64 / 1000.0;
        println!(
            "\n  {} {} tokens {} {:.1}s {} {}",
            console::style("|").dim(),
            console::style(tokens).dim(),
            console::style("\u{00b7}").dim(),
            console::style(seconds).dim(),
            console::style("\u{00b7}").dim(),
            console::style(model).dim(),
        );
    }

    /// Footer after a canned demo-mode reply.
    pub fn print_demo_footer(&self) {
        println!(
            "\n  {} {}",
            console::style("|").dim(),
            console::style("demo mode \u{00b7} canned guidance").dim(),
        );
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
