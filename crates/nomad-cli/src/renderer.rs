//! Terminal rendering of markdown output.
//!
//! Rich output goes through termimad; `--no-color` prints the markdown as
//! is.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            // Headers keep their hashes so day and list boundaries stay visible
            if line.starts_with('#') {
                println!("\x1b[32m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Renders anything with a markdown `Display`.
    pub fn show(&self, value: &impl std::fmt::Display) -> Result<()> {
        self.render(&value.to_string())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
