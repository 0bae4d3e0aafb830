use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use colored::*;
use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};
use tracing::debug;

use masterhacker_common::config::{Config, Pacing};
use masterhacker_common::terminal::assets::AssetKind;
use masterhacker_common::terminal::probe::SystemProbe;
use masterhacker_common::terminal::tier::{ProgressGlyphs, TierSelector};
use masterhacker_core::console::{Console, Tone};

use crate::terminal::colors;

/// Colour is only worth its escape codes on a real terminal.
pub fn initialize() {
    if !console::Term::stdout().is_term() {
        colored::control::set_override(false);
    }
}

/// Printed after the banner when no mode was requested.
pub const USAGE_HINTS: [&str; 6] = [
    "",
    "Use --help for options.",
    "Examples:",
    "  masterhacker scan                # Run single command",
    "  masterhacker --interactive       # Interactive mode",
    "  masterhacker --script demo       # Demo mode",
];

pub fn paint(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Info => text.color(colors::INFO),
        Tone::Success => text.color(colors::SUCCESS).bold(),
        Tone::Warning => text.color(colors::WARNING),
        Tone::Alert => text.color(colors::ALERT).bold(),
    }
}

/// [`Console`] writing to stdout. Display decisions are made again for every
/// pane and every progress bar, so a resized window is picked up mid-session.
pub struct TerminalConsole {
    selector: TierSelector<SystemProbe>,
    pacing: Pacing,
    out: Stdout,
}

impl TerminalConsole {
    pub fn new(config: &Config) -> Self {
        Self {
            selector: TierSelector::new(config.display_mode(), SystemProbe),
            pacing: config.pacing,
            out: io::stdout(),
        }
    }

    fn emit(&mut self, text: impl Display, end: &str) {
        let written = write!(self.out, "{text}{end}").and_then(|_| self.out.flush());
        if let Err(e) = written {
            debug!("stdout write failed: {e}");
        }
    }
}

impl Console for TerminalConsole {
    fn line(&mut self, tone: Tone, text: &str) {
        if text.is_empty() {
            self.emit("", "\n");
        } else {
            self.emit(paint(tone, text), "\n");
        }
    }

    fn frame(&mut self, text: &str) {
        self.emit(text.color(colors::PRIMARY), "\r");
    }

    fn prompt(&mut self, text: &str) {
        self.emit(text.color(colors::SEPARATOR), "");
    }

    fn select_asset(&self, kind: AssetKind) -> &'static str {
        self.selector.select_asset(kind)
    }

    fn glyphs(&self) -> ProgressGlyphs {
        self.selector.glyphs()
    }

    fn pause(&mut self, delay: Duration) {
        self.pacing.wait(delay);
    }

    fn clear(&mut self) {
        if let Err(e) = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
            debug!("screen clear failed: {e}");
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_never_changes_text() {
        colored::control::set_override(false);
        for tone in [Tone::Plain, Tone::Info, Tone::Success, Tone::Warning, Tone::Alert] {
            assert_eq!(paint(tone, "ACCESS GRANTED").to_string(), "ACCESS GRANTED");
        }
    }
}
