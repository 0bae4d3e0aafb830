//! # Console Port
//!
//! The only way the engine produces output. The terminal adapter in the CLI
//! writes to stdout and sleeps; [`Transcript`] records the same bytes in
//! memory and only tallies the pauses.

use std::time::Duration;

use masterhacker_common::display::WidthTier;
use masterhacker_common::terminal::assets::{self, AssetKind};
use masterhacker_common::terminal::tier::ProgressGlyphs;

/// How a line should be emphasised. Only colours change, never the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Alert,
}

impl Tone {
    pub fn for_asset(kind: AssetKind) -> Tone {
        match kind {
            AssetKind::Banner => Tone::Info,
            AssetKind::SuccessBox => Tone::Success,
            AssetKind::WarningBox => Tone::Alert,
        }
    }
}

pub trait Console {
    /// Writes `text` followed by a newline.
    fn line(&mut self, tone: Tone, text: &str);

    /// Writes `text` followed by a carriage return so the next frame draws over it.
    fn frame(&mut self, text: &str);

    /// Writes `text` without a newline.
    fn prompt(&mut self, text: &str);

    /// The pane for `kind` under the display mode in effect right now.
    fn select_asset(&self, kind: AssetKind) -> &'static str;

    fn glyphs(&self) -> ProgressGlyphs;

    fn pause(&mut self, delay: Duration);

    fn clear(&mut self);

    fn asset(&mut self, kind: AssetKind) {
        let pane = self.select_asset(kind);
        self.line(Tone::for_asset(kind), pane);
    }
}

/// In-memory console holding exactly the bytes a terminal would receive.
#[derive(Clone, Debug)]
pub struct Transcript {
    output: String,
    paused: Duration,
    clears: usize,
    tier: WidthTier,
    unicode: bool,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(WidthTier::Standard, false)
    }
}

impl Transcript {
    pub fn new(tier: WidthTier, unicode: bool) -> Self {
        Self {
            output: String::new(),
            paused: Duration::ZERO,
            clears: 0,
            tier,
            unicode,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.output.lines()
    }

    /// Total time a real terminal would have slept.
    pub fn paused(&self) -> Duration {
        self.paused
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Returns the recorded output and starts over.
    pub fn take(&mut self) -> String {
        self.paused = Duration::ZERO;
        self.clears = 0;
        std::mem::take(&mut self.output)
    }
}

impl Console for Transcript {
    fn line(&mut self, _tone: Tone, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn frame(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\r');
    }

    fn prompt(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn select_asset(&self, kind: AssetKind) -> &'static str {
        assets::select(kind, self.tier, self.unicode)
    }

    fn glyphs(&self) -> ProgressGlyphs {
        ProgressGlyphs::for_unicode(self.unicode)
    }

    fn pause(&mut self, delay: Duration) {
        self.paused += delay;
    }

    fn clear(&mut self) {
        self.clears += 1;
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
    fn transcript_records_terminal_bytes() {
        let mut t = Transcript::default();
        t.prompt("> ");
        t.line(Tone::Plain, "scan");
        t.frame("| 50% |");
        t.line(Tone::Success, "");
        assert_eq!(t.output(), "> scan\n| 50% |\r\n");
    }

    #[test]
    fn transcript_tallies_pauses_and_clears() {
        let mut t = Transcript::default();
        t.pause(Duration::from_millis(150));
        t.pause(Duration::from_secs(1));
        t.clear();
        assert_eq!(t.paused(), Duration::from_millis(1150));
        assert_eq!(t.clears(), 1);

        t.take();
        assert_eq!(t.paused(), Duration::ZERO);
        assert_eq!(t.clears(), 0);
    }

    #[test]
    fn asset_prints_selected_pane() {
        let mut t = Transcript::new(WidthTier::Compact, true);
        t.asset(AssetKind::WarningBox);
        let expected = format!(
            "{}\n",
            assets::select(AssetKind::WarningBox, WidthTier::Compact, true)
        );
        assert_eq!(t.output(), expected);
    }
}
