//! # Tier Selector
//!
//! Turns a [`DisplayMode`] request into concrete rendering choices: a width
//! tier, a Unicode decision, the asset to print and the progress glyphs.
//! Everything is resolved again on every call.

use tracing::trace;

use crate::display::{DisplayMode, UnicodeMode, WidthMode, WidthTier};
use crate::terminal::assets::{self, AssetKind};
use crate::terminal::probe::CapabilityProbe;

/// Widest terminal still served the compact layout.
pub const COMPACT_MAX: u16 = 62;
/// Narrowest terminal served the wide layout.
pub const WIDE_MIN: u16 = 100;

/// Characters a progress bar is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressGlyphs {
    pub filled: char,
    pub empty: char,
}

impl ProgressGlyphs {
    pub const UNICODE: ProgressGlyphs = ProgressGlyphs { filled: '█', empty: '░' };
    pub const ASCII: ProgressGlyphs = ProgressGlyphs { filled: '#', empty: '.' };

    /// Glyphs follow the Unicode decision only, never the width tier.
    pub fn for_unicode(unicode: bool) -> Self {
        if unicode { Self::UNICODE } else { Self::ASCII }
    }
}

/// Classifies a column count. Total over all widths, no gaps.
pub fn classify_width(width: u16) -> WidthTier {
    if width <= COMPACT_MAX {
        WidthTier::Compact
    } else if width < WIDE_MIN {
        WidthTier::Standard
    } else {
        WidthTier::Wide
    }
}

/// Explicit modes never touch the probe. `auto` on a redirected stream is
/// always `standard`, whatever the measured width.
pub fn resolve_width_tier<P>(mode: WidthMode, probe: &P) -> WidthTier
where
    P: CapabilityProbe + ?Sized,
{
    if let Some(tier) = mode.explicit_tier() {
        return tier;
    }
    if !probe.is_interactive() {
        return WidthTier::Standard;
    }
    classify_width(probe.detect_width())
}

/// `auto` uses the non-blocking check only.
pub fn resolve_unicode<P>(mode: UnicodeMode, probe: &P) -> bool
where
    P: CapabilityProbe + ?Sized,
{
    match mode {
        UnicodeMode::Off => false,
        UnicodeMode::On => true,
        UnicodeMode::Auto => probe.detect_unicode_safe(),
    }
}

/// Binds a display mode to a probe.
#[derive(Clone, Debug)]
pub struct TierSelector<P> {
    mode: DisplayMode,
    probe: P,
}

impl<P: CapabilityProbe> TierSelector<P> {
    pub fn new(mode: DisplayMode, probe: P) -> Self {
        Self { mode, probe }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn width_tier(&self) -> WidthTier {
        resolve_width_tier(self.mode.width, &self.probe)
    }

    pub fn unicode(&self) -> bool {
        resolve_unicode(self.mode.unicode, &self.probe)
    }

    pub fn select_asset(&self, kind: AssetKind) -> &'static str {
        let tier = self.width_tier();
        let unicode = self.unicode();
        trace!(%kind, %tier, unicode, "asset selected");
        assets::select(kind, tier, unicode)
    }

    pub fn glyphs(&self) -> ProgressGlyphs {
        ProgressGlyphs::for_unicode(self.unicode())
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
