#![cfg(test)]
use std::cell::Cell;
use std::time::Duration;

use masterhacker_common::display::{DisplayMode, UnicodeMode, WidthMode, WidthTier};
use masterhacker_common::terminal::assets::{self, AssetKind};
use masterhacker_common::terminal::probe::CapabilityProbe;
use masterhacker_common::terminal::tier::{ProgressGlyphs, TierSelector};
use masterhacker_core::console::Transcript;
use masterhacker_core::engine::{CommandEngine, Seeding};
use masterhacker_core::progress::Progress;
use masterhacker_core::session::SessionState;

/// A terminal whose window can be resized between calls.
struct Window {
    width: Cell<u16>,
    unicode_safe: bool,
}

impl CapabilityProbe for Window {
    fn detect_width(&self) -> u16 {
        self.width.get()
    }

    fn detect_unicode_safe(&self) -> bool {
        self.unicode_safe
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[test]
fn resize_changes_tier_on_next_asset() {
    let window = Window { width: Cell::new(120), unicode_safe: true };
    let selector = TierSelector::new(DisplayMode::default(), &window);

    assert_eq!(
        selector.select_asset(AssetKind::Banner),
        assets::select(AssetKind::Banner, WidthTier::Wide, true)
    );

    window.width.set(50);
    assert_eq!(
        selector.select_asset(AssetKind::Banner),
        assets::select(AssetKind::Banner, WidthTier::Compact, true)
    );
}

#[test]
fn forced_ascii_wins_over_a_capable_terminal() {
    let window = Window { width: Cell::new(80), unicode_safe: true };
    let selector = TierSelector::new(DisplayMode::new(UnicodeMode::Off, WidthMode::Auto), &window);

    assert_eq!(selector.glyphs(), ProgressGlyphs::ASCII);
    for kind in AssetKind::ALL {
        assert!(!selector.select_asset(kind).contains('╔'), "{kind}");
    }
}

#[test]
fn engine_panes_follow_console_tier() {
    let mut state = SessionState::new();
    for (tier, unicode) in [(WidthTier::Compact, true), (WidthTier::Wide, false)] {
        let mut engine = CommandEngine::new(Transcript::new(tier, unicode), Seeding::replay());
        engine.execute_line("countertrace", &mut state);
        let out = engine.console().output();
        assert!(out.contains(assets::select(AssetKind::SuccessBox, tier, unicode)));
    }
}

#[test]
fn progress_bar_width_matches_step_count() {
    let progress = Progress::new("Scanning network", 24, Duration::ZERO);
    for glyphs in [ProgressGlyphs::ASCII, ProgressGlyphs::UNICODE] {
        for frame in progress.frames(glyphs) {
            let bar = frame
                .split_once('[')
                .and_then(|(_, rest)| rest.split_once(']'))
                .map(|(bar, _)| bar)
                .unwrap_or_default();
            assert_eq!(bar.chars().count(), 24, "{frame}");
        }
    }
}
