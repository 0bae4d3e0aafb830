//! # Display Modes
//!
//! User-selected rendering preferences and the tiers they resolve to.
//!
//! A [`DisplayMode`] is only a *request* (`auto` means "ask the terminal").
//! It is resolved into a concrete [`WidthTier`] and a Unicode decision on
//! every render, never cached, because the terminal can be resized between
//! two commands.

use std::fmt;
use std::str::FromStr;

/// Unicode art preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnicodeMode {
    /// Decide from locale and terminal-type hints.
    #[default]
    Auto,
    /// Always use Unicode art.
    On,
    /// Always use plain ASCII art.
    Off,
}

/// Width preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMode {
    /// Measure the terminal.
    #[default]
    Auto,
    Compact,
    Standard,
    Wide,
}

/// Discrete width class an asset variant is authored for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidthTier {
    /// 62 columns or fewer.
    Compact,
    /// 63 to 99 columns.
    Standard,
    /// 100 columns or more.
    Wide,
}

/// The pair of preferences a render call is made with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayMode {
    pub unicode: UnicodeMode,
    pub width: WidthMode,
}

impl DisplayMode {
    pub fn new(unicode: UnicodeMode, width: WidthMode) -> Self {
        Self { unicode, width }
    }
}

impl WidthMode {
    /// The tier an explicit mode pins, or `None` for `auto`.
    pub fn explicit_tier(self) -> Option<WidthTier> {
        match self {
            WidthMode::Auto => None,
            WidthMode::Compact => Some(WidthTier::Compact),
            WidthMode::Standard => Some(WidthTier::Standard),
            WidthMode::Wide => Some(WidthTier::Wide),
        }
    }
}

impl FromStr for UnicodeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(UnicodeMode::Auto),
            "on" => Ok(UnicodeMode::On),
            "off" => Ok(UnicodeMode::Off),
            other => Err(format!("invalid unicode mode '{other}' (expected auto, on or off)")),
        }
    }
}

impl FromStr for WidthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(WidthMode::Auto),
            "compact" => Ok(WidthMode::Compact),
            "standard" => Ok(WidthMode::Standard),
            "wide" => Ok(WidthMode::Wide),
            other => Err(format!(
                "invalid width mode '{other}' (expected auto, compact, standard or wide)"
            )),
        }
    }
}

impl fmt::Display for UnicodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnicodeMode::Auto => "auto",
            UnicodeMode::On => "on",
            UnicodeMode::Off => "off",
        };
        f.write_str(name)
    }
}

impl fmt::Display for WidthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidthMode::Auto => "auto",
            WidthMode::Compact => "compact",
            WidthMode::Standard => "standard",
            WidthMode::Wide => "wide",
        };
        f.write_str(name)
    }
}

impl fmt::Display for WidthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidthTier::Compact => "compact",
            WidthTier::Standard => "standard",
            WidthTier::Wide => "wide",
        };
        f.write_str(name)
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
    fn unicode_mode_parses_case_insensitively() {
        assert_eq!("AUTO".parse::<UnicodeMode>(), Ok(UnicodeMode::Auto));
        assert_eq!(" on ".parse::<UnicodeMode>(), Ok(UnicodeMode::On));
        assert_eq!("Off".parse::<UnicodeMode>(), Ok(UnicodeMode::Off));
    }

    #[test]
    fn unicode_mode_rejects_unknown_values() {
        let err = "maybe".parse::<UnicodeMode>().unwrap_err();
        assert!(err.contains("maybe"), "error should name the value: {err}");
    }

    #[test]
    fn width_mode_parses_all_variants() {
        assert_eq!("auto".parse::<WidthMode>(), Ok(WidthMode::Auto));
        assert_eq!("compact".parse::<WidthMode>(), Ok(WidthMode::Compact));
        assert_eq!("standard".parse::<WidthMode>(), Ok(WidthMode::Standard));
        assert_eq!("wide".parse::<WidthMode>(), Ok(WidthMode::Wide));
        assert!("huge".parse::<WidthMode>().is_err());
    }

    #[test]
    fn explicit_width_modes_pin_a_tier() {
        assert_eq!(WidthMode::Auto.explicit_tier(), None);
        assert_eq!(WidthMode::Compact.explicit_tier(), Some(WidthTier::Compact));
        assert_eq!(WidthMode::Standard.explicit_tier(), Some(WidthTier::Standard));
        assert_eq!(WidthMode::Wide.explicit_tier(), Some(WidthTier::Wide));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in [UnicodeMode::Auto, UnicodeMode::On, UnicodeMode::Off] {
            assert_eq!(mode.to_string().parse::<UnicodeMode>(), Ok(mode));
        }
    }
}
