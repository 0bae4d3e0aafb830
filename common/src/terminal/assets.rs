//! # Asset Catalog
//!
//! Pre-authored display panes, one variant per width tier and character set.
//!
//! Callers never branch on tier or Unicode themselves: they ask [`select`]
//! for a kind and print what comes back, so the art can change freely.

use std::fmt;

use crate::display::WidthTier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Start-up banner.
    Banner,
    /// "ACCESS GRANTED" pane shown after a successful operation.
    SuccessBox,
    /// "WARNING" pane shown before an intrusive operation.
    WarningBox,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Banner, AssetKind::SuccessBox, AssetKind::WarningBox];
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Banner => "banner",
            AssetKind::SuccessBox => "success-box",
            AssetKind::WarningBox => "warning-box",
        };
        f.write_str(name)
    }
}

/// Pure lookup across tier × character set × kind.
pub fn select(kind: AssetKind, tier: WidthTier, unicode: bool) -> &'static str {
    match (tier, unicode, kind) {
        (WidthTier::Compact, false, AssetKind::Banner) => COMPACT_ASCII_BANNER,
        (WidthTier::Compact, false, AssetKind::SuccessBox) => COMPACT_ASCII_SUCCESS_BOX,
        (WidthTier::Compact, false, AssetKind::WarningBox) => COMPACT_ASCII_WARNING_BOX,
        (WidthTier::Compact, true, AssetKind::Banner) => COMPACT_UNICODE_BANNER,
        (WidthTier::Compact, true, AssetKind::SuccessBox) => COMPACT_UNICODE_SUCCESS_BOX,
        (WidthTier::Compact, true, AssetKind::WarningBox) => COMPACT_UNICODE_WARNING_BOX,
        (WidthTier::Standard, false, AssetKind::Banner) => STANDARD_ASCII_BANNER,
        (WidthTier::Standard, false, AssetKind::SuccessBox) => STANDARD_ASCII_SUCCESS_BOX,
        (WidthTier::Standard, false, AssetKind::WarningBox) => STANDARD_ASCII_WARNING_BOX,
        (WidthTier::Standard, true, AssetKind::Banner) => STANDARD_UNICODE_BANNER,
        (WidthTier::Standard, true, AssetKind::SuccessBox) => STANDARD_UNICODE_SUCCESS_BOX,
        (WidthTier::Standard, true, AssetKind::WarningBox) => STANDARD_UNICODE_WARNING_BOX,
        (WidthTier::Wide, false, AssetKind::Banner) => WIDE_ASCII_BANNER,
        (WidthTier::Wide, false, AssetKind::SuccessBox) => WIDE_ASCII_SUCCESS_BOX,
        (WidthTier::Wide, false, AssetKind::WarningBox) => WIDE_ASCII_WARNING_BOX,
        (WidthTier::Wide, true, AssetKind::Banner) => WIDE_UNICODE_BANNER,
        (WidthTier::Wide, true, AssetKind::SuccessBox) => WIDE_UNICODE_SUCCESS_BOX,
        (WidthTier::Wide, true, AssetKind::WarningBox) => WIDE_UNICODE_WARNING_BOX,
    }
}

const COMPACT_ASCII_BANNER: &str = r#"
 +==========================================================+
 |                                                          |
 |   █   █  █████  █████  █   █  █████  ████                |
 |   █   █  █   █  █      █  █   █      █   █               |
 |   █████  █████  █      ███    ████   ████                |
 |   █   █  █   █  █      █  █   █      █  █                |
 |   █   █  █   █  █████  █   █  █████  █   █               |
 |                                                          |
 |   █████  █████  ████   █   █  █████  █   █  █████  █     |
 |     █    █      █   █  ██ ██    █    ██  █  █   █  █     |
 |     █    ████   ████   █ █ █    █    █ █ █  █████  █     |
 |     █    █      █  █   █   █    █    █  ██  █   █  █     |
 |     █    █████  █   █  █   █  █████  █   █  █   █  █████ |
 |                                                          |
 |                   [ VERSION 2.0.7 ]                     |
 |             *** CLASSIFIED ACCESS ONLY ***              |
 +==========================================================+
"#;

const COMPACT_ASCII_SUCCESS_BOX: &str = r#"
 +========================================================+
 |                                                        |
 |    ████   ████  ████  ████  ████  ████                |
 |   ██  ██ ██  ██ ██  ██ ██    ██    ██                 |
 |   ██████ ██     ██     ████  ████  ████               |
 |   ██  ██ ██  ██ ██  ██ ██       ██ ██                 |
 |   ██  ██  ████   ████  ████  ████  ████               |
 |                                                        |
 |    ████  ████   ████  █  █ ████  ████  ████           |
 |   ██     ██  █ ██  ██ ██ █  ██   ██     ██  █         |
 |   ██ ███ ████  ██████ ████  ██   ████   ██  █         |
 |   ██  ██ ██ █  ██  ██ █ ██  ██   ██     ██  █         |
 |    ████  █  █  ██  ██ █  █  ██   ████   ████          |
 |                                                        |
 |                *** ACCESS GRANTED ***                  |
 +========================================================+
"#;

const COMPACT_ASCII_WARNING_BOX: &str = r#"
 +=======================================================+
 |                                                       |
 |   █   █  ████  ████  █  █ ████ █  █  ████           |
 |   █   █ ██  ██ ██  █ ██ █  ██  ██ █ ██              |
 |   █ █ █ ██████ ████  ████  ██  ████ ██ ██           |
 |   █████ ██  ██ ██ █  █ ██  ██  █ ██ ██  █           |
 |   ██ ██ ██  ██ █  █  █  █ ████ █  █  ████           |
 |                                                       |
 |                   !!! WARNING !!!                    |
 |            UNAUTHORIZED ACCESS DETECTED              |
 |          INITIATING SECURITY PROTOCOLS               |
 +=======================================================+
"#;

const COMPACT_UNICODE_BANNER: &str = r#"
 ╔══════════════════════════════════════════════════════╗
 ║                                                      ║
 ║   █   █  █████  █████  █   █  █████  ████            ║
 ║   █   █  █   █  █      █  █   █      █   █           ║
 ║   █████  █████  █      ███    ████   ████            ║
 ║   █   █  █   █  █      █  █   █      █  █            ║
 ║   █   █  █   █  █████  █   █  █████  █   █           ║
 ║                                                      ║
 ║   █████  █████  ████   █   █  █████  █   █  █████  █ ║
 ║     █    █      █   █  ██ ██    █    ██  █  █   █  █ ║
 ║     █    ████   ████   █ █ █    █    █ █ █  █████  █ ║
 ║     █    █      █  █   █   █    █    █  ██  █   █  █ ║
 ║     █    █████  █   █  █   █  █████  █   █  █   █  █ ║
 ║                                                      ║
 ║                 [ VERSION 2.0.7 ]                   ║
 ║           *** CLASSIFIED ACCESS ONLY ***            ║
 ╚══════════════════════════════════════════════════════╝
"#;

const COMPACT_UNICODE_SUCCESS_BOX: &str = r#"
 ╔════════════════════════════════════════════════════╗
 ║                                                    ║
 ║    ████   ████  ████  ████  ████  ████            ║
 ║   ██  ██ ██  ██ ██  ██ ██    ██    ██             ║
 ║   ██████ ██     ██     ████  ████  ████           ║
 ║   ██  ██ ██  ██ ██  ██ ██       ██ ██             ║
 ║   ██  ██  ████   ████  ████  ████  ████           ║
 ║                                                    ║
 ║    ████  ████   ████  █  █ ████  ████  ████       ║
 ║   ██     ██  █ ██  ██ ██ █  ██   ██     ██  █     ║
 ║   ██ ███ ████  ██████ ████  ██   ████   ██  █     ║
 ║   ██  ██ ██ █  ██  ██ █ ██  ██   ██     ██  █     ║
 ║    ████  █  █  ██  ██ █  █  ██   ████   ████      ║
 ║                                                    ║
 ║              *** ACCESS GRANTED ***                ║
 ╚════════════════════════════════════════════════════╝
"#;

const COMPACT_UNICODE_WARNING_BOX: &str = r#"
 ╔═══════════════════════════════════════════════════╗
 ║                                                   ║
 ║   █   █  █████  ████   █   █  █████  █   █  █████ ║
 ║   █   █  █   █  █   █  ██  █    █    ██  █  █     ║
 ║   █ █ █  █████  ████   █ █ █    █    █ █ █  █ ███ ║
 ║   ██ ██  █   █  █  █   █  ██    █    █  ██  █   █ ║
 ║   █   █  █   █  █   █  █   █  █████  █   █  █████ ║
 ║                                                   ║
 ║                 !!! WARNING !!!                  ║
 ║          UNAUTHORIZED ACCESS DETECTED            ║
 ║        INITIATING SECURITY PROTOCOLS             ║
 ╚═══════════════════════════════════════════════════╝
"#;

const STANDARD_ASCII_BANNER: &str = r#"
 +============================================================================+
 |                                                                            |
 |  ██   ██   ████   ██████  ██  ██  ████████  ██████                        |
 |  ██   ██  ██  ██  ██      ██ ██   ██        ██   ██                       |
 |  ███████  ██████  ██      ████    ████      ██████                        |
 |  ██   ██  ██  ██  ██      ██ ██   ██        ██  ██                        |
 |  ██   ██  ██  ██  ██████  ██  ██  ████████  ██   ██                       |
 |                                                                            |
 |  ████████  ████████  ██████  ██   ██  ██████  ██   ██   ████   ██         |
 |     ██     ██        ██   ██ ███ ███   ██    ███  ██  ██  ██  ██          |
 |     ██     ████      ██████  ███████   ██    ████ ██  ██████  ██          |
 |     ██     ██        ██  ██  ██ █ ██   ██    ██ ████  ██  ██  ██          |
 |     ██     ████████  ██   ██ ██   ██  ██████ ██  ███  ██   ██ ██████      |
 |                                                                            |
 |                           [ VERSION 2.0.7 ]                               |
 |                     *** CLASSIFIED ACCESS ONLY ***                        |
 +============================================================================+
"#;

const STANDARD_ASCII_SUCCESS_BOX: &str = r#"
 +=========================================================================+
 |                                                                         |
 |      ██████   ██████  ██████  ████████ ████████ ████████              |
 |     ██  ██   ██  ██  ██  ██  ██       ██       ██                     |
 |    ██   ██  ██      ██      ████     ████████ ████████                |
 |    ███████  ██  ██  ██  ██  ██           ██   ██                      |
 |    ██   ██   ██████  ██████  ████████ ████████ ████████               |
 |                                                                         |
 |       ████████ ██████    ████   ██   ██ ████████ ████████  ████        |
 |      ██       ██   ██  ██  ██  ███  ██    ██    ██       ██  ██       |
 |      ██  ████ ██████   ██████  ████ ██    ██    ████     ██  ██       |
 |      ██   ██  ██  ██   ██  ██  ██ ████    ██    ██       ██  ██       |
 |       ███████ ██   ██  ██   ██ ██  ███    ██    ████████  ████        |
 |                                                                         |
 |                        *** ACCESS GRANTED ***                          |
 +=========================================================================+
"#;

const STANDARD_ASCII_WARNING_BOX: &str = r#"
 +========================================================================+
 |                                                                        |
 |    ██   ██   ████   ██████  ██   ██ ████ ██   ██  ████████           |
 |    ██   ██  ██  ██  ██   ██ ███  ██  ██  ███  ██ ██                  |
 |    ██ █ ██  ██████  ██████  ████ ██  ██  ████ ██ ██  ████            |
 |    ███████  ██  ██  ██  ██  ██ ████  ██  ██ ████ ██   ██             |
 |    ███  ██  ██  ██  ██   ██ ██  ███ ████ ██  ███  ███████            |
 |                                                                        |
 |                           !!! WARNING !!!                             |
 |                    UNAUTHORIZED ACCESS DETECTED                       |
 |                  INITIATING SECURITY PROTOCOLS                        |
 +========================================================================+
"#;

const STANDARD_UNICODE_BANNER: &str = r#"
 ╔════════════════════════════════════════════════════════════════════════╗
 ║                                                                        ║
 ║  ██   ██   ████   ██████  ██  ██  ████████  ██████                    ║
 ║  ██   ██  ██  ██  ██      ██ ██   ██        ██   ██                   ║
 ║  ███████  ██████  ██      ████    ████      ██████                    ║
 ║  ██   ██  ██  ██  ██      ██ ██   ██        ██  ██                    ║
 ║  ██   ██  ██  ██  ██████  ██  ██  ████████  ██   ██                   ║
 ║                                                                        ║
 ║  ████████  ████████  ██████  ██   ██  ██████  ██   ██   ████   ██     ║
 ║     ██     ██        ██   ██ ███ ███   ██    ███  ██  ██  ██  ██      ║
 ║     ██     ████      ██████  ███████   ██    ████ ██  ██████  ██      ║
 ║     ██     ██        ██  ██  ██ █ ██   ██    ██ ████  ██  ██  ██      ║
 ║     ██     ████████  ██   ██ ██   ██  ██████ ██  ███  ██   ██ ██████  ║
 ║                                                                        ║
 ║                         [ VERSION 2.0.7 ]                             ║
 ║                   *** CLASSIFIED ACCESS ONLY ***                      ║
 ╚════════════════════════════════════════════════════════════════════════╝
"#;

const STANDARD_UNICODE_SUCCESS_BOX: &str = r#"
 ╔═══════════════════════════════════════════════════════════════════╗
 ║                                                                   ║
 ║      █████   █████  █████  █████  █████  █████              ║
 ║      █   █   █      █      █      █      █                   ║
 ║      █████   █      █      ████   █████  █████              ║
 ║      █   █   █      █      █          █      █              ║
 ║      █   █   █████  █████  █████  █████  █████              ║
 ║                                                                   ║
 ║       █████  ████   █████  █   █  █████  █████  ████       ║
 ║       █      █   █  █   █  ██  █    █    █      █   █      ║
 ║       █ ███  ████   █████  █ █ █    █    ████   █   █      ║
 ║       █   █  █  █   █   █  █  ██    █    █      █   █      ║
 ║       █████  █   █  █   █  █   █    █    █████  ████       ║
 ║                                                                   ║
 ║                      *** ACCESS GRANTED ***                      ║
 ╚═══════════════════════════════════════════════════════════════════╝
"#;

const STANDARD_UNICODE_WARNING_BOX: &str = r#"
 ╔══════════════════════════════════════════════════════════════════╗
 ║                                                                  ║
 ║    ██   ██   ████   ██████  ██   ██ ████ ██   ██  ████████     ║
 ║    ██   ██  ██  ██  ██   ██ ███  ██  ██  ███  ██ ██            ║
 ║    ██ █ ██  ██████  ██████  ████ ██  ██  ████ ██ ██  ████      ║
 ║    ███████  ██  ██  ██  ██  ██ ████  ██  ██ ████ ██   ██       ║
 ║    ███  ██  ██  ██  ██   ██ ██  ███ ████ ██  ███  ███████      ║
 ║                                                                  ║
 ║                         !!! WARNING !!!                         ║
 ║                  UNAUTHORIZED ACCESS DETECTED                   ║
 ║                INITIATING SECURITY PROTOCOLS                    ║
 ╚══════════════════════════════════════════════════════════════════╝
"#;

const WIDE_ASCII_BANNER: &str = r#"
 +==================================================================================================+
 |                                                                                                  |
 |  █   █   ████    █████  █   █  █████  ████                                                     |
 |  █   █  █    █  █       █  █   █      █   █                                                    |
 |  █████  ██████  █       ███    ████   ████                                                     |
 |  █   █  █    █  █       █  █   █      █  █                                                     |
 |  █   █  █    █   █████  █   █  █████  █   █                                                    |
 |                                                                                                  |
 |  █████  █████  ████   █   █  █████  █   █   ████   █                                          |
 |    █    █      █   █  ██ ██    █    ██  █  █    █  █                                          |
 |    █    ████   ████   █ █ █    █    █ █ █  ██████  █                                          |
 |    █    █      █  █   █   █    █    █  ██  █    █  █                                          |
 |    █    █████  █   █  █   █  █████  █   █  █    █  █████                                      |
 |                                                                                                  |
 |                                     [ VERSION 2.0.7 ]                                          |
 |                               *** CLASSIFIED ACCESS ONLY ***                                    |
 +==================================================================================================+
"#;

const WIDE_ASCII_SUCCESS_BOX: &str = r#"
 +===============================================================================================+
 |                                                                                               |
 |      █████   █████  █████  █████  █████  █████                                              |
 |     █     █ █       █      █      █      █                                                   |
 |     ███████ █       █      ████   █████  █████                                              |
 |     █     █ █       █      █          █      █                                              |
 |     █     █ █████   █████  █████  █████  █████                                              |
 |                                                                                               |
 |       █████  ████    █████  █   █  █████  █████  ████                                      |
 |      █       █   █  █     █ ██  █    █    █      █   █                                     |
 |      █  ███  ████   ███████ █ █ █    █    ████   █   █                                     |
 |      █    █  █  █   █     █ █  ██    █    █      █   █                                     |
 |       █████  █   █  █     █ █   █    █    █████  ████                                      |
 |                                                                                               |
 |                                  *** ACCESS GRANTED ***                                      |
 +===============================================================================================+
"#;

const WIDE_ASCII_WARNING_BOX: &str = r#"
 +============================================================================================+
 |                                                                                            |
 |     █   █   █████   ████   █   █   █████  █   █   █████                                  |
 |     █   █   █   █   █   █  ██  █     █    ██  █   █                                      |
 |     █ █ █   █████   ████   █ █ █     █    █ █ █   █  ██                                  |
 |     ██ ██   █   █   █  █   █  ██     █    █  ██   █   █                                  |
 |     █   █   █   █   █   █  █   █   █████  █   █   █████                                  |
 |                                                                                            |
 |                                    !!! WARNING !!!                                        |
 |                          UNAUTHORIZED ACCESS DETECTED                                     |
 |                        INITIATING SECURITY PROTOCOLS                                      |
 +============================================================================================+
"#;

const WIDE_UNICODE_BANNER: &str = r#"
 ╔══════════════════════════════════════════════════════════════════════════════════════════════╗
 ║                                                                                              ║
 ║  █   █   ████    █████  █   █  █████  ████                                                 ║
 ║  █   █  █    █  █       █  █   █      █   █                                                ║
 ║  █████  ██████  █       ███    ████   ████                                                 ║
 ║  █   █  █    █  █       █  █   █      █  █                                                 ║
 ║  █   █  █    █   █████  █   █  █████  █   █                                                ║
 ║                                                                                              ║
 ║  █████  █████  ████   █   █  █████  █   █   ████   █                                      ║
 ║    █    █      █   █  ██ ██    █    ██  █  █    █  █                                      ║
 ║    █    ████   ████   █ █ █    █    █ █ █  ██████  █                                      ║
 ║    █    █      █  █   █   █    █    █  ██  █    █  █                                      ║
 ║    █    █████  █   █  █   █  █████  █   █  █    █  █████                                  ║
 ║                                                                                              ║
 ║                                   [ VERSION 2.0.7 ]                                        ║
 ║                             *** CLASSIFIED ACCESS ONLY ***                                  ║
 ╚══════════════════════════════════════════════════════════════════════════════════════════════╝
"#;

const WIDE_UNICODE_SUCCESS_BOX: &str = r#"
 ╔═════════════════════════════════════════════════════════════════════════════════════════╗
 ║                                                                                         ║
 ║      █████   █████  █████  █████  █████  █████                                        ║
 ║     █     █ █       █      █      █      █                                             ║
 ║     ███████ █       █      ████   █████  █████                                        ║
 ║     █     █ █       █      █          █      █                                        ║
 ║     █     █ █████   █████  █████  █████  █████                                        ║
 ║                                                                                         ║
 ║       █████  ████    █████  █   █  █████  █████  ████                                ║
 ║      █       █   █  █     █ ██  █    █    █      █   █                               ║
 ║      █  ███  ████   ███████ █ █ █    █    ████   █   █                               ║
 ║      █    █  █  █   █     █ █  ██    █    █      █   █                               ║
 ║       █████  █   █  █     █ █   █    █    █████  ████                                ║
 ║                                                                                         ║
 ║                                *** ACCESS GRANTED ***                                  ║
 ╚═════════════════════════════════════════════════════════════════════════════════════════╝
"#;

const WIDE_UNICODE_WARNING_BOX: &str = r#"
 ╔════════════════════════════════════════════════════════════════════════════════════════╗
 ║                                                                                        ║
 ║     █   █   █████   ████   █   █   █████  █   █   █████                              ║
 ║     █   █   █   █   █   █  ██  █     █    ██  █   █                                  ║
 ║     █ █ █   █████   ████   █ █ █     █    █ █ █   █  ██                              ║
 ║     ██ ██   █   █   █  █   █  ██     █    █  ██   █   █                              ║
 ║     █   █   █   █   █   █  █   █   █████  █   █   █████                              ║
 ║                                                                                        ║
 ║                                  !!! WARNING !!!                                      ║
 ║                        UNAUTHORIZED ACCESS DETECTED                                   ║
 ║                      INITIATING SECURITY PROTOCOLS                                    ║
 ╚════════════════════════════════════════════════════════════════════════════════════════╝
"#;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
