//! # Capability Probe
//!
//! Reads the signals the hosting terminal exposes: its column count and
//! whether Unicode box art is likely to render at the expected width.
//!
//! The default checks only look at the environment and never block. The
//! [`strict_unicode_safe`] probe talks to the terminal itself and is opt-in.

use std::env;
use std::io::{self, Write};

use crossterm::cursor::{self, RestorePosition, SavePosition};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use thiserror::Error;
use tracing::debug;

/// Used when neither the OS nor the environment reports a width.
pub const DEFAULT_WIDTH: u16 = 80;

const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
const TERM_VAR: &str = "TERM";
const WIDTH_FALLBACK_VARS: &[&str] = &["COLUMNS", "TERM_COLS"];
const UNICODE_TERMS: &[&str] = &["xterm-256color", "screen-256color", "tmux-256color"];

/// The box character the strict probe measures.
const PROBE_GLYPH: &str = "╔";

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("terminal probe failed: {0}")]
    TerminalProbeFailure(#[from] io::Error),
}

/// Source of terminal facts consulted by the tier selector.
pub trait CapabilityProbe {
    /// Terminal width in columns. Never zero.
    fn detect_width(&self) -> u16;

    /// Non-blocking Unicode safety check.
    fn detect_unicode_safe(&self) -> bool;

    /// Whether stdout is attached to a real terminal.
    fn is_interactive(&self) -> bool;
}

impl<P: CapabilityProbe + ?Sized> CapabilityProbe for &P {
    fn detect_width(&self) -> u16 {
        (**self).detect_width()
    }

    fn detect_unicode_safe(&self) -> bool {
        (**self).detect_unicode_safe()
    }

    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }
}

/// Probe backed by the real process environment and stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProbe;

impl CapabilityProbe for SystemProbe {
    fn detect_width(&self) -> u16 {
        let os_columns = match terminal::size() {
            Ok((columns, _)) => Some(columns),
            Err(e) => {
                debug!("terminal size query failed: {e}");
                None
            }
        };
        width_from(os_columns, env_lookup)
    }

    fn detect_unicode_safe(&self) -> bool {
        unicode_hints(env_lookup)
    }

    fn is_interactive(&self) -> bool {
        console::Term::stdout().is_term()
    }
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Resolves the width through the fallback chain:
/// OS query, `COLUMNS`, `TERM_COLS`, then [`DEFAULT_WIDTH`].
pub fn width_from<F>(os_columns: Option<u16>, lookup: F) -> u16
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(columns) = os_columns.filter(|&c| c > 0) {
        return columns;
    }

    WIDTH_FALLBACK_VARS
        .iter()
        .find_map(|&var| lookup(var).as_deref().and_then(parse_columns))
        .unwrap_or(DEFAULT_WIDTH)
}

/// Accepts plain positive decimal integers only ("+80", " 80" and "0" are
/// rejected). Counts beyond `u16::MAX` saturate.
fn parse_columns(raw: &str) -> Option<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.bytes().all(|b| b == b'0') {
        return None;
    }
    Some(raw.parse::<u16>().unwrap_or(u16::MAX))
}

/// Both signals must agree: a UTF-8 locale and a 256-colour terminal type.
pub fn unicode_hints<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    utf8_locale(&lookup) && unicode_terminal(&lookup)
}

fn utf8_locale<F>(lookup: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS.iter().any(|&var| {
        lookup(var).is_some_and(|value| {
            let lower = value.to_ascii_lowercase();
            lower.contains("utf-8") || lower.contains("utf8")
        })
    })
}

fn unicode_terminal<F>(lookup: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let term = lookup(TERM_VAR).unwrap_or_default().to_ascii_lowercase();
    UNICODE_TERMS.iter().any(|known| term.starts_with(known))
}

/// Interactive Unicode probe.
///
/// Writes a box character and checks through a cursor-position request that
/// it advanced the cursor by exactly one column. Any failure counts as
/// unsafe. Can stall for a couple of seconds on terminals that never answer
/// the request, so it is never part of `auto` resolution.
pub fn strict_unicode_safe() -> bool {
    if !console::Term::stdout().is_term() {
        return false;
    }

    match measure_probe_glyph() {
        Ok(safe) => {
            debug!(safe, "strict unicode probe finished");
            safe
        }
        Err(e) => {
            debug!("{e}; falling back to ascii");
            false
        }
    }
}

fn measure_probe_glyph() -> Result<bool, ProbeError> {
    let _guard = RawModeGuard::acquire()?;
    let mut stdout = io::stdout();

    let (start_column, _) = cursor::position()?;
    stdout.write_all(PROBE_GLYPH.as_bytes())?;
    stdout.flush()?;
    let (end_column, _) = cursor::position()?;

    Ok(end_column == start_column.saturating_add(1))
}

/// Holds the terminal in raw mode with the cursor position saved.
///
/// Dropping it restores the cursor, clears whatever the probe drew and
/// leaves raw mode, on every exit path.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Result<Self, ProbeError> {
        terminal::enable_raw_mode()?;
        let guard = RawModeGuard;
        execute!(io::stdout(), SavePosition)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), RestorePosition, Clear(ClearType::UntilNewLine));
        let _ = terminal::disable_raw_mode();
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
