pub mod demo;
pub mod shell;
pub mod single;

use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

use clap::Parser;

use masterhacker_common::config::{Config, Pacing};
use masterhacker_common::display::{UnicodeMode, WidthMode};

#[derive(Parser, Debug)]
#[command(name = "masterhacker", version)]
#[command(about = "Master Hacker Terminal: the hacking scene from every movie, none of the hacking.")]
pub struct CommandLine {
    /// Run a predefined script (demo)
    #[arg(long, value_name = "NAME")]
    pub script: Option<Script>,

    /// Enter interactive mode
    #[arg(long)]
    pub interactive: bool,

    /// Unicode art: auto (detect), on, off, strict (probe the terminal once)
    #[arg(long, value_name = "MODE", default_value = "auto")]
    pub unicode: UnicodeChoice,

    /// Layout width: auto, compact (<=62), standard (63-99), wide (>=100)
    #[arg(long, value_name = "MODE", default_value = "auto")]
    pub width: WidthMode,

    /// Skip every animation delay and pane pause
    #[arg(long)]
    pub no_delay: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    pub command: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Script {
    Demo,
}

impl FromStr for Script {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Script::Demo),
            other => Err(format!("unknown script '{other}' (expected: demo)")),
        }
    }
}

/// `--unicode` accepts everything [`UnicodeMode`] does plus `strict`, which
/// is settled once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnicodeChoice {
    Mode(UnicodeMode),
    Strict,
}

impl FromStr for UnicodeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("strict") {
            return Ok(UnicodeChoice::Strict);
        }
        s.parse().map(UnicodeChoice::Mode)
    }
}

/// What a run does, in priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Demo,
    Interactive,
    Single(String),
    Usage,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> Mode {
        if self.script == Some(Script::Demo) {
            Mode::Demo
        } else if self.interactive {
            Mode::Interactive
        } else if !self.command.is_empty() {
            Mode::Single(self.command.join(" "))
        } else {
            Mode::Usage
        }
    }

    /// `strict_probe` is only called for `--unicode strict`.
    pub fn config<F>(&self, strict_probe: F) -> Config
    where
        F: FnOnce() -> bool,
    {
        let unicode = match self.unicode {
            UnicodeChoice::Mode(mode) => mode,
            UnicodeChoice::Strict if strict_probe() => UnicodeMode::On,
            UnicodeChoice::Strict => UnicodeMode::Off,
        };
        Config {
            unicode,
            width: self.width,
            pacing: if self.no_delay { Pacing::Instant } else { Pacing::Realtime },
        }
    }
}

/// Runs blocking work (animations sleep) on the blocking pool while the
/// runtime keeps listening for Ctrl-C.
pub async fn interruptible<F, T>(job: F) -> anyhow::Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let job = tokio::task::spawn_blocking(job);
    tokio::select! {
        biased;
        _ = tokio::signal::ctrl_c() => {
            println!("\nProgram interrupted.");
            std::io::stdout().flush()?;
            std::process::exit(0)
        }
        joined = job => joined.map_err(|e| {
            if e.is_panic() {
                anyhow::anyhow!(panic_message(e.into_panic().as_ref()))
            } else {
                anyhow::Error::from(e)
            }
        }),
    }
}

/// Runs `job`, turning a panic into its message so the caller can still
/// end the session cleanly.
pub fn guarded<F, T>(job: F) -> Result<T, String>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(job)).map_err(|payload| panic_message(payload.as_ref()))
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown failure")
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

    fn parse(args: &[&str]) -> CommandLine {
        CommandLine::try_parse_from(std::iter::once("masterhacker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn script_wins_over_everything() {
        let cli = parse(&["--script", "demo", "--interactive", "scan"]);
        assert_eq!(cli.mode(), Mode::Demo);
    }

    #[test]
    fn interactive_wins_over_command_words() {
        assert_eq!(parse(&["--interactive", "scan"]).mode(), Mode::Interactive);
    }

    #[test]
    fn command_words_are_joined() {
        let cli = parse(&["infiltrate", "MAINFRAME-7"]);
        assert_eq!(cli.mode(), Mode::Single("infiltrate MAINFRAME-7".to_string()));
    }

    #[test]
    fn empty_command_word_is_still_single_mode() {
        assert_eq!(parse(&[""]).mode(), Mode::Single(String::new()));
    }

    #[test]
    fn no_arguments_prints_usage() {
        assert_eq!(parse(&[]).mode(), Mode::Usage);
    }

    #[test]
    fn unknown_script_is_rejected() {
        assert!(CommandLine::try_parse_from(["masterhacker", "--script", "heist"]).is_err());
    }

    #[test]
    fn display_flags_build_config() {
        let cli = parse(&["--unicode", "off", "--width", "WIDE", "--no-delay"]);
        let config = cli.config(|| panic!("probe must not run"));
        assert_eq!(config.unicode, UnicodeMode::Off);
        assert_eq!(config.width, WidthMode::Wide);
        assert_eq!(config.pacing, Pacing::Instant);
    }

    #[test]
    fn defaults_are_auto_and_realtime() {
        let config = parse(&[]).config(|| panic!("probe must not run"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn guarded_passes_results_through() {
        assert_eq!(guarded(|| 7), Ok(7));
    }

    #[test]
    fn guarded_reports_panic_message() {
        let name = "QUANTUM-DB";
        assert_eq!(guarded(|| -> u8 { panic!("lost {name}") }), Err("lost QUANTUM-DB".to_string()));
        assert_eq!(guarded(|| -> u8 { panic!("static text") }), Err("static text".to_string()));
    }

    #[tokio::test]
    async fn interruptible_reports_panics_as_errors() {
        let err = interruptible(|| -> u8 { panic!("satellite offline") }).await.unwrap_err();
        assert_eq!(err.to_string(), "satellite offline");

        assert_eq!(interruptible(|| 42u8).await.unwrap(), 42);
    }

    #[test]
    fn strict_unicode_pins_probe_result() {
        let cli = parse(&["--unicode", "strict"]);
        assert_eq!(cli.config(|| true).unicode, UnicodeMode::On);
        assert_eq!(cli.config(|| false).unicode, UnicodeMode::Off);
    }
}
