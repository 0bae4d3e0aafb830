//! # Command Engine
//!
//! Parses command lines and dispatches them against a [`SessionState`].
//!
//! The engine owns the [`Console`] it writes to and the random source used
//! by `decrypt` and by `trace` for unknown names. Seeding the source with
//! [`catalog::REPLAY_SEED`] makes a whole run reproducible byte for byte.
//!
//! User mistakes (missing argument, unknown target, unknown command) are
//! printed and never abort anything. A [`crate::error::SessionError`] raised
//! half-way through an operation aborts that operation only.

pub mod catalog;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error};

use masterhacker_common::terminal::assets::AssetKind;

use crate::console::{Console, Tone};
use crate::error::{CommandError, EngineError};
use crate::session::SessionState;
use crate::session::status::{StatusKey, StatusValue};
use crate::session::target::SecurityLevel;
use catalog::{
    COUNTERTRACE, DECRYPT, DECRYPTED_MESSAGES, FALLBACK_ISPS, HACK, HACK_CREDITS, HACK_SYSTEMS,
    HELP_TEXT, INFILTRATE, SCAN, SCAN_RESULTS, SUCCESS_PAUSE, TRACE, WARNING_PAUSE,
};

/// Where the random source starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// Reproducible draws.
    Fixed(u64),
    /// Fresh draws from the operating system.
    Entropy,
}

impl Seeding {
    pub fn replay() -> Self {
        Seeding::Fixed(catalog::REPLAY_SEED)
    }

    fn rng(self) -> StdRng {
        match self {
            Seeding::Fixed(seed) => StdRng::seed_from_u64(seed),
            Seeding::Entropy => StdRng::from_os_rng(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Help,
    Scan,
    Decrypt,
    Infiltrate,
    Hack,
    Trace,
    Countertrace,
    Status,
    Clear,
    Exit,
}

impl Command {
    fn lookup(name: &str) -> Option<Command> {
        let command = match name {
            "help" => Command::Help,
            "scan" => Command::Scan,
            "decrypt" => Command::Decrypt,
            "infiltrate" => Command::Infiltrate,
            "hack" => Command::Hack,
            "trace" => Command::Trace,
            "countertrace" | "evade" => Command::Countertrace,
            "status" => Command::Status,
            "clear" => Command::Clear,
            "exit" => Command::Exit,
            _ => return None,
        };
        Some(command)
    }
}

/// Splits a line into a lower-cased command and its arguments.
///
/// Arguments keep their case; target names are upper-cased where they are used.
pub fn parse(line: &str) -> (Option<String>, Vec<String>) {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return (None, Vec::new());
    };
    (Some(command.to_lowercase()), parts.map(str::to_string).collect())
}

pub struct CommandEngine<C> {
    console: C,
    rng: StdRng,
    scan_catalog: &'static [(&'static str, SecurityLevel)],
    exit_requested: bool,
    farewell_sent: bool,
}

impl<C: Console> CommandEngine<C> {
    pub fn new(console: C, seeding: Seeding) -> Self {
        Self {
            console,
            rng: seeding.rng(),
            scan_catalog: &SCAN_RESULTS,
            exit_requested: false,
            farewell_sent: false,
        }
    }

    #[cfg(test)]
    fn with_scan_catalog(mut self, catalog: &'static [(&'static str, SecurityLevel)]) -> Self {
        self.scan_catalog = catalog;
        self
    }

    pub fn reseed(&mut self, seeding: Seeding) {
        debug!(?seeding, "random source reseeded");
        self.rng = seeding.rng();
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Set once `exit` ran; the caller should stop reading input.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn banner(&mut self) {
        self.console.asset(AssetKind::Banner);
    }

    pub fn notice(&mut self, tone: Tone, text: &str) {
        self.console.line(tone, text);
    }

    /// Prints the closing lines. Only the first call has any effect, however
    /// many paths (command, end of input, interrupt) lead here.
    pub fn farewell(&mut self) {
        if self.farewell_sent {
            return;
        }
        self.farewell_sent = true;
        self.console.line(Tone::Plain, "Connection terminated.");
        self.console.line(Tone::Success, "Stay anonymous, hacker.");
    }

    pub fn execute_line(&mut self, line: &str, state: &mut SessionState) -> bool {
        let (command, args) = parse(line);
        self.execute(command.as_deref(), &args, state)
    }

    /// Runs one command. Returns `false` for empty or unrecognized input,
    /// which never touches `state`.
    pub fn execute(&mut self, command: Option<&str>, args: &[String], state: &mut SessionState) -> bool {
        let Some(name) = command else {
            return false;
        };
        let Some(command) = Command::lookup(name) else {
            let err = CommandError::UnrecognizedCommand(name.to_string());
            debug!("{err:?}");
            self.console.line(Tone::Warning, &err.to_string());
            return false;
        };

        match self.dispatch(command, args, state) {
            Ok(()) => {}
            Err(EngineError::Command(err)) => {
                debug!(?command, "{err:?}");
                self.console.line(Tone::Warning, &err.to_string());
            }
            Err(EngineError::Session(err)) => {
                error!(?command, "session mutation rejected: {err}");
                self.console.line(Tone::Alert, &format!("Operation aborted: {err}"));
            }
        }
        true
    }

    /// Echoes and executes each line the way a typed session would look,
    /// stopping after `exit`.
    pub fn run_script<'a, I>(&mut self, lines: I, state: &mut SessionState)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.console.line(Tone::Plain, "");
            self.console.line(Tone::Info, &format!("> {line}"));
            self.execute_line(line, state);
            if self.exit_requested {
                break;
            }
        }
    }

    fn dispatch(&mut self, command: Command, args: &[String], state: &mut SessionState) -> Result<(), EngineError> {
        match command {
            Command::Help => self.console.line(Tone::Plain, HELP_TEXT),
            Command::Scan => self.scan(state)?,
            Command::Decrypt => self.decrypt(),
            Command::Infiltrate => self.infiltrate(args.first(), state)?,
            Command::Hack => self.hack(state)?,
            Command::Trace => self.trace(args.first())?,
            Command::Countertrace => self.countertrace(),
            Command::Status => self.status(state),
            Command::Clear => self.console.clear(),
            Command::Exit => {
                self.farewell();
                self.exit_requested = true;
            }
        }
        Ok(())
    }

    fn scan(&mut self, state: &mut SessionState) -> Result<(), EngineError> {
        SCAN.run(&mut self.console);
        state.replace_discovered(self.scan_catalog.iter().copied())?;

        self.console.line(
            Tone::Success,
            &format!("Found {} targets:", state.discovered().len()),
        );
        for target in state.discovered() {
            self.console.line(
                Tone::Plain,
                &format!("- {} (security: {})", target.name(), target.security_level()),
            );
        }
        Ok(())
    }

    fn decrypt(&mut self) {
        DECRYPT.run(&mut self.console);
        let message = DECRYPTED_MESSAGES[self.rng.random_range(0..DECRYPTED_MESSAGES.len())];
        self.console.line(Tone::Success, &format!("Decrypted message: \"{message}\""));
    }

    fn infiltrate(&mut self, target: Option<&String>, state: &mut SessionState) -> Result<(), EngineError> {
        let target = target.ok_or(CommandError::MissingArgument { usage: "infiltrate <target>" })?;
        let name = target.to_uppercase();

        if state.find_discovered(&name).is_none() {
            return Err(CommandError::TargetNotFound(name).into());
        }

        self.warning_pane();
        self.console.line(Tone::Plain, &format!("Infiltrating {name}..."));
        INFILTRATE.run(&mut self.console);
        state.mark_infiltrated(&name)?;
        self.success_pane();
        self.console.line(Tone::Success, "Root privileges obtained.");
        Ok(())
    }

    fn hack(&mut self, state: &mut SessionState) -> Result<(), EngineError> {
        self.warning_pane();
        self.console.line(Tone::Plain, "Initiating hack sequence...");
        HACK.run(&mut self.console);

        state.update_status(StatusKey::CompromisedSystems, StatusValue::from(HACK_SYSTEMS))?;
        state.update_status(StatusKey::Credits, StatusValue::from(HACK_CREDITS))?;

        self.success_pane();
        self.console.line(Tone::Success, "HACK SUCCESSFUL");
        self.console.line(Tone::Plain, &format!("Systems compromised: {HACK_SYSTEMS}"));
        self.console.line(Tone::Plain, &format!("Credits earned: {HACK_CREDITS}"));
        Ok(())
    }

    /// Unlike `infiltrate`, tracing works on names no scan has reported.
    fn trace(&mut self, target: Option<&String>) -> Result<(), EngineError> {
        let target = target.ok_or(CommandError::MissingArgument { usage: "trace <target>" })?;
        let name = target.to_uppercase();

        self.console.line(Tone::Plain, &format!("Tracing {name}..."));
        TRACE.run(&mut self.console);

        let (coordinates, isp) = match catalog::known_location(&name) {
            Some((coordinates, isp)) => (coordinates.to_string(), isp),
            None => {
                let lat = round4(self.rng.random_range(-90.0..=90.0));
                let lon = round4(self.rng.random_range(-180.0..=180.0));
                let isp = FALLBACK_ISPS[self.rng.random_range(0..FALLBACK_ISPS.len())];
                (format!("{lat:.4} deg N, {lon:.4} deg W"), isp)
            }
        };

        self.console.line(Tone::Success, &format!("Location found: {coordinates}"));
        self.console.line(Tone::Plain, &format!("ISP: {isp}"));
        Ok(())
    }

    fn countertrace(&mut self) {
        self.console.line(Tone::Plain, "Deploying countermeasures...");
        COUNTERTRACE.run(&mut self.console);
        self.success_pane();
        self.console.line(Tone::Success, "Trace blocked. Identity scrambled.");
    }

    fn status(&mut self, state: &SessionState) {
        let status = state.status();
        let lines = [
            format!("System Status: {}", if status.online { "ONLINE" } else { "OFFLINE" }),
            format!("Security Level: {}", status.security_level),
            format!("Active Connections: {}", status.connections),
            format!("Firewall: {}", if status.firewall { "ENABLED" } else { "DISABLED" }),
            format!("Stealth Mode: {}", if status.stealth { "ON" } else { "OFF" }),
            format!("Compromised Systems: {}", status.compromised_systems),
            format!("Credits: {}", status.credits),
        ];
        for line in &lines {
            self.console.line(Tone::Plain, line);
        }
    }

    fn warning_pane(&mut self) {
        self.console.asset(AssetKind::WarningBox);
        self.console.pause(WARNING_PAUSE);
    }

    fn success_pane(&mut self) {
        self.console.asset(AssetKind::SuccessBox);
        self.console.pause(SUCCESS_PAUSE);
    }
}

/// Rounds to 4 decimals. Adding zero turns `-0.0` into `0.0`.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0 + 0.0
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
