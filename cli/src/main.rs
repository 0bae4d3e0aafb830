mod commands;
mod terminal;

use commands::single::Outcome;
use commands::{CommandLine, Mode, demo, interruptible, shell, single};
use masterhacker_common::config::Config;
use masterhacker_common::terminal::probe;
use masterhacker_core::console::Tone;
use masterhacker_core::engine::{CommandEngine, Seeding};
use masterhacker_core::session::SessionState;
use std::io::Write;
use std::process::ExitCode;

use terminal::print::{self, TerminalConsole};
use tracing::{debug, error};

use crate::terminal::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    print::initialize();

    match run(commands).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            println!("Fatal error: {e}");
            let _ = std::io::stdout().flush();
            ExitCode::FAILURE
        }
    }
}

async fn run(commands: CommandLine) -> anyhow::Result<()> {
    let cfg = commands.config(probe::strict_unicode_safe);
    debug!(?cfg, "configuration resolved");

    match commands.mode() {
        Mode::Demo => interruptible(move || demo::run(cfg)).await,
        Mode::Interactive => {
            let mut engine = CommandEngine::new(TerminalConsole::new(&cfg), Seeding::Entropy);
            let mut state = SessionState::new();
            shell::run(&mut engine, &mut state).await
        }
        Mode::Single(line) => match interruptible(move || single::run(cfg, line)).await? {
            Outcome::Done => Ok(()),
            Outcome::Interactive(mut engine, mut state) => shell::run(&mut engine, &mut state).await,
        },
        Mode::Usage => {
            usage(&cfg);
            Ok(())
        }
    }
}

fn usage(cfg: &Config) {
    let mut engine = CommandEngine::new(TerminalConsole::new(cfg), Seeding::replay());
    engine.banner();
    for hint in print::USAGE_HINTS {
        engine.notice(Tone::Plain, hint);
    }
}
