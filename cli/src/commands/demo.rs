use tracing::info;

use masterhacker_common::config::Config;
use masterhacker_core::engine::catalog::DEMO_SCRIPT;
use masterhacker_core::engine::{CommandEngine, Seeding};
use masterhacker_core::session::SessionState;

use crate::terminal::print::TerminalConsole;

/// Replays the fixed walkthrough with the replay seed, so two runs with the
/// same display flags print the same bytes.
pub fn run(config: Config) {
    info!(commands = DEMO_SCRIPT.len(), "running demo script");

    let mut engine = CommandEngine::new(TerminalConsole::new(&config), Seeding::replay());
    let mut state = SessionState::new();

    engine.banner();
    engine.run_script(DEMO_SCRIPT, &mut state);
}
