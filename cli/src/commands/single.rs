use masterhacker_common::config::Config;
use masterhacker_core::console::Tone;
use masterhacker_core::engine::{self, CommandEngine, Seeding};
use masterhacker_core::session::SessionState;

use crate::terminal::print::TerminalConsole;

pub enum Outcome {
    Done,
    /// The command was empty or unknown; carry on in a shell.
    Interactive(Box<CommandEngine<TerminalConsole>>, SessionState),
}

pub fn run(config: Config, line: String) -> Outcome {
    let mut engine = CommandEngine::new(TerminalConsole::new(&config), Seeding::replay());
    let mut state = SessionState::new();
    let (command, args) = engine::parse(&line);

    engine.banner();
    match command {
        None => engine.notice(Tone::Plain, "Empty command. Entering interactive mode..."),
        Some(command) => {
            if engine.execute(Some(&command), &args, &mut state) {
                return Outcome::Done;
            }
            engine.notice(Tone::Plain, "Entering interactive mode...");
        }
    }

    engine.reseed(Seeding::Entropy);
    Outcome::Interactive(Box::new(engine), state)
}
