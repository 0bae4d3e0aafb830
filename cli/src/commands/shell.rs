use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error};

use masterhacker_core::console::{Console, Tone};
use masterhacker_core::engine::CommandEngine;
use masterhacker_core::session::SessionState;

use crate::commands::guarded;
use crate::terminal::print::TerminalConsole;

const PROMPT: &str = "\n> ";

enum Input {
    Line(String),
    EndOfInput,
    Interrupted,
    Failed(std::io::Error),
}

/// Reads commands until `exit`, end of input, Ctrl-C, a read failure or a
/// command that fails outright. Every way out ends with the farewell,
/// printed exactly once.
pub async fn run(engine: &mut CommandEngine<TerminalConsole>, state: &mut SessionState) -> anyhow::Result<()> {
    engine.banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        engine.console_mut().prompt(PROMPT);

        let input = tokio::select! {
            biased;
            _ = &mut interrupt => Input::Interrupted,
            line = lines.next_line() => match line {
                Ok(Some(line)) => Input::Line(line),
                Ok(None) => Input::EndOfInput,
                Err(e) => Input::Failed(e),
            },
        };

        match input {
            Input::Line(line) => {
                debug!(%line, "command entered");
                let executed = tokio::task::block_in_place(|| guarded(|| engine.execute_line(&line, state)));
                if let Err(e) = executed {
                    error!(%line, "command failed: {e}");
                    engine.notice(Tone::Alert, &format!("\nUnexpected error: {e}"));
                    engine.farewell();
                    return Ok(());
                }
                if engine.exit_requested() {
                    return Ok(());
                }
            }
            Input::EndOfInput => {
                engine.notice(Tone::Plain, "\nEnd of input detected.");
                engine.farewell();
                return Ok(());
            }
            Input::Interrupted => {
                engine.notice(Tone::Warning, "\nInterrupted by user.");
                engine.farewell();
                return Ok(());
            }
            Input::Failed(e) => {
                error!("reading stdin failed: {e}");
                engine.notice(Tone::Alert, &format!("\nUnexpected error: {e}"));
                engine.farewell();
                return Ok(());
            }
        }
    }
}
