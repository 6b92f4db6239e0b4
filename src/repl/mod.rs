//! REPL Module
//!
//! The interactive `Pokedex > ` prompt: reads lines, dispatches commands,
//! and reports command failures without ending the session.

mod commands;
mod input;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::error::ReplError;

pub use commands::{Command, Outcome, Session};
pub use input::clean_input;

/// Prompt printed before each line of input
pub const PROMPT: &str = "Pokedex > ";

/// Runs the prompt loop until `exit` or end of input.
///
/// Only terminal I/O failures are returned; command errors are printed and
/// the loop carries on.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<(), ReplError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            // End of input behaves like `exit`
            writeln!(out)?;
            session.execute(Command::Exit, out).await?;
            return Ok(());
        };

        let words = clean_input(&line);
        let Some(name) = words.first() else {
            continue;
        };

        let Some(command) = Command::parse(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match session.execute(command, out).await {
            Ok(Outcome::Exit) => return Ok(()),
            Ok(Outcome::Continue) => {}
            Err(ReplError::Io(e)) => return Err(ReplError::Io(e)),
            Err(e) => {
                warn!(command = command.name(), error = %e, "Command failed");
                writeln!(out, "{}", e)?;
            }
        }
    }
}
