//! Interactive console: one command per line, as typed in the game console.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use ssx::command::COMMANDS;
use ssx::dispatch_line;
use tracing::debug;

use super::Session;

/// Read commands from stdin until EOF or `exit`
pub fn run(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(session, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Console loop over arbitrary input and output. Returns the number of lines
/// dispatched as commands.
pub fn run_with<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<usize> {
    let mut dispatched = 0;

    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            "" => {}
            "exit" | "quit" => break,
            "help" => {
                for (name, help) in COMMANDS {
                    writeln!(out, "{}: {}\n", name, help)?;
                }
            }
            _ => {
                debug!("Console command: {}", trimmed);
                dispatch_line(&mut session.extender, &mut session.host, trimmed);
                dispatched += 1;
            }
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(dispatched)
}
