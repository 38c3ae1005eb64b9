//! Tables command: dump the live offset tables after session load.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use ssx::BASE_FRAME_COUNT;

use super::Session;

pub fn run(session: &Session, all: bool) -> io::Result<()> {
    run_with(session, all, &mut io::stdout().lock())
}

/// Write the table dump to `out`. Base frames are only listed with `all`.
pub fn run_with<W: Write>(session: &Session, all: bool, out: &mut W) -> io::Result<()> {
    let tables = session.host.tables();
    let start = if all { 0 } else { BASE_FRAME_COUNT };

    writeln!(
        out,
        "{} frames ({} base, {} added)",
        tables.len(),
        BASE_FRAME_COUNT,
        tables.added_frames()
    )?;
    writeln!(out, "{:>6} {:>6} {:>6}", "frame", "x", "y")?;
    for frame in start..tables.len() {
        let Some(pair) = tables.get(frame) else {
            break;
        };
        let line = format!("{:>6} {:>6} {:>6}", frame, pair.x, pair.y);
        if frame < BASE_FRAME_COUNT {
            writeln!(out, "{}", line.dimmed())?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}
