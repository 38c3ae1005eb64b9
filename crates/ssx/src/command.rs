//! Console commands for inspecting and editing added frame offsets.
//!
//! Commands arrive as a name plus whitespace-separated arguments. Parsing and
//! execution return errors; [`dispatch`] is the boundary that turns them into
//! log lines so a bad command never escapes to the host.

use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::extender::{Host, OffsetEdit, SpriteExtender};
use crate::offset::OffsetPair;

pub const SET_FRAME_OFFSET: &str = "setFrameOffset";
pub const GET_FRAME_OFFSET: &str = "getFrameOffset";

pub const SET_FRAME_OFFSET_HELP: &str = "Sets the x and y offset of the farmer sprite at indicated index.\n\n\
Usage: setFrameOffset <frame-index> <x-offset> <y-offset>\n\
<frame-index> The index of the targeted sprite on the farmer's sprite sheet\n\
<x-offset> The number of pixels to horizontally offset the farmer's hair and clothes (positive right, negative left)\n\
<y-offset> The number of pixels to vertically offset the farmer's hair and clothes (positive down, negative up)";

pub const GET_FRAME_OFFSET_HELP: &str = "Gets the x and y offset of the farmer sprite at indicated index.\n\n\
Usage: getFrameOffset <frame-index>\n\
<frame-index> The index of the targeted sprite on the farmer's sprite sheet";

/// (name, help) of every console command
pub const COMMANDS: [(&str, &str); 2] = [
    (SET_FRAME_OFFSET, SET_FRAME_OFFSET_HELP),
    (GET_FRAME_OFFSET, GET_FRAME_OFFSET_HELP),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetFrameOffset { frame: i32, x: i32, y: i32 },
    GetFrameOffset { frame: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Set(OffsetEdit),
    Found { frame: i32, pair: OffsetPair },
    NotFound { frame: i32 },
}

impl Command {
    /// Parse a command name and its arguments. Names match case-insensitively.
    pub fn parse<S: AsRef<str>>(name: &str, args: &[S]) -> Result<Self> {
        if name.eq_ignore_ascii_case(SET_FRAME_OFFSET) {
            let [frame, x, y] = parse_ints::<3, _>(args)?;
            Ok(Self::SetFrameOffset { frame, x, y })
        } else if name.eq_ignore_ascii_case(GET_FRAME_OFFSET) {
            let [frame] = parse_ints::<1, _>(args)?;
            Ok(Self::GetFrameOffset { frame })
        } else {
            Err(Error::UnknownCommand(name.to_string()))
        }
    }

    /// Parse a full console line; blank lines yield `None`
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        Self::parse(name, &args).map(Some)
    }
}

fn parse_ints<const N: usize, S: AsRef<str>>(args: &[S]) -> Result<[i32; N]> {
    if args.len() != N {
        return Err(Error::wrong_arity(N, args.len()));
    }

    let mut values = [0; N];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = arg
            .as_ref()
            .trim()
            .parse()
            .map_err(|_| Error::not_integer())?;
    }
    Ok(values)
}

/// Run a parsed command against the extender
pub fn execute<H: Host + ?Sized>(
    extender: &mut SpriteExtender,
    host: &mut H,
    command: Command,
) -> Result<CommandOutcome> {
    match command {
        Command::SetFrameOffset { frame, x, y } => {
            extender.set_offset(host, frame, x, y).map(CommandOutcome::Set)
        }
        Command::GetFrameOffset { frame } => {
            Ok(match extender.get_offset(host.gender(), frame) {
                Some(pair) => CommandOutcome::Found { frame, pair },
                None => CommandOutcome::NotFound { frame },
            })
        }
    }
}

/// Parse and run a console command, logging the result.
///
/// Never fails: errors are logged at ERROR and reported as `None`.
pub fn dispatch<H: Host + ?Sized, S: AsRef<str>>(
    extender: &mut SpriteExtender,
    host: &mut H,
    name: &str,
    args: &[S],
) -> Option<CommandOutcome> {
    let outcome = Command::parse(name, args).and_then(|command| execute(extender, host, command));
    report(outcome)
}

/// Like [`dispatch`], for a whole console line
pub fn dispatch_line<H: Host + ?Sized>(
    extender: &mut SpriteExtender,
    host: &mut H,
    line: &str,
) -> Option<CommandOutcome> {
    match Command::parse_line(line) {
        Ok(Some(command)) => report(execute(extender, host, command)),
        Ok(None) => None,
        Err(e) => report(Err(e)),
    }
}

fn report(outcome: Result<CommandOutcome>) -> Option<CommandOutcome> {
    match outcome {
        Ok(outcome) => {
            match &outcome {
                CommandOutcome::Set(edit) => info!(
                    "Sprite at index {} has been set to offset {}.",
                    edit.frame, edit.pair
                ),
                CommandOutcome::Found { frame, pair } => debug!(
                    "Current offset for frame {}:\nx = {}\ny = {}",
                    frame, pair.x, pair.y
                ),
                CommandOutcome::NotFound { frame } => warn!("No frame at index {}.", frame),
            }
            Some(outcome)
        }
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}
