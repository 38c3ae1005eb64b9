//! setFrameOffset / getFrameOffset commands.

use ssx::command::{GET_FRAME_OFFSET, SET_FRAME_OFFSET};
use ssx::{CommandOutcome, dispatch};

use super::Session;

/// Run setFrameOffset. Failures are logged, not returned.
pub fn run_set(session: &mut Session, frame: &str, x: &str, y: &str) -> Option<CommandOutcome> {
    dispatch(
        &mut session.extender,
        &mut session.host,
        SET_FRAME_OFFSET,
        &[frame, x, y],
    )
}

/// Run getFrameOffset. Failures are logged, not returned.
pub fn run_get(session: &mut Session, frame: &str) -> Option<CommandOutcome> {
    dispatch(
        &mut session.extender,
        &mut session.host,
        GET_FRAME_OFFSET,
        &[frame],
    )
}
