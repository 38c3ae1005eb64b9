//! Translation between global frame indices and offset-sequence positions.
//!
//! The host's base sprite sheet occupies frames `0..BASE_FRAME_COUNT`. Added
//! frames start right after it, so global frame `BASE_FRAME_COUNT + n` maps to
//! position `n` of the active gender's offset sequence.

use crate::error::{Error, Result};

/// Number of frames in the host's built-in offset tables
pub const BASE_FRAME_COUNT: usize = 126;

/// Whether a global frame index belongs to the immutable base region
pub fn is_base_frame(frame: i32) -> bool {
    !matches!(usize::try_from(frame), Ok(f) if f >= BASE_FRAME_COUNT)
}

/// Resolve a frame for writing.
///
/// Fails with `InvalidFrame` for base frames and `FrameNotProvisioned` when the
/// frame lies past the provisioned sequence.
pub fn to_local_index(frame: i32, provisioned: usize) -> Result<usize> {
    if is_base_frame(frame) {
        return Err(Error::InvalidFrame(frame));
    }

    let local = frame as usize - BASE_FRAME_COUNT;
    if local >= provisioned {
        return Err(Error::FrameNotProvisioned { frame, provisioned });
    }

    Ok(local)
}

/// Resolve a frame for reading. Same bounds as [`to_local_index`], but a miss
/// is simply "not found".
pub fn lookup_local_index(frame: i32, provisioned: usize) -> Option<usize> {
    to_local_index(frame, provisioned).ok()
}
