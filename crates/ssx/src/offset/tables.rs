use serde::{Deserialize, Serialize};

use super::index::BASE_FRAME_COUNT;
use super::store::OffsetPair;
use crate::error::{Error, Result};

/// Per-frame feature offsets as the host stores them: two parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetTables {
    pub x: Vec<i32>,
    pub y: Vec<i32>,
}

impl OffsetTables {
    pub fn new(x: Vec<i32>, y: Vec<i32>) -> Self {
        Self { x, y }
    }

    /// Base-sized tables filled with zero offsets
    pub fn zeroed() -> Self {
        Self {
            x: vec![0; BASE_FRAME_COUNT],
            y: vec![0; BASE_FRAME_COUNT],
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Offset pair stored for a frame, if the tables cover it
    pub fn get(&self, frame: usize) -> Option<OffsetPair> {
        Some(OffsetPair::new(*self.x.get(frame)?, *self.y.get(frame)?))
    }

    /// Check the tables are parallel and cover the base frames
    pub fn validate(&self) -> Result<()> {
        if self.x.len() != self.y.len() {
            return Err(Error::BaseTableMismatch {
                x: self.x.len(),
                y: self.y.len(),
            });
        }
        if self.x.len() < BASE_FRAME_COUNT {
            return Err(Error::BaseTableTooShort(self.x.len()));
        }
        Ok(())
    }

    /// Number of frames past the base region
    pub fn added_frames(&self) -> usize {
        self.len().saturating_sub(BASE_FRAME_COUNT)
    }
}

/// Build replacement tables: the base region of `current` followed by `offsets`.
///
/// Only the first `BASE_FRAME_COUNT` entries of `current` are kept, so
/// re-extending tables that were already extended gives the same result as
/// extending the pristine base.
pub fn extend(current: &OffsetTables, offsets: &[OffsetPair]) -> Result<OffsetTables> {
    current.validate()?;

    let mut x = Vec::with_capacity(BASE_FRAME_COUNT + offsets.len());
    let mut y = Vec::with_capacity(BASE_FRAME_COUNT + offsets.len());
    x.extend_from_slice(&current.x[..BASE_FRAME_COUNT]);
    y.extend_from_slice(&current.y[..BASE_FRAME_COUNT]);

    for pair in offsets {
        x.push(pair.x);
        y.push(pair.y);
    }

    Ok(OffsetTables { x, y })
}
