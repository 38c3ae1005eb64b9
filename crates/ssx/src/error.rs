use thiserror::Error;

use crate::offset::OffsetPair;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    MalformedArguments(String),

    #[error("Cannot edit vanilla sprites. Frame index must be greater than 125, got {0}.")]
    InvalidFrame(i32),

    #[error(
        "Frame index {frame} is not currently added to values ({provisioned} provisioned). Check input or increase Number of Sprites to Add in config."
    )]
    FrameNotProvisioned { frame: i32, provisioned: usize },

    #[error("No document store available")]
    StorageUnavailable,

    #[error("Failed to persist config: {0}")]
    PersistFailure(String),

    #[error(
        "Sprite at index {frame} has been set to offset {pair} for this session only. Failed to persist config: {reason}"
    )]
    EditNotPersisted {
        frame: i32,
        pair: OffsetPair,
        reason: String,
    },

    #[error("Cannot add {count} {gender} sprites, at most {max} are supported")]
    TooManySprites {
        gender: &'static str,
        count: u32,
        max: u32,
    },

    #[error("Offset tables differ in length: x has {x} entries, y has {y}")]
    BaseTableMismatch { x: usize, y: usize },

    #[error("Offset tables hold {0} entries, fewer than the base frame count")]
    BaseTableTooShort(usize),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build the arity error reported by console commands
    pub fn wrong_arity(expected: usize, found: usize) -> Self {
        Self::MalformedArguments(format!(
            "Arguments require {} indexes. {} indexes found.",
            expected, found
        ))
    }

    /// Build the error reported when an argument is not an integer
    pub fn not_integer() -> Self {
        Self::MalformedArguments("Arguments must be integers.".to_string())
    }

    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
