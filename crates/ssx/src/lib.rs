//! # ssx
//!
//! Core library for the spritesheet extender.
//!
//! The host game aligns hair and clothing onto the farmer sprite sheet with
//! two parallel per-frame offset tables. This crate appends offsets for
//! frames added by content packs and lets them be edited at runtime.
//!
//! This crate provides:
//! - Offset config data (`OffsetStore`) and its `SSXConfig.json` persistence
//! - Table extension and frame index translation
//! - Provisioning of zero offsets for newly declared sprites
//! - The `setFrameOffset` / `getFrameOffset` console commands

pub mod command;
pub mod error;
pub mod extender;
pub mod offset;
pub mod storage;

pub use command::{Command, CommandOutcome, dispatch, dispatch_line, execute};
pub use error::{Error, Result};
pub use extender::{Host, OffsetEdit, SETTINGS_FIELDS, SettingsField, SpriteExtender};
pub use offset::{
    BASE_FRAME_COUNT, Gender, MAX_SPRITES_ADDED, OffsetPair, OffsetStore, OffsetTables,
    ProvisionReport, extend, lookup_local_index, provision, to_local_index,
};
pub use storage::{CONFIG_KEY, ConfigStore, DocumentStore, JsonDirStore, MemoryStore};
