//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod console;
pub mod frame;
pub mod settings;
pub mod tables;

use std::path::Path;

use anyhow::Result;
use ssx::{DocumentStore, Gender, JsonDirStore, SpriteExtender};
use tracing::info;

use crate::host::{CliHost, load_base_tables};

/// Extender plus host after the session-loaded event
pub struct Session {
    pub extender: SpriteExtender,
    pub host: CliHost,
}

/// Open the extender on a content pack directory, or detached without one
pub fn open_extender(pack: Option<&Path>) -> SpriteExtender {
    let backend = pack.map(|p| Box::new(JsonDirStore::new(p)) as Box<dyn DocumentStore>);
    SpriteExtender::new(backend)
}

/// Open the extender and run the session-loaded event against the base tables
pub fn open_session(
    pack: Option<&Path>,
    gender: Gender,
    base_tables: Option<&Path>,
) -> Result<Session> {
    let mut extender = open_extender(pack);
    let mut host = CliHost::new(gender, load_base_tables(base_tables)?);

    let added = extender.on_session_loaded(&mut host)?;
    info!("Session loaded for {} farmer ({} added frames)", gender, added);

    Ok(Session { extender, host })
}
