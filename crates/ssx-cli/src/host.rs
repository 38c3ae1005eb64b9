//! Stand-in for the game when editing a content pack from the command line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ssx::{Gender, Host, OffsetTables};
use tracing::debug;

/// Holds the feature offset tables the game would own in-process
pub struct CliHost {
    gender: Gender,
    tables: OffsetTables,
}

impl CliHost {
    pub fn new(gender: Gender, tables: OffsetTables) -> Self {
        Self { gender, tables }
    }

    pub fn tables(&self) -> &OffsetTables {
        &self.tables
    }
}

impl Host for CliHost {
    fn gender(&self) -> Gender {
        self.gender
    }

    fn offset_tables(&self) -> OffsetTables {
        self.tables.clone()
    }

    fn install_offset_tables(&mut self, tables: OffsetTables) {
        debug!("Installing offset tables ({} frames)", tables.len());
        self.tables = tables;
    }
}

/// Load base tables from a JSON file, or zero offsets when no file is given
pub fn load_base_tables(path: Option<&Path>) -> Result<OffsetTables> {
    let Some(path) = path else {
        debug!("No base tables given, using zero offsets");
        return Ok(OffsetTables::zeroed());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read base tables from {}", path.display()))?;
    let tables: OffsetTables = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse base tables in {}", path.display()))?;
    tables.validate()?;

    Ok(tables)
}
