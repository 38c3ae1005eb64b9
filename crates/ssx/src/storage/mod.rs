//! Offset config persistence.
//!
//! - **Document store**: whole-document key/value backends (content pack
//!   directory, in-memory)
//! - **Config store**: loads and persists the `SSXConfig.json` document,
//!   degrading to in-memory operation when no backend was resolved

mod config;
mod document;

pub use config::*;
pub use document::*;
