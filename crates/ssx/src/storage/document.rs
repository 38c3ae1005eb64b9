use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Whole-document key/value storage backing the offset config.
///
/// Reads return `None` when no document exists for the key. Writes replace
/// the whole document.
pub trait DocumentStore {
    fn read(&self, key: &str) -> Result<Option<Value>>;
    fn write(&mut self, key: &str, document: &Value) -> Result<()>;

    /// Human-readable location, for log messages
    fn describe(&self) -> String;
}

/// Stores each document as a pretty-printed JSON file inside a directory
/// (a content pack folder).
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl DocumentStore for JsonDirStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path).map_err(Error::Io) {
            Ok(c) => c,
            Err(e) if e.is_not_found() => {
                debug!("No document at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write(&mut self, key: &str, document: &Value) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let content = serde_json::to_string_pretty(document)?;
        let path = self.path_for(key);
        fs::write(&path, content)?;
        debug!("Wrote document to {}", path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// In-memory document store.
///
/// Clones share the same documents, so a caller can keep a handle for
/// inspection after handing a clone to the extender.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Rc<RefCell<HashMap<String, Value>>>,
    writes: Rc<Cell<usize>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document without counting it as a write
    pub fn with_document(self, key: &str, document: Value) -> Self {
        self.documents
            .borrow_mut()
            .insert(key.to_string(), document);
        self
    }

    pub fn document(&self, key: &str) -> Option<Value> {
        self.documents.borrow().get(key).cloned()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Make subsequent writes fail, simulating an unwritable store
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.document(key))
    }

    fn write(&mut self, key: &str, document: &Value) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "memory store is read-only",
            )));
        }
        self.documents
            .borrow_mut()
            .insert(key.to_string(), document.clone());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
