use tracing::{debug, error, warn};

use super::DocumentStore;
use crate::error::{Error, Result};
use crate::offset::OffsetStore;

/// Document key of the offset config inside the content pack
pub const CONFIG_KEY: &str = "SSXConfig.json";

/// Loads and persists the [`OffsetStore`] document.
///
/// Without a backend every persist is a no-op and the config lives only in
/// memory for the session.
pub struct ConfigStore {
    backend: Option<Box<dyn DocumentStore>>,
}

impl ConfigStore {
    pub fn new(backend: Option<Box<dyn DocumentStore>>) -> Self {
        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn describe(&self) -> Option<String> {
        self.backend.as_ref().map(|b| b.describe())
    }

    /// Read the persisted config, `None` if no document exists yet
    pub fn load(&self) -> Result<Option<OffsetStore>> {
        let backend = self.backend.as_ref().ok_or(Error::StorageUnavailable)?;
        match backend.read(CONFIG_KEY)? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the persisted config with `store`
    pub fn persist(&mut self, store: &OffsetStore) -> Result<()> {
        let Some(backend) = self.backend.as_mut() else {
            debug!("No document store, skipping persist");
            return Ok(());
        };

        let document = serde_json::to_value(store)?;
        backend
            .write(CONFIG_KEY, &document)
            .map_err(|e| Error::PersistFailure(e.to_string()))
    }

    /// Load the config for a new session, creating it when missing.
    ///
    /// A document that cannot be read or parsed is left untouched on disk and
    /// the session continues with defaults.
    pub fn load_or_init(&mut self) -> OffsetStore {
        let Some(location) = self.describe() else {
            debug!("No available content packs found.");
            return OffsetStore::default();
        };

        match self.load() {
            Ok(Some(store)) => {
                debug!("Loaded config file from {}.", location);
                store
            }
            Ok(None) => {
                let store = OffsetStore::default();
                match self.persist(&store) {
                    Ok(()) => debug!(
                        "No config file found for {}. Creating {}.",
                        location, CONFIG_KEY
                    ),
                    Err(e) => error!("{}", e),
                }
                store
            }
            Err(e) => {
                warn!(
                    "Failed to load {} from {}: {}, using defaults",
                    CONFIG_KEY, location, e
                );
                OffsetStore::default()
            }
        }
    }
}
