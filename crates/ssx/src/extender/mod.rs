//! Session-level orchestration of the offset tables.
//!
//! `SpriteExtender` owns the offset config for a game session and ties
//! together:
//! - Loading the config from the content pack (or running detached)
//! - Provisioning zero offsets for newly declared sprites
//! - Extending the host's feature offset tables on session load
//! - Editing single offsets and keeping the live tables in sync
//!
//! ## Example
//!
//! ```ignore
//! use ssx::{JsonDirStore, SpriteExtender};
//!
//! let store = JsonDirStore::new("Mods/[SSX] My Pack");
//! let mut extender = SpriteExtender::new(Some(Box::new(store)));
//!
//! extender.on_session_loaded(&mut host)?;
//! extender.set_offset(&mut host, 126, 5, -2)?;
//! ```

mod settings;

pub use settings::*;

use tracing::{error, info};

use crate::error::{Error, Result};
use crate::offset::{
    Gender, OffsetPair, OffsetStore, OffsetTables, extend, lookup_local_index, provision,
    to_local_index,
};
use crate::storage::{ConfigStore, DocumentStore};

/// The game side of the extender.
///
/// The host owns the live feature offset tables. The extender only reads
/// them and hands back whole replacement tables.
pub trait Host {
    /// Gender of the current player
    fn gender(&self) -> Gender;

    /// Current X/Y feature offset tables
    fn offset_tables(&self) -> OffsetTables;

    /// Replace the live tables
    fn install_offset_tables(&mut self, tables: OffsetTables);
}

/// A successfully applied offset edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetEdit {
    pub frame: i32,
    pub local_index: usize,
    pub gender: Gender,
    pub pair: OffsetPair,
}

pub struct SpriteExtender {
    config: ConfigStore,
    store: OffsetStore,
}

impl SpriteExtender {
    /// Load the offset config from `backend`, or run on defaults without one
    pub fn new(backend: Option<Box<dyn DocumentStore>>) -> Self {
        let mut config = ConfigStore::new(backend);
        let store = config.load_or_init();
        Self { config, store }
    }

    pub fn store(&self) -> &OffsetStore {
        &self.store
    }

    pub fn has_storage(&self) -> bool {
        self.config.is_available()
    }

    /// Handle the host's session-loaded event.
    ///
    /// Provisions empty sequences, then installs extended tables for the
    /// current player when any sprites are declared. Returns the number of
    /// frames appended to the host tables.
    pub fn on_session_loaded<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<usize> {
        let report = provision(&mut self.store)?;
        if report.changed() {
            for (gender, count) in &report.provisioned {
                info!(
                    "No {} offset pairs found. Added {} offset pairs to config file. Set offset in-game using setFrameOffset command.",
                    gender, count
                );
            }
            if let Err(e) = self.persist() {
                error!("{}", e);
            }
        }

        if !self.store.has_added_sprites() {
            return Ok(0);
        }

        let added = self.refresh_tables(host)?;
        info!("{} sprites added to farmer sprite sheet.", added);
        Ok(added)
    }

    /// Rebuild the host tables from the active gender's offsets
    pub fn refresh_tables<H: Host + ?Sized>(&self, host: &mut H) -> Result<usize> {
        let offsets = self.store.offsets(host.gender());
        let tables = extend(&host.offset_tables(), offsets)?;
        host.install_offset_tables(tables);
        Ok(offsets.len())
    }

    /// Overwrite the offset of an added frame for the current player.
    ///
    /// Nothing changes when the frame is a base frame or past the provisioned
    /// offsets. Once validated, the edit is applied to the config and the live
    /// tables before persisting; a failed persist is returned as
    /// `EditNotPersisted`, and the edit stays in effect for the session.
    pub fn set_offset<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        frame: i32,
        x: i32,
        y: i32,
    ) -> Result<OffsetEdit> {
        let gender = host.gender();
        let local_index = to_local_index(frame, self.store.offsets(gender).len())?;
        let pair = OffsetPair::new(x, y);

        let mut offsets = self.store.offsets(gender).to_vec();
        offsets[local_index] = pair;
        let tables = extend(&host.offset_tables(), &offsets)?;

        *self.store.offsets_mut(gender) = offsets;
        host.install_offset_tables(tables);
        if let Err(e) = self.persist() {
            let reason = match e {
                Error::PersistFailure(reason) => reason,
                other => other.to_string(),
            };
            return Err(Error::EditNotPersisted {
                frame,
                pair,
                reason,
            });
        }

        Ok(OffsetEdit {
            frame,
            local_index,
            gender,
            pair,
        })
    }

    /// Offset stored for an added frame, `None` if the frame has no entry
    pub fn get_offset(&self, gender: Gender, frame: i32) -> Option<OffsetPair> {
        let offsets = self.store.offsets(gender);
        lookup_local_index(frame, offsets.len()).map(|i| offsets[i])
    }

    /// Write the whole config to the backing store (no-op when detached)
    pub fn persist(&mut self) -> Result<()> {
        self.config.persist(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::{BASE_FRAME_COUNT, MAX_SPRITES_ADDED};
    use crate::storage::{CONFIG_KEY, MemoryStore};
    use serde_json::json;

    struct TestHost {
        gender: Gender,
        tables: OffsetTables,
        installs: usize,
    }

    impl TestHost {
        fn new(gender: Gender) -> Self {
            Self {
                gender,
                tables: OffsetTables::zeroed(),
                installs: 0,
            }
        }
    }

    impl Host for TestHost {
        fn gender(&self) -> Gender {
            self.gender
        }

        fn offset_tables(&self) -> OffsetTables {
            self.tables.clone()
        }

        fn install_offset_tables(&mut self, tables: OffsetTables) {
            self.tables = tables;
            self.installs += 1;
        }
    }

    fn extender_with(document: serde_json::Value) -> (SpriteExtender, MemoryStore) {
        let handle = MemoryStore::new().with_document(CONFIG_KEY, document);
        let extender = SpriteExtender::new(Some(Box::new(handle.clone())));
        (extender, handle)
    }

    fn stored_male(handle: &MemoryStore) -> serde_json::Value {
        handle.document(CONFIG_KEY).unwrap()["OffsetsMale"].clone()
    }

    #[test]
    fn test_session_load_provisions_and_extends() {
        let (mut extender, handle) = extender_with(json!({
            "NumSpritesAddedMale": 3,
            "NumSpritesAddedFemale": 0
        }));
        let mut host = TestHost::new(Gender::Male);

        let added = extender.on_session_loaded(&mut host).unwrap();

        assert_eq!(added, 3);
        assert_eq!(stored_male(&handle), json!([[0, 0], [0, 0], [0, 0]]));
        assert_eq!(host.tables.len(), BASE_FRAME_COUNT + 3);
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn test_session_load_without_sprites_leaves_tables() {
        let (mut extender, handle) = extender_with(json!({}));
        let mut host = TestHost::new(Gender::Female);

        assert_eq!(extender.on_session_loaded(&mut host).unwrap(), 0);
        assert_eq!(host.installs, 0);
        assert_eq!(handle.write_count(), 0);
    }

    #[test]
    fn test_session_reload_does_not_stack_frames() {
        let (mut extender, _handle) = extender_with(json!({"NumSpritesAddedMale": 2}));
        let mut host = TestHost::new(Gender::Male);

        extender.on_session_loaded(&mut host).unwrap();
        extender.on_session_loaded(&mut host).unwrap();
        assert_eq!(host.tables.len(), BASE_FRAME_COUNT + 2);
    }

    #[test]
    fn test_set_then_get() {
        let (mut extender, handle) = extender_with(json!({"NumSpritesAddedMale": 3}));
        let mut host = TestHost::new(Gender::Male);
        extender.on_session_loaded(&mut host).unwrap();

        let edit = extender.set_offset(&mut host, 126, 5, -2).unwrap();
        assert_eq!(edit.local_index, 0);
        assert_eq!(edit.gender, Gender::Male);
        assert_eq!(edit.pair, OffsetPair::new(5, -2));

        assert_eq!(
            extender.get_offset(Gender::Male, 126),
            Some(OffsetPair::new(5, -2))
        );
        assert_eq!(stored_male(&handle), json!([[5, -2], [0, 0], [0, 0]]));
        assert_eq!(host.tables.get(126), Some(OffsetPair::new(5, -2)));
    }

    #[test]
    fn test_set_every_provisioned_frame() {
        let (mut extender, _handle) = extender_with(json!({"NumSpritesAddedMale": 4}));
        let mut host = TestHost::new(Gender::Male);
        extender.on_session_loaded(&mut host).unwrap();

        for frame in 126..130 {
            extender.set_offset(&mut host, frame, frame, -frame).unwrap();
            assert_eq!(
                extender.get_offset(Gender::Male, frame),
                Some(OffsetPair::new(frame, -frame))
            );
        }
    }

    #[test]
    fn test_set_base_frame_rejected() {
        let (mut extender, handle) = extender_with(json!({"NumSpritesAddedMale": 3}));
        let mut host = TestHost::new(Gender::Male);
        extender.on_session_loaded(&mut host).unwrap();
        let writes = handle.write_count();
        let installs = host.installs;
        let before = extender.store().clone();

        for frame in [-3, 0, 125] {
            assert!(matches!(
                extender.set_offset(&mut host, frame, 1, 1),
                Err(Error::InvalidFrame(_))
            ));
        }
        assert_eq!(extender.store(), &before);
        assert_eq!(handle.write_count(), writes);
        assert_eq!(host.installs, installs);
    }

    #[test]
    fn test_set_unprovisioned_frame_rejected() {
        let (mut extender, handle) = extender_with(json!({"NumSpritesAddedMale": 3}));
        let mut host = TestHost::new(Gender::Male);
        extender.on_session_loaded(&mut host).unwrap();
        let writes = handle.write_count();

        assert!(matches!(
            extender.set_offset(&mut host, 200, 1, 1),
            Err(Error::FrameNotProvisioned {
                frame: 200,
                provisioned: 3
            })
        ));
        assert!(matches!(
            extender.set_offset(&mut host, 129, 1, 1),
            Err(Error::FrameNotProvisioned { .. })
        ));
        assert_eq!(handle.write_count(), writes);
    }

    #[test]
    fn test_gender_selects_sequence() {
        let (mut extender, _handle) = extender_with(json!({
            "NumSpritesAddedMale": 1,
            "NumSpritesAddedFemale": 2
        }));
        let mut host = TestHost::new(Gender::Female);
        extender.on_session_loaded(&mut host).unwrap();
        assert_eq!(host.tables.len(), BASE_FRAME_COUNT + 2);

        extender.set_offset(&mut host, 127, 9, 9).unwrap();
        assert_eq!(
            extender.get_offset(Gender::Female, 127),
            Some(OffsetPair::new(9, 9))
        );
        assert_eq!(extender.get_offset(Gender::Male, 127), None);
        assert_eq!(extender.store().offsets_male, vec![OffsetPair::ZERO]);
    }

    #[test]
    fn test_get_out_of_range() {
        let (mut extender, _handle) = extender_with(json!({"NumSpritesAddedMale": 1}));
        let mut host = TestHost::new(Gender::Male);
        extender.on_session_loaded(&mut host).unwrap();

        assert_eq!(extender.get_offset(Gender::Male, 125), None);
        assert_eq!(extender.get_offset(Gender::Male, 127), None);
        assert_eq!(extender.get_offset(Gender::Male, -1), None);
    }

    #[test]
    fn test_persist_failure_keeps_edit() {
        let (mut extender, handle) = extender_with(json!({"NumSpritesAddedMale": 1}));
        let mut host = TestHost::new(Gender::Male);
        extender.on_session_loaded(&mut host).unwrap();
        handle.set_fail_writes(true);

        let err = extender.set_offset(&mut host, 126, 2, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::EditNotPersisted {
                frame: 126,
                pair: OffsetPair { x: 2, y: 3 },
                ..
            }
        ));
        assert!(err.to_string().contains("for this session only"));
        assert_eq!(
            extender.get_offset(Gender::Male, 126),
            Some(OffsetPair::new(2, 3))
        );
        assert_eq!(host.tables.get(126), Some(OffsetPair::new(2, 3)));
    }

    #[test]
    fn test_detached_session() {
        let mut extender = SpriteExtender::new(None);
        assert!(!extender.has_storage());
        extender.set_sprites_added(Gender::Male, 2).unwrap();

        let mut host = TestHost::new(Gender::Male);
        assert_eq!(extender.on_session_loaded(&mut host).unwrap(), 2);
        extender.set_offset(&mut host, 127, -4, 4).unwrap();
        assert_eq!(
            extender.get_offset(Gender::Male, 127),
            Some(OffsetPair::new(-4, 4))
        );
    }

    #[test]
    fn test_bad_host_tables() {
        let (mut extender, _handle) = extender_with(json!({"NumSpritesAddedMale": 1}));
        let mut host = TestHost::new(Gender::Male);
        host.tables = OffsetTables::new(vec![0; 10], vec![0; 10]);

        assert!(matches!(
            extender.on_session_loaded(&mut host),
            Err(Error::BaseTableTooShort(10))
        ));
        assert!(matches!(
            extender.set_offset(&mut host, 126, 1, 1),
            Err(Error::BaseTableTooShort(10))
        ));
        assert_eq!(extender.store().offsets_male, vec![OffsetPair::ZERO]);
    }

    #[test]
    fn test_session_load_rejects_huge_count() {
        let (mut extender, handle) = extender_with(json!({"NumSpritesAddedMale": 4294967295u32}));
        let mut host = TestHost::new(Gender::Male);

        assert!(matches!(
            extender.on_session_loaded(&mut host),
            Err(Error::TooManySprites {
                count: 4294967295,
                max: MAX_SPRITES_ADDED,
                ..
            })
        ));
        assert!(extender.store().offsets_male.is_empty());
        assert_eq!(host.installs, 0);
        assert_eq!(handle.write_count(), 0);
    }
}
