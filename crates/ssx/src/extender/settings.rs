use crate::error::Result;
use crate::offset::{Gender, OffsetStore, check_sprite_count};

use super::SpriteExtender;

/// A numeric option exposed to a settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsField {
    pub gender: Gender,
    pub name: &'static str,
    pub tooltip: &'static str,
    pub min: u32,
    pub step: u32,
}

/// The two count fields, male first
pub const SETTINGS_FIELDS: [SettingsField; 2] = [
    SettingsField {
        gender: Gender::Male,
        name: "Male Sprites to Be Added",
        tooltip: "Number of sprites to be added to male farmer sprite sheet",
        min: 0,
        step: 1,
    },
    SettingsField {
        gender: Gender::Female,
        name: "Female Sprites to Be Added",
        tooltip: "Number of sprites to be added to female farmer sprite sheet",
        min: 0,
        step: 1,
    },
];

impl SpriteExtender {
    pub fn sprites_added(&self, gender: Gender) -> u32 {
        self.store.sprites_added(gender)
    }

    /// Change a declared count.
    ///
    /// The offsets and live tables are left alone; they catch up on the next
    /// session load.
    pub fn set_sprites_added(&mut self, gender: Gender, count: u32) -> Result<()> {
        check_sprite_count(gender, count)?;
        self.store.set_sprites_added(gender, count);
        Ok(())
    }

    /// Restore the default config in memory. Call [`save_settings`] to keep it.
    ///
    /// [`save_settings`]: SpriteExtender::save_settings
    pub fn reset_settings(&mut self) {
        self.store = OffsetStore::default();
    }

    pub fn save_settings(&mut self) -> Result<()> {
        self.persist()
    }
}
