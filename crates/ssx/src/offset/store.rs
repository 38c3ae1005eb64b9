use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Pixel displacement applied to overlay graphics for one frame.
///
/// Stored on disk as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct OffsetPair {
    pub x: i32,
    pub y: i32,
}

impl OffsetPair {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for OffsetPair {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<OffsetPair> for [i32; 2] {
    fn from(pair: OffsetPair) -> Self {
        [pair.x, pair.y]
    }
}

impl fmt::Display for OffsetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Persisted offset configuration (`SSXConfig.json`).
///
/// Each gender owns an ordered sequence of offset pairs, one per added frame,
/// and the number of sprites the user declared as added. The sequence may
/// lag behind a count raised after provisioning; it only grows when
/// provisioned again from empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OffsetStore {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub offsets_female: Vec<OffsetPair>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub offsets_male: Vec<OffsetPair>,
    #[serde(default)]
    pub num_sprites_added_female: u32,
    #[serde(default)]
    pub num_sprites_added_male: u32,
}

impl OffsetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active offset sequence for a gender
    pub fn offsets(&self, gender: Gender) -> &[OffsetPair] {
        match gender {
            Gender::Male => &self.offsets_male,
            Gender::Female => &self.offsets_female,
        }
    }

    pub fn offsets_mut(&mut self, gender: Gender) -> &mut Vec<OffsetPair> {
        match gender {
            Gender::Male => &mut self.offsets_male,
            Gender::Female => &mut self.offsets_female,
        }
    }

    /// Declared number of added sprites for a gender
    pub fn sprites_added(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.num_sprites_added_male,
            Gender::Female => self.num_sprites_added_female,
        }
    }

    pub fn set_sprites_added(&mut self, gender: Gender, count: u32) {
        match gender {
            Gender::Male => self.num_sprites_added_male = count,
            Gender::Female => self.num_sprites_added_female = count,
        }
    }

    /// Whether any gender declares added sprites
    pub fn has_added_sprites(&self) -> bool {
        self.num_sprites_added_male > 0 || self.num_sprites_added_female > 0
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
