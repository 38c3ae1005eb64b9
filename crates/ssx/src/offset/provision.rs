use strum::IntoEnumIterator;
use tracing::debug;

use super::store::{Gender, OffsetPair, OffsetStore};
use crate::error::{Error, Result};

/// Upper bound on the sprites a gender may declare as added
pub const MAX_SPRITES_ADDED: u32 = 4096;

/// Reject a declared count above [`MAX_SPRITES_ADDED`]
pub fn check_sprite_count(gender: Gender, count: u32) -> Result<()> {
    if count > MAX_SPRITES_ADDED {
        return Err(Error::TooManySprites {
            gender: gender.as_str(),
            count,
            max: MAX_SPRITES_ADDED,
        });
    }
    Ok(())
}

/// Genders whose offset sequences were materialized by [`provision`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub provisioned: Vec<(Gender, u32)>,
}

impl ProvisionReport {
    /// Whether the store changed and needs persisting
    pub fn changed(&self) -> bool {
        !self.provisioned.is_empty()
    }
}

/// Fill empty offset sequences with zero pairs up to the declared count.
///
/// A gender is only touched when its sequence is empty and its count is
/// positive, so running this again on the result changes nothing. Counts
/// above [`MAX_SPRITES_ADDED`] fail before anything is touched.
pub fn provision(store: &mut OffsetStore) -> Result<ProvisionReport> {
    for gender in Gender::iter() {
        check_sprite_count(gender, store.sprites_added(gender))?;
    }

    let mut report = ProvisionReport::default();

    for gender in Gender::iter() {
        let count = store.sprites_added(gender);
        let offsets = store.offsets_mut(gender);
        if !offsets.is_empty() || count == 0 {
            debug!(
                "Skipping {} provisioning: {} pairs stored, {} declared",
                gender,
                offsets.len(),
                count
            );
            continue;
        }

        *offsets = vec![OffsetPair::ZERO; count as usize];
        report.provisioned.push((gender, count));
    }

    Ok(report)
}
