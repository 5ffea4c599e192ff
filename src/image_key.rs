//! Packing of an item's visual attributes into a single cache key.
//!
//! Layout, most significant bit first:
//!
//! | bits  | field         | width |
//! |-------|---------------|-------|
//! | 31-27 | colour        | 5     |
//! | 26-24 | variant       | 3     |
//! | 23-15 | archive       | 9     |
//! | 14-8  | record        | 7     |
//! | 7     | mask removed  | 1     |
//! | 6-0   | unused (zero) |       |
//!
//! Code outside this crate may precompute keys, so the layout must not change.

use crate::{error::ItemError, item::ItemInstance};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    Color,
    Variant,
    Archive,
    Record,
}

impl KeyField {
    pub const fn shift(self) -> u32 {
        match self {
            KeyField::Color => 27,
            KeyField::Variant => 24,
            KeyField::Archive => 15,
            KeyField::Record => 8,
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            KeyField::Color => 5,
            KeyField::Variant => 3,
            KeyField::Archive => 9,
            KeyField::Record => 7,
        }
    }

    pub const fn max(self) -> u32 {
        (1 << self.bits()) - 1
    }

    fn extract(self, raw: u32) -> u32 {
        (raw >> self.shift()) & self.max()
    }
}

const MASK_SHIFT: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageKey(u32);

impl ImageKey {
    /// Packs the fields with no range checks.
    ///
    /// A value wider than its field carries into the neighbouring field, so
    /// two different items can share a key. Use [`ImageKey::try_encode`]
    /// when inputs are not known to be in range.
    pub fn encode(color: u32, variant: u32, archive: u32, record: u32, mask_removed: bool) -> Self {
        let mask = mask_removed as u32;
        Self(
            (color << KeyField::Color.shift())
                .wrapping_add(variant << KeyField::Variant.shift())
                .wrapping_add(archive << KeyField::Archive.shift())
                .wrapping_add(record << KeyField::Record.shift())
                .wrapping_add(mask << MASK_SHIFT),
        )
    }

    /// Packs the fields, rejecting any value wider than its field.
    pub fn try_encode(
        color: u32,
        variant: u32,
        archive: u32,
        record: u32,
        mask_removed: bool,
    ) -> Result<Self, ItemError> {
        for (field, value) in [
            (KeyField::Color, color),
            (KeyField::Variant, variant),
            (KeyField::Archive, archive),
            (KeyField::Record, record),
        ] {
            if value > field.max() {
                return Err(ItemError::KeyFieldOverflow { field, value });
            }
        }

        Ok(Self::encode(color, variant, archive, record, mask_removed))
    }

    /// Key the image of `item` is cached under.
    pub fn for_item(item: &ItemInstance, variant: u8, remove_mask: bool) -> Result<Self, ItemError> {
        Self::try_encode(
            item.color as u32,
            variant as u32,
            item.player_texture_archive as u32,
            item.player_texture_record as u32,
            remove_mask,
        )
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn color(self) -> u32 {
        KeyField::Color.extract(self.0)
    }

    pub fn variant(self) -> u32 {
        KeyField::Variant.extract(self.0)
    }

    pub fn archive(self) -> u32 {
        KeyField::Archive.extract(self.0)
    }

    pub fn record(self) -> u32 {
        KeyField::Record.extract(self.0)
    }

    pub fn mask_removed(self) -> bool {
        (self.0 >> MASK_SHIFT) & 1 == 1
    }
}

impl std::fmt::Display for ImageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
