use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Dye values stored in an item record's colour field. Every value fits in
/// five bits.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
pub enum DyeColor {
    // Cloth
    Blue = 0,
    Grey = 1,
    Red = 2,
    DarkBrown = 3,
    Purple = 4,
    LightBrown = 5,
    White = 6,
    Aquamarine = 7,
    Yellow = 8,
    Green = 9,
    Unchanged = 10,

    // Metal
    Iron = 18,
    Steel = 19,
    Chain = 20,
    Silver = 21,
    Elven = 22,
    Dwarven = 23,
    Mithril = 24,
    Adamantium = 25,
    Ebony = 26,
    Orcish = 27,
    Daedric = 28,
}

/// Which palette remap family a recolor uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DyeTarget {
    WeaponsAndArmor,
    Clothing,
}

impl DyeTarget {
    /// Remap family for items of `group`, or `None` for groups that are never dyed.
    pub fn for_group(group: crate::ItemGroup) -> Option<Self> {
        if group.is_weapon_or_armor() {
            Some(DyeTarget::WeaponsAndArmor)
        } else if group.is_clothing() {
            Some(DyeTarget::Clothing)
        } else {
            None
        }
    }
}
