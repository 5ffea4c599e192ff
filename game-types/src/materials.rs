use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Material values stored on weapon records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum WeaponMaterial {
    Iron = 0x0000,
    Steel = 0x0001,
    Silver = 0x0002,
    Elven = 0x0003,
    Dwarven = 0x0004,
    Mithril = 0x0005,
    Adamantium = 0x0006,
    Ebony = 0x0007,
    Orcish = 0x0008,
    Daedric = 0x0009,
}

/// Material values stored on armor records. The high byte selects the
/// family (leather, chain, plate) and the low byte the plate metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum ArmorMaterial {
    Leather = 0x0000,
    Chain = 0x0100,
    Chain2 = 0x0103,
    Iron = 0x0200,
    Steel = 0x0201,
    Silver = 0x0202,
    Elven = 0x0203,
    Dwarven = 0x0204,
    Mithril = 0x0205,
    Adamantium = 0x0206,
    Ebony = 0x0207,
    Orcish = 0x0208,
    Daedric = 0x0209,
}

/// Normalized metal category shared by weapons and armor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetalType {
    #[default]
    None,
    Iron,
    Steel,
    Chain,
    Silver,
    Elven,
    Dwarven,
    Mithril,
    Adamantium,
    Ebony,
    Orcish,
    Daedric,
}
