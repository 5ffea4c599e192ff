//! Weapon and armor material to metal type classification.

use game_types::{ArmorMaterial, ItemGroup, MetalType, WeaponMaterial};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

const WEAPON_METALS: [(WeaponMaterial, MetalType); 10] = [
    (WeaponMaterial::Iron, MetalType::Iron),
    (WeaponMaterial::Steel, MetalType::Steel),
    (WeaponMaterial::Silver, MetalType::Silver),
    (WeaponMaterial::Elven, MetalType::Elven),
    (WeaponMaterial::Dwarven, MetalType::Dwarven),
    (WeaponMaterial::Mithril, MetalType::Mithril),
    (WeaponMaterial::Adamantium, MetalType::Adamantium),
    (WeaponMaterial::Ebony, MetalType::Ebony),
    (WeaponMaterial::Orcish, MetalType::Orcish),
    (WeaponMaterial::Daedric, MetalType::Daedric),
];

// Leather has no metal type. Both chain variants are Chain.
const ARMOR_METALS: [(ArmorMaterial, MetalType); 12] = [
    (ArmorMaterial::Iron, MetalType::Iron),
    (ArmorMaterial::Steel, MetalType::Steel),
    (ArmorMaterial::Chain, MetalType::Chain),
    (ArmorMaterial::Chain2, MetalType::Chain),
    (ArmorMaterial::Silver, MetalType::Silver),
    (ArmorMaterial::Elven, MetalType::Elven),
    (ArmorMaterial::Dwarven, MetalType::Dwarven),
    (ArmorMaterial::Mithril, MetalType::Mithril),
    (ArmorMaterial::Adamantium, MetalType::Adamantium),
    (ArmorMaterial::Ebony, MetalType::Ebony),
    (ArmorMaterial::Orcish, MetalType::Orcish),
    (ArmorMaterial::Daedric, MetalType::Daedric),
];

static WEAPON_TABLE: LazyLock<FxHashMap<u16, MetalType>> = LazyLock::new(|| {
    WEAPON_METALS
        .iter()
        .map(|(material, metal)| (u16::from(*material), *metal))
        .collect()
});

static ARMOR_TABLE: LazyLock<FxHashMap<u16, MetalType>> = LazyLock::new(|| {
    ARMOR_METALS
        .iter()
        .map(|(material, metal)| (u16::from(*material), *metal))
        .collect()
});

/// Maps a raw material value to its metal type. Weapon and armor materials
/// are separate value spaces; anything unknown, and every other group, is
/// [`MetalType::None`].
pub fn classify(group: ItemGroup, material: u16) -> MetalType {
    let table = match group {
        ItemGroup::Weapons => &*WEAPON_TABLE,
        ItemGroup::Armor => &*ARMOR_TABLE,
        _ => return MetalType::None,
    };

    table.get(&material).copied().unwrap_or_default()
}
