//! Equip slot and hand usage lookups.

use game_types::{Armor, ItemGroup, ItemHands, Weapons};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

const EITHER_HAND: [Weapons; 10] = [
    Weapons::Dagger,
    Weapons::Tanto,
    Weapons::Shortsword,
    Weapons::Wakazashi,
    Weapons::Broadsword,
    Weapons::Saber,
    Weapons::Longsword,
    Weapons::Katana,
    Weapons::BattleAxe,
    Weapons::Mace,
];

const BOTH_HANDS: [Weapons; 8] = [
    Weapons::Claymore,
    Weapons::DaiKatana,
    Weapons::WarAxe,
    Weapons::Staff,
    Weapons::Flail,
    Weapons::Warhammer,
    Weapons::ShortBow,
    Weapons::LongBow,
];

const SHIELDS: [Armor; 4] = [
    Armor::Buckler,
    Armor::RoundShield,
    Armor::KiteShield,
    Armor::TowerShield,
];

static HANDS: LazyLock<FxHashMap<u16, ItemHands>> = LazyLock::new(|| {
    let weapons = EITHER_HAND
        .iter()
        .map(|w| (w.ordinal(), ItemHands::Either))
        .chain(BOTH_HANDS.iter().map(|w| (w.ordinal(), ItemHands::Both)));
    let shields = SHIELDS.iter().map(|a| (a.ordinal(), ItemHands::LeftOnly));
    weapons.chain(shields).collect()
});

/// Hands an item of `group` with global template ordinal `ordinal` can be
/// held in. Only weapons and shields are held.
pub fn item_hands(group: ItemGroup, ordinal: u16) -> ItemHands {
    if !group.is_weapon_or_armor() {
        return ItemHands::None;
    }
    HANDS.get(&ordinal).copied().unwrap_or_default()
}

/// Slot of `legacy_record_id` in a legacy equip table. Table entries store
/// record ids without their low sub-record byte.
pub fn find_equip_slot(legacy_record_id: u32, legacy_equip_table: &[u32]) -> Option<usize> {
    let id = legacy_record_id >> 8;
    legacy_equip_table.iter().position(|entry| *entry == id)
}
