//! Per-group ordinal enumerations: which global template ordinals a group
//! owns, in within-group index order.

use game_types::{Armor, ItemGroup, MensClothing, Weapons, WomensClothing};
use rustc_hash::FxHashMap;
use tracing::error;

use crate::error::ItemError;

/// Groups whose members are only known by position. Each owns a contiguous
/// block of template ordinals: (group, first ordinal, member count).
const CONTIGUOUS_GROUPS: [(ItemGroup, u16, u16); 24] = [
    (ItemGroup::PlantIngredients1, 0, 19),
    (ItemGroup::PlantIngredients2, 19, 19),
    (ItemGroup::CreatureIngredients1, 38, 14),
    (ItemGroup::CreatureIngredients2, 52, 6),
    (ItemGroup::CreatureIngredients3, 58, 5),
    (ItemGroup::MiscellaneousIngredients1, 63, 7),
    (ItemGroup::MetalIngredients, 70, 8),
    (ItemGroup::Drugs, 78, 4),
    (ItemGroup::UselessItems1, 82, 9),
    (ItemGroup::Gems, 91, 8),
    (ItemGroup::MiscellaneousIngredients2, 99, 3),
    (ItemGroup::MagicItems, 132, 1),
    (ItemGroup::ReligiousItems, 133, 8),
    (ItemGroup::Books, 217, 1),
    (ItemGroup::Maps, 218, 1),
    (ItemGroup::Paintings, 219, 1),
    (ItemGroup::Transportation, 220, 2),
    (ItemGroup::Deeds, 222, 2),
    (ItemGroup::Jewellery, 224, 10),
    (ItemGroup::QuestItems, 234, 1),
    (ItemGroup::MiscItems, 235, 18),
    (ItemGroup::Currency, 253, 3),
    (ItemGroup::UselessItems2, 256, 4),
    (ItemGroup::Artifacts, 260, 23),
];

#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    groups: FxHashMap<ItemGroup, Vec<u16>>,
}

impl EnumRegistry {
    /// Registry with no groups mapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry covering every [`ItemGroup`] as laid out in classic data.
    pub fn classic() -> Self {
        fn ordinals<T: Copy + Into<u16>>(members: &[T]) -> Vec<u16> {
            members.iter().map(|m| (*m).into()).collect()
        }

        let mut registry = Self::new();
        registry.insert(ItemGroup::Weapons, ordinals(Weapons::ALL));
        registry.insert(ItemGroup::Armor, ordinals(Armor::ALL));
        registry.insert(ItemGroup::MensClothing, ordinals(MensClothing::ALL));
        registry.insert(ItemGroup::WomensClothing, ordinals(WomensClothing::ALL));
        for (group, first, count) in CONTIGUOUS_GROUPS {
            registry.insert(group, (first..first + count).collect());
        }
        registry.insert(ItemGroup::Error, Vec::new());
        registry
    }

    pub fn insert(&mut self, group: ItemGroup, ordinals: Vec<u16>) {
        self.groups.insert(group, ordinals);
    }

    pub fn ordinals(&self, group: ItemGroup) -> Result<&[u16], ItemError> {
        match self.groups.get(&group) {
            Some(ordinals) => Ok(ordinals),
            None => {
                error!("Item group not found in enumeration registry: {:?}", group);
                Err(ItemError::UnmappedGroup(group))
            }
        }
    }

    /// Global template ordinal of the `index`th member of `group`, or `None`
    /// when the index is past the end of the group.
    pub fn template_ordinal(&self, group: ItemGroup, index: u16) -> Result<Option<u16>, ItemError> {
        Ok(self.ordinals(group)?.get(index as usize).copied())
    }

    /// Inverse of [`EnumRegistry::template_ordinal`].
    pub fn group_index(&self, group: ItemGroup, ordinal: u16) -> Result<Option<u16>, ItemError> {
        Ok(self
            .ordinals(group)?
            .iter()
            .position(|o| *o == ordinal)
            .map(|i| i as u16))
    }
}
