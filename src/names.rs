//! Display names for items.

use game_types::{ArmorMaterial, ItemGroup, WeaponMaterial};
use tracing::warn;

use crate::{item::ItemInstance, templates::ItemTemplate};

/// Placeholder in stored item names replaced by the template name.
pub const TEMPLATE_NAME_TOKEN: &str = "%it";

/// Supplies human readable material names.
pub trait TextProvider {
    fn weapon_material_name(&self, material: WeaponMaterial) -> String;
    fn armor_material_name(&self, material: ArmorMaterial) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTextProvider;

impl TextProvider for EnglishTextProvider {
    fn weapon_material_name(&self, material: WeaponMaterial) -> String {
        match material {
            WeaponMaterial::Iron => "Iron",
            WeaponMaterial::Steel => "Steel",
            WeaponMaterial::Silver => "Silver",
            WeaponMaterial::Elven => "Elven",
            WeaponMaterial::Dwarven => "Dwarven",
            WeaponMaterial::Mithril => "Mithril",
            WeaponMaterial::Adamantium => "Adamantium",
            WeaponMaterial::Ebony => "Ebony",
            WeaponMaterial::Orcish => "Orcish",
            WeaponMaterial::Daedric => "Daedric",
        }
        .to_string()
    }

    fn armor_material_name(&self, material: ArmorMaterial) -> String {
        match material {
            ArmorMaterial::Leather => "Leather",
            ArmorMaterial::Chain | ArmorMaterial::Chain2 => "Chain",
            ArmorMaterial::Iron => "Iron",
            ArmorMaterial::Steel => "Steel",
            ArmorMaterial::Silver => "Silver",
            ArmorMaterial::Elven => "Elven",
            ArmorMaterial::Dwarven => "Dwarven",
            ArmorMaterial::Mithril => "Mithril",
            ArmorMaterial::Adamantium => "Adamantium",
            ArmorMaterial::Ebony => "Ebony",
            ArmorMaterial::Orcish => "Orcish",
            ArmorMaterial::Daedric => "Daedric",
        }
        .to_string()
    }
}

fn material_name(group: ItemGroup, material: u16, text: &dyn TextProvider) -> Option<String> {
    let name = match group {
        ItemGroup::Weapons => WeaponMaterial::try_from(material)
            .ok()
            .map(|m| text.weapon_material_name(m)),
        ItemGroup::Armor => ArmorMaterial::try_from(material)
            .ok()
            .map(|m| text.armor_material_name(m)),
        _ => return None,
    };

    if name.is_none() {
        warn!("Unknown {:?} material {:#06x}, name left unprefixed", group, material);
    }
    name
}

/// Full display name: the stored name with the template placeholder filled
/// in, prefixed by the material for weapons and armor.
pub fn resolve_name(item: &ItemInstance, template: &ItemTemplate, text: &dyn TextProvider) -> String {
    let name = item.name.replace(TEMPLATE_NAME_TOKEN, &template.name);

    match material_name(item.group, item.material, text) {
        Some(material) => format!("{} {}", material, name),
        None => name,
    }
}
