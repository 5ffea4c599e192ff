mod common;

use common::{
    CLOTHING_ARCHIVE, MockTextures, WEAPON_ARCHIVE, dyeable_bitmap, group_index, services,
    template_index,
};
use game_types::{
    ArmorMaterial, ContainerType, DyeColor, ItemGroup, ItemHands, MensClothing, MetalType, Weapons,
    WomensClothing,
};
use item_services::{ImageKey, ItemError, ItemInstance, KeyField, TextureError};
use formats::IndexedBitmap;
use std::sync::Arc;

fn weapon(member: Weapons, record: u16, color: DyeColor) -> ItemInstance {
    ItemInstance {
        group: ItemGroup::Weapons,
        group_index: group_index(Weapons::ALL, member),
        name: "%it".to_string(),
        color: color.into(),
        player_texture_archive: WEAPON_ARCHIVE,
        player_texture_record: record,
        ..Default::default()
    }
}

fn cloak(group: ItemGroup, group_index: u16, color: DyeColor) -> ItemInstance {
    ItemInstance {
        group,
        group_index,
        name: "%it".to_string(),
        color: color.into(),
        player_texture_archive: CLOTHING_ARCHIVE,
        player_texture_record: 5,
        ..Default::default()
    }
}

#[test]
fn test_first_weapon_is_dagger() {
    let templates = template_index();
    let template = templates.resolve(ItemGroup::Weapons, 0).unwrap();
    assert_eq!(template.name, "Dagger");
    assert_eq!(template.index, Weapons::Dagger.ordinal());
}

#[test]
fn test_dagger_image_is_cached() {
    let mut services = services(MockTextures::new().with_image(WEAPON_ARCHIVE, 2, dyeable_bitmap()));
    let dagger = weapon(Weapons::Dagger, 2, DyeColor::Iron);

    let first = services.item_image(&dagger, 0, false).unwrap();
    let second = services.item_image(&dagger, 0, false).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(services.texture_source().image_loads.get(), 1);
    assert_eq!(services.item_image_count(), 1);
}

#[test]
fn test_weapon_dye_moves_metal_band() {
    let mut services = services(MockTextures::new().with_image(WEAPON_ARCHIVE, 2, dyeable_bitmap()));

    let iron = services
        .item_image(&weapon(Weapons::Dagger, 2, DyeColor::Iron), 0, false)
        .unwrap();
    let steel = services
        .item_image(&weapon(Weapons::Dagger, 2, DyeColor::Steel), 0, false)
        .unwrap();

    assert_eq!(iron.bitmap.data, vec![0x63, 0x75, 0x00, 0xFF]);
    assert_eq!(steel.bitmap.data, vec![0x63, 0x85, 0x00, 0xFF]);
    // Mask pixels stay transparent on the cached surface.
    assert_eq!(steel.surface.pixel(3, 0), Some([0, 0, 0, 0]));
    assert_eq!(steel.surface.pixel(1, 0), Some([0x85, 0x85, 0x85, 255]));
}

#[test]
fn test_clothing_dye_moves_cloth_band() {
    let mut services = services(MockTextures::new().with_image(CLOTHING_ARCHIVE, 10, dyeable_bitmap()));
    let straps = ItemInstance {
        group: ItemGroup::MensClothing,
        group_index: 0,
        color: DyeColor::Red.into(),
        player_texture_archive: CLOTHING_ARCHIVE,
        player_texture_record: 10,
        ..Default::default()
    };

    let image = services.item_image(&straps, 0, false).unwrap();
    assert_eq!(image.bitmap.data, vec![0x83, 0x75, 0x00, 0xFF]);
}

#[test]
fn test_undyed_group_passes_through() {
    let mut services = services(MockTextures::new().with_image(50, 1, dyeable_bitmap()));
    let gem = ItemInstance {
        group: ItemGroup::Gems,
        color: DyeColor::Red.into(),
        player_texture_archive: 50,
        player_texture_record: 1,
        ..Default::default()
    };

    let image = services.item_image(&gem, 0, false).unwrap();
    assert_eq!(image.bitmap, dyeable_bitmap());
}

#[test]
fn test_variant_loads_following_record() {
    let mut services = services(
        MockTextures::new()
            .with_image(WEAPON_ARCHIVE, 12, IndexedBitmap::new(1, 1, vec![1]))
            .with_image(WEAPON_ARCHIVE, 13, IndexedBitmap::new(1, 1, vec![2])),
    );
    let sword = weapon(Weapons::Longsword, 12, DyeColor::Iron);

    let right = services.item_image(&sword, 0, false).unwrap();
    let left = services.item_image(&sword, 1, false).unwrap();

    assert_eq!(right.bitmap.data, vec![1]);
    assert_eq!(left.bitmap.data, vec![2]);
    assert_eq!(
        ImageKey::for_item(&sword, 1, false).unwrap().record(),
        12,
        "key records the item's own record"
    );
}

#[test]
fn test_remove_mask() {
    let mut services = services(MockTextures::new().with_image(WEAPON_ARCHIVE, 2, dyeable_bitmap()));
    let dagger = weapon(Weapons::Dagger, 2, DyeColor::Iron);

    let image = services.item_image(&dagger, 0, true).unwrap();
    assert_eq!(image.bitmap.data[3], 0x00);
}

#[test]
fn test_mask_color_override_is_not_cached() {
    let mut services = services(MockTextures::new().with_image(WEAPON_ARCHIVE, 2, dyeable_bitmap()));
    let dagger = weapon(Weapons::Dagger, 2, DyeColor::Iron);
    let red = [255, 0, 0, 255];

    let first = services.item_image_with_mask_color(&dagger, red, 0).unwrap();
    let second = services.item_image_with_mask_color(&dagger, [0, 0, 255, 255], 0).unwrap();

    assert_eq!(first.surface.pixel(3, 0), Some(red));
    assert_eq!(second.surface.pixel(3, 0), Some([0, 0, 255, 255]));
    // Only the base image is cached and it keeps a transparent mask.
    assert_eq!(services.item_image_count(), 1);
    assert_eq!(services.texture_source().image_loads.get(), 1);
    let base = services.item_image(&dagger, 0, false).unwrap();
    assert_eq!(base.surface.pixel(3, 0), Some([0, 0, 0, 0]));
}

#[test]
fn test_missing_asset_is_an_error() {
    let mut services = services(MockTextures::new());
    let dagger = weapon(Weapons::Dagger, 2, DyeColor::Iron);

    let err = services.item_image(&dagger, 0, false).unwrap_err();
    assert_eq!(
        err,
        ItemError::MissingAsset(TextureError::NotFound {
            archive: WEAPON_ARCHIVE,
            record: 2,
            frame: 0,
        })
    );
    assert_eq!(services.item_image_count(), 0);
}

#[test]
fn test_key_overflow_is_rejected() {
    let mut services = services(MockTextures::new());
    let mut dagger = weapon(Weapons::Dagger, 2, DyeColor::Iron);
    dagger.player_texture_archive = 512;

    let err = services.item_image(&dagger, 0, false).unwrap_err();
    assert_eq!(
        err,
        ItemError::KeyFieldOverflow {
            field: KeyField::Archive,
            value: 512,
        }
    );

    let err = services
        .item_image(&weapon(Weapons::Dagger, 2, DyeColor::Iron), 8, false)
        .unwrap_err();
    assert!(matches!(err, ItemError::KeyFieldOverflow { field: KeyField::Variant, .. }));
    assert_eq!(services.texture_source().image_loads.get(), 0);
}

#[test]
fn test_container_image_is_cached() {
    let mut services = services(
        MockTextures::new().with_container_icon(ContainerType::Corpse.into(), dyeable_bitmap()),
    );

    let first = services.container_image(ContainerType::Corpse).unwrap();
    let second = services.container_image(ContainerType::Corpse).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(services.texture_source().container_loads.get(), 1);
    assert_eq!(services.container_image_count(), 1);
    assert_eq!(services.item_image_count(), 0);

    let err = services.container_image(ContainerType::Wagon).unwrap_err();
    assert_eq!(
        err,
        ItemError::MissingAsset(TextureError::ContainerIconNotFound(0))
    );
}

#[test]
fn test_cloak_interior() {
    let services = services(MockTextures::new().with_image(CLOTHING_ARCHIVE, 40, dyeable_bitmap()));
    let formal = cloak(
        ItemGroup::MensClothing,
        group_index(MensClothing::ALL, MensClothing::FormalCloak),
        DyeColor::Green,
    );

    let interior = services.cloak_interior_image(&formal).unwrap();
    assert_eq!(interior.bitmap.data, vec![0x43, 0x75, 0x00, 0xFF]);

    services.cloak_interior_image(&formal).unwrap();
    assert_eq!(services.texture_source().image_loads.get(), 2);
    assert_eq!(services.item_image_count(), 0);
}

#[test]
fn test_cloak_interior_of_other_items_is_empty() {
    let services = services(MockTextures::new().with_image(CLOTHING_ARCHIVE, 10, dyeable_bitmap()));

    let straps = cloak(ItemGroup::MensClothing, 0, DyeColor::Blue);
    assert!(services.cloak_interior_image(&straps).unwrap().is_empty());

    let dagger = weapon(Weapons::Dagger, 2, DyeColor::Iron);
    assert!(services.cloak_interior_image(&dagger).unwrap().is_empty());

    assert_eq!(services.texture_source().image_loads.get(), 0);
}

#[test]
fn test_cloak_interior_missing_art_is_empty() {
    let services = services(MockTextures::new());
    let formal = cloak(
        ItemGroup::WomensClothing,
        group_index(WomensClothing::ALL, WomensClothing::FormalCloak),
        DyeColor::Blue,
    );

    assert!(services.cloak_interior_image(&formal).unwrap().is_empty());
    assert_eq!(services.texture_source().image_loads.get(), 1);
}

#[test]
fn test_legacy_equip_index() {
    let services = services(MockTextures::new());
    let item = ItemInstance {
        legacy_record_id: (12 << 8) | 0x04,
        ..Default::default()
    };

    assert_eq!(services.legacy_equip_index(&item, &[5, 12, 7]), Some(1));
    assert_eq!(services.legacy_equip_index(&item, &[5, 7]), None);
    assert_eq!(services.legacy_equip_index(&item, &[]), None);
}

#[test]
fn test_names_hands_and_metal() {
    let services = services(MockTextures::new());
    let mut dagger = weapon(Weapons::Dagger, 2, DyeColor::Iron);
    dagger.material = 3;

    assert_eq!(services.resolve_name(&dagger).unwrap(), "Elven Dagger");
    assert_eq!(services.item_hands(&dagger).unwrap(), ItemHands::Either);
    assert_eq!(services.metal_type(&dagger), MetalType::Elven);

    let cuirass = ItemInstance {
        group: ItemGroup::Armor,
        name: "%it".to_string(),
        material: ArmorMaterial::Chain2.into(),
        ..Default::default()
    };
    assert_eq!(services.resolve_name(&cuirass).unwrap(), "Chain Cuirass");
    assert_eq!(services.item_hands(&cuirass).unwrap(), ItemHands::None);
    assert_eq!(services.metal_type(&cuirass), MetalType::Chain);
}

#[test]
fn test_out_of_range_index_uses_empty_template() {
    let services = services(MockTextures::new());
    let past_end = Weapons::ALL.len() as u16;

    let template = services.template(ItemGroup::Weapons, past_end).unwrap();
    assert!(template.name.is_empty());

    let item = ItemInstance {
        group: ItemGroup::Weapons,
        group_index: past_end,
        name: "%it".to_string(),
        ..Default::default()
    };
    assert_eq!(services.item_hands(&item).unwrap(), ItemHands::None);
}
