#![allow(dead_code)]

use formats::{IndexedBitmap, Palette};
use game_types::{Armor, MensClothing, Weapons, WomensClothing};
use item_services::{
    EnumRegistry, ItemServices, ItemTemplate, TemplateIndex, TextureError, TextureSource,
};
use std::{cell::Cell, collections::HashMap};

/// Archive holding weapon art in the fixture.
pub const WEAPON_ARCHIVE: u16 = 200;
/// Archive holding clothing art in the fixture.
pub const CLOTHING_ARCHIVE: u16 = 209;

/// In-memory texture source that counts every load.
pub struct MockTextures {
    palette: Palette,
    images: HashMap<(u16, u16), IndexedBitmap>,
    container_icons: HashMap<u16, IndexedBitmap>,
    pub image_loads: Cell<usize>,
    pub container_loads: Cell<usize>,
}

impl MockTextures {
    pub fn new() -> Self {
        Self {
            palette: Palette::grayscale(),
            images: HashMap::new(),
            container_icons: HashMap::new(),
            image_loads: Cell::new(0),
            container_loads: Cell::new(0),
        }
    }

    pub fn with_image(mut self, archive: u16, record: u16, bitmap: IndexedBitmap) -> Self {
        self.images.insert((archive, record), bitmap);
        self
    }

    pub fn with_container_icon(mut self, record: u16, bitmap: IndexedBitmap) -> Self {
        self.container_icons.insert(record, bitmap);
        self
    }
}

impl TextureSource for MockTextures {
    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn load_raw_image(
        &self,
        archive: u16,
        record: u16,
        frame: u16,
    ) -> Result<IndexedBitmap, TextureError> {
        self.image_loads.set(self.image_loads.get() + 1);
        self.images
            .get(&(archive, record))
            .filter(|_| frame == 0)
            .cloned()
            .ok_or(TextureError::NotFound {
                archive,
                record,
                frame,
            })
    }

    fn load_container_icon(&self, record: u16) -> Result<IndexedBitmap, TextureError> {
        self.container_loads.set(self.container_loads.get() + 1);
        self.container_icons
            .get(&record)
            .cloned()
            .ok_or(TextureError::ContainerIconNotFound(record))
    }
}

/// A 4x1 bitmap touching both dye bands, the transparent index and the mask.
pub fn dyeable_bitmap() -> IndexedBitmap {
    IndexedBitmap::new(4, 1, vec![0x63, 0x75, 0x00, 0xFF])
}

/// Full classic-sized template table. Only the entries tests look at carry
/// real data.
pub fn template_table() -> Vec<ItemTemplate> {
    let mut templates: Vec<ItemTemplate> = (0..283)
        .map(|index| ItemTemplate {
            index,
            name: format!("Template {}", index),
            ..Default::default()
        })
        .collect();

    let mut set = |ordinal: u16, name: &str, archive: u16, record: u16| {
        let template = &mut templates[ordinal as usize];
        template.name = name.to_string();
        template.player_texture_archive = archive;
        template.player_texture_record = record;
    };

    set(Weapons::Dagger.ordinal(), "Dagger", WEAPON_ARCHIVE, 2);
    set(Weapons::Longsword.ordinal(), "Longsword", WEAPON_ARCHIVE, 12);
    set(Armor::Cuirass.ordinal(), "Cuirass", 239, 0);
    set(MensClothing::FormalCloak.ordinal(), "Formal cloak", CLOTHING_ARCHIVE, 40);
    set(MensClothing::CasualCloak.ordinal(), "Casual cloak", CLOTHING_ARCHIVE, 42);
    set(WomensClothing::FormalCloak.ordinal(), "Formal cloak", CLOTHING_ARCHIVE, 60);
    set(MensClothing::Straps.ordinal(), "Straps", CLOTHING_ARCHIVE, 10);

    templates
}

pub fn template_index() -> TemplateIndex {
    TemplateIndex::new(EnumRegistry::classic(), template_table())
}

pub fn services(textures: MockTextures) -> ItemServices<MockTextures> {
    ItemServices::new(template_index(), textures)
}

/// Index of `member` within its group's enumeration.
pub fn group_index<T: PartialEq>(all: &[T], member: T) -> u16 {
    all.iter().position(|m| *m == member).unwrap() as u16
}
