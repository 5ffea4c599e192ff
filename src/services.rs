//! The item services object: one per session, owning the template index and
//! both image caches.

use formats::Rgba;
use game_types::{ContainerType, DyeTarget, ItemGroup, ItemHands, MensClothing, MetalType, WomensClothing};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    dye,
    equip,
    error::ItemError,
    image_cache::{ImageCache, ImageEntry},
    image_key::ImageKey,
    item::ItemInstance,
    metal,
    names::{self, EnglishTextProvider, TextProvider},
    settings::CacheSettings,
    templates::{ItemTemplate, TemplateIndex},
    texture_source::{TextureError, TextureSource},
};

const CLOAK_ORDINALS: [u16; 4] = [
    MensClothing::CasualCloak as u16,
    MensClothing::FormalCloak as u16,
    WomensClothing::CasualCloak as u16,
    WomensClothing::FormalCloak as u16,
];

pub struct ItemServices<S> {
    templates: TemplateIndex,
    textures: S,
    text: Box<dyn TextProvider>,
    item_images: ImageCache<ImageKey>,
    container_images: ImageCache<ContainerType>,
}

impl<S: TextureSource> ItemServices<S> {
    pub fn new(templates: TemplateIndex, textures: S) -> Self {
        Self::with_settings(templates, textures, &CacheSettings::default())
    }

    pub fn with_settings(templates: TemplateIndex, textures: S, cache: &CacheSettings) -> Self {
        Self {
            templates,
            textures,
            text: Box::new(EnglishTextProvider),
            item_images: ImageCache::with_warn_threshold("item image", cache.item_warn_threshold),
            container_images: ImageCache::new("container image"),
        }
    }

    pub fn with_text_provider(mut self, text: Box<dyn TextProvider>) -> Self {
        self.text = text;
        self
    }

    pub fn templates(&self) -> &TemplateIndex {
        &self.templates
    }

    pub fn texture_source(&self) -> &S {
        &self.textures
    }

    pub fn item_image_count(&self) -> usize {
        self.item_images.len()
    }

    pub fn container_image_count(&self) -> usize {
        self.container_images.len()
    }

    /// Template for the `index`th member of `group`.
    pub fn template(&self, group: ItemGroup, index: u16) -> Result<&ItemTemplate, ItemError> {
        self.templates.resolve(group, index)
    }

    pub fn item_template(&self, item: &ItemInstance) -> Result<&ItemTemplate, ItemError> {
        self.template(item.group, item.group_index)
    }

    pub fn item_hands(&self, item: &ItemInstance) -> Result<ItemHands, ItemError> {
        if !item.group.is_weapon_or_armor() {
            return Ok(ItemHands::None);
        }
        Ok(self
            .templates
            .ordinal(item.group, item.group_index)?
            .map(|ordinal| equip::item_hands(item.group, ordinal))
            .unwrap_or_default())
    }

    pub fn resolve_name(&self, item: &ItemInstance) -> Result<String, ItemError> {
        let template = self.item_template(item)?;
        Ok(names::resolve_name(item, template, self.text.as_ref()))
    }

    pub fn metal_type(&self, item: &ItemInstance) -> MetalType {
        metal::classify(item.group, item.material)
    }

    /// Slot of the item in a legacy equip table, if any.
    pub fn legacy_equip_index(&self, item: &ItemInstance, legacy_equip_table: &[u32]) -> Option<usize> {
        equip::find_equip_slot(item.legacy_record_id, legacy_equip_table)
    }

    /// Dyed inventory image for `item`, loaded and processed at most once per
    /// distinct key. `variant` selects an alternate record following the
    /// item's own (hood up/down, left/right hand).
    pub fn item_image(
        &mut self,
        item: &ItemInstance,
        variant: u8,
        remove_mask: bool,
    ) -> Result<Arc<ImageEntry>, ItemError> {
        let key = ImageKey::for_item(item, variant, remove_mask)?;
        let textures = &self.textures;

        self.item_images.get_or_create(key, || {
            // In range after key validation.
            let record = item.player_texture_record + variant as u16;
            let mut raw = textures.load_raw_image(item.player_texture_archive, record, 0)?;
            if remove_mask {
                dye::remove_mask(&mut raw);
            }
            Ok(dye::recolor_for_group(raw, item.color, item.group, textures.palette()))
        })
    }

    /// Item image with mask pixels painted `mask_color`. Built from the
    /// cached base image; the result itself is not cached.
    pub fn item_image_with_mask_color(
        &mut self,
        item: &ItemInstance,
        mask_color: Rgba,
        variant: u8,
    ) -> Result<ImageEntry, ItemError> {
        let base = self.item_image(item, variant, false)?;
        Ok(dye::with_mask_color(&base, self.textures.palette(), mask_color))
    }

    pub fn container_image(&mut self, container: ContainerType) -> Result<Arc<ImageEntry>, ItemError> {
        let textures = &self.textures;
        self.container_images.get_or_create(container, || {
            let raw = textures.load_container_icon(container.into())?;
            Ok(dye::prepare_surface(raw, textures.palette()))
        })
    }

    /// Interior artwork for formal and casual cloaks. Anything else, or
    /// missing artwork, yields the empty image. Never cached.
    pub fn cloak_interior_image(&self, item: &ItemInstance) -> Result<ImageEntry, ItemError> {
        if !item.group.is_clothing() {
            return Ok(ImageEntry::empty());
        }
        match self.templates.ordinal(item.group, item.group_index)? {
            Some(ordinal) if CLOAK_ORDINALS.contains(&ordinal) => {}
            _ => return Ok(ImageEntry::empty()),
        }

        let record = self.item_template(item)?.player_texture_record;
        let raw = match self
            .textures
            .load_raw_image(item.player_texture_archive, record, 0)
        {
            Ok(raw) => raw,
            Err(err @ TextureError::NotFound { .. }) => {
                warn!("No cloak interior for {:?} index {}: {}", item.group, item.group_index, err);
                return Ok(ImageEntry::empty());
            }
            Err(err) => return Err(err.into()),
        };

        debug!(
            "Built cloak interior from archive {} record {}",
            item.player_texture_archive, record
        );
        Ok(dye::recolor(raw, item.color, DyeTarget::Clothing, self.textures.palette()))
    }
}
