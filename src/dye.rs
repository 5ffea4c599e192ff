//! Palette index remapping for dyed items and surface preparation.
//!
//! Dyeable art reserves a 16 entry band of palette indices: 0x60..0x70 for
//! clothing and 0x70..0x80 for weapons and armor. A dye rewrites the band
//! onto another 16 entry ramp. The two targets use different ramps for the
//! same dye to stay compatible with classic art.

use formats::{IndexedBitmap, MASK_INDEX, Palette, Rgba, TRANSPARENT_INDEX};
use game_types::{DyeColor, DyeTarget, ItemGroup};
use tracing::{debug, warn};

use crate::image_cache::ImageEntry;

const BAND_LEN: u8 = 16;
const CLOTHING_BAND: u8 = 0x60;
const METAL_BAND: u8 = 0x70;

/// Mask pixels are transparent unless a caller supplies a colour.
const DEFAULT_MASK_COLOR: Rgba = [0, 0, 0, 0];

/// Ramp a clothing dye maps the band onto. Blue is the authored colour.
fn clothing_ramp(dye: DyeColor) -> Option<u8> {
    match dye {
        DyeColor::Grey => Some(0x30),
        DyeColor::Red => Some(0x80),
        DyeColor::DarkBrown => Some(0x90),
        DyeColor::Purple => Some(0xA0),
        DyeColor::LightBrown => Some(0xB0),
        DyeColor::White => Some(0x20),
        DyeColor::Aquamarine => Some(0xC0),
        DyeColor::Yellow => Some(0xD0),
        DyeColor::Green => Some(0x40),
        _ => None,
    }
}

/// Ramp a metal dye maps the band onto. Iron is the authored colour.
fn metal_ramp(dye: DyeColor) -> Option<u8> {
    match dye {
        DyeColor::Steel => Some(0x80),
        DyeColor::Chain => Some(0x90),
        DyeColor::Silver => Some(0xA0),
        DyeColor::Elven => Some(0xB0),
        DyeColor::Dwarven => Some(0xC0),
        DyeColor::Mithril => Some(0xD0),
        DyeColor::Adamantium => Some(0xE0),
        DyeColor::Ebony => Some(0x40),
        DyeColor::Orcish => Some(0x30),
        DyeColor::Daedric => Some(0x20),
        _ => None,
    }
}

/// Full 256 entry index substitution table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DyeSwaps([u8; 256]);

impl DyeSwaps {
    pub fn identity() -> Self {
        let mut swaps = [0u8; 256];
        for (i, s) in swaps.iter_mut().enumerate() {
            *s = i as u8;
        }
        Self(swaps)
    }

    pub fn for_dye(dye: DyeColor, target: DyeTarget) -> Self {
        let (band, ramp) = match target {
            DyeTarget::Clothing => (CLOTHING_BAND, clothing_ramp(dye)),
            DyeTarget::WeaponsAndArmor => (METAL_BAND, metal_ramp(dye)),
        };

        let mut swaps = Self::identity();
        if let Some(ramp) = ramp {
            for i in 0..BAND_LEN {
                swaps.0[(band + i) as usize] = ramp + i;
            }
        }
        swaps
    }

    /// Table for a raw colour value. Values that are not a known dye leave
    /// the image unchanged.
    pub fn for_color(color: u8, target: DyeTarget) -> Self {
        match DyeColor::try_from(color) {
            Ok(dye) => Self::for_dye(dye, target),
            Err(_) => {
                warn!("Unknown dye colour {} for {:?}, leaving image undyed", color, target);
                Self::identity()
            }
        }
    }

    pub fn get(&self, index: u8) -> u8 {
        self.0[index as usize]
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, s)| *s == i as u8)
    }

    pub fn apply(&self, bitmap: &mut IndexedBitmap) {
        for idx in bitmap.data.iter_mut() {
            *idx = self.0[*idx as usize];
        }
    }
}

/// Rewrites mask pixels to transparent.
pub fn remove_mask(bitmap: &mut IndexedBitmap) {
    for idx in bitmap.data.iter_mut() {
        if *idx == MASK_INDEX {
            *idx = TRANSPARENT_INDEX;
        }
    }
}

/// Builds the displayable surface for an already processed bitmap.
pub fn prepare_surface(bitmap: IndexedBitmap, palette: &Palette) -> ImageEntry {
    let surface = bitmap.to_rgba(palette, DEFAULT_MASK_COLOR);
    ImageEntry { bitmap, surface }
}

/// Applies the dye remap for `target` and prepares the surface.
pub fn recolor(mut raw: IndexedBitmap, color: u8, target: DyeTarget, palette: &Palette) -> ImageEntry {
    DyeSwaps::for_color(color, target).apply(&mut raw);
    prepare_surface(raw, palette)
}

/// Recolors according to the item group. Groups that are never dyed are
/// passed through with surface preparation only.
pub fn recolor_for_group(
    raw: IndexedBitmap,
    color: u8,
    group: ItemGroup,
    palette: &Palette,
) -> ImageEntry {
    match DyeTarget::for_group(group) {
        Some(target) => recolor(raw, color, target, palette),
        None => {
            debug!("{:?} items are not dyed", group);
            prepare_surface(raw, palette)
        }
    }
}

/// Re-materializes `base` with mask pixels painted `mask_color`. The bitmap
/// is shared with the base image; only the surface differs.
pub fn with_mask_color(base: &ImageEntry, palette: &Palette, mask_color: Rgba) -> ImageEntry {
    ImageEntry {
        bitmap: base.bitmap.clone(),
        surface: base.bitmap.to_rgba(palette, mask_color),
    }
}
