use bincode::{Decode, Encode};
use byteorder::{LE, ReadBytesExt};
use std::io::Read;

pub type Rgba = [u8; 4];

/// Palette index that is always fully transparent.
pub const TRANSPARENT_INDEX: u8 = 0;
/// Palette index marking the mask region (e.g. the face opening of a helmet).
pub const MASK_INDEX: u8 = 0xFF;

const PALETTE_SIZE: usize = 256;
/// Total byte length of a classic `.COL` palette file, header included.
const COL_FILE_LEN: u32 = 776;

/// Palettized bitmap, one byte per pixel, rows top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct IndexedBitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl IndexedBitmap {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height) as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Expands the bitmap to RGBA8. Index 0 is transparent and the mask
    /// index is painted with `mask_color`.
    pub fn to_rgba(&self, palette: &Palette, mask_color: Rgba) -> RgbaSurface {
        let pixels = self
            .data
            .iter()
            .flat_map(|&idx| match idx {
                TRANSPARENT_INDEX => [0, 0, 0, 0],
                MASK_INDEX => mask_color,
                _ => palette.color(idx),
            })
            .collect();

        RgbaSurface {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// 256 entry colour table. Alpha is always opaque; transparency is decided
/// by index when a bitmap is expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba; PALETTE_SIZE],
}

impl Palette {
    /// Builds a palette from 256 packed RGB triples.
    pub fn from_rgb(rgb: &[u8]) -> anyhow::Result<Self> {
        if rgb.len() != PALETTE_SIZE * 3 {
            anyhow::bail!(
                "Palette needs {} bytes of RGB data, got {}",
                PALETTE_SIZE * 3,
                rgb.len()
            );
        }

        let mut colors = [[0, 0, 0, 255]; PALETTE_SIZE];
        for (color, triple) in colors.iter_mut().zip(rgb.chunks_exact(3)) {
            *color = [triple[0], triple[1], triple[2], 255];
        }
        Ok(Self { colors })
    }

    /// Reads a classic `.COL` palette: an 8 byte header (file length and
    /// version) followed by 256 RGB triples.
    pub fn read_col<R: Read>(reader: &mut R) -> anyhow::Result<Self> {
        let file_len = reader.read_u32::<LE>()?;
        let _version = reader.read_u32::<LE>()?;
        if file_len != COL_FILE_LEN {
            anyhow::bail!("Unexpected COL file length: {}", file_len);
        }

        let mut rgb = vec![0u8; PALETTE_SIZE * 3];
        reader.read_exact(&mut rgb)?;
        Self::from_rgb(&rgb)
    }

    /// Palette where every index maps to the grey level of the same value.
    pub fn grayscale() -> Self {
        let mut colors = [[0, 0, 0, 255]; PALETTE_SIZE];
        for (i, color) in colors.iter_mut().enumerate() {
            *color = [i as u8, i as u8, i as u8, 255];
        }
        Self { colors }
    }

    pub fn color(&self, index: u8) -> Rgba {
        self.colors[index as usize]
    }
}

/// Displayable RGBA8 pixels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RgbaSurface {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaSurface {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = ((y * self.width + x) * 4) as usize;
        self.pixels
            .get(start..start + 4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}
