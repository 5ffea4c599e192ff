pub mod bitmap;
pub mod game_files;
pub mod texture;

pub use bitmap::{IndexedBitmap, MASK_INDEX, Palette, Rgba, RgbaSurface, TRANSPARENT_INDEX};
pub use texture::{TextureFile, TextureRecord};
