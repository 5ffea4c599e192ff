//! Where raw item bitmaps come from.

use formats::{
    IndexedBitmap, Palette, TextureFile,
    game_files::{ART_PALETTE_PATH, ArxArchive, ArxError, CONTAINER_ICONS_PATH},
};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    NotFound {
        archive: u16,
        record: u16,
        frame: u16,
    },
    ContainerIconNotFound(u16),
    Archive(String),
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::NotFound {
                archive,
                record,
                frame,
            } => write!(
                f,
                "{} record {} frame {} not found",
                TextureFile::path(*archive),
                record,
                frame
            ),
            TextureError::ContainerIconNotFound(record) => {
                write!(f, "{} record {} not found", CONTAINER_ICONS_PATH, record)
            }
            TextureError::Archive(msg) => write!(f, "Archive error: {}", msg),
        }
    }
}

impl std::error::Error for TextureError {}

/// Supplies raw palettized images and the palette used to display them.
pub trait TextureSource {
    fn palette(&self) -> &Palette;

    fn load_raw_image(
        &self,
        archive: u16,
        record: u16,
        frame: u16,
    ) -> Result<IndexedBitmap, TextureError>;

    fn load_container_icon(&self, record: u16) -> Result<IndexedBitmap, TextureError>;
}

/// Texture source reading bincode texture files out of an `.arx` archive.
pub struct ArxTextureSource {
    archive: ArxArchive,
    palette: Palette,
}

impl ArxTextureSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ArxError> {
        let archive = ArxArchive::new(path.as_ref())?;
        let palette = archive.get_palette(ART_PALETTE_PATH)?;
        info!("Opened texture archive {:?}", path.as_ref());
        Ok(Self { archive, palette })
    }

    fn load_texture_file(&self, path: &str) -> Result<Option<TextureFile>, TextureError> {
        match self.archive.get_texture_file(path) {
            Ok(file) => Ok(Some(file)),
            Err(ArxError::FileNotFound(_)) => Ok(None),
            Err(e) => Err(TextureError::Archive(e.to_string())),
        }
    }
}

impl TextureSource for ArxTextureSource {
    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn load_raw_image(
        &self,
        archive: u16,
        record: u16,
        frame: u16,
    ) -> Result<IndexedBitmap, TextureError> {
        self.load_texture_file(&TextureFile::path(archive))?
            .and_then(|file| file.frame(record, frame).cloned())
            .ok_or(TextureError::NotFound {
                archive,
                record,
                frame,
            })
    }

    fn load_container_icon(&self, record: u16) -> Result<IndexedBitmap, TextureError> {
        self.load_texture_file(CONTAINER_ICONS_PATH)?
            .and_then(|file| file.frame(record, 0).cloned())
            .ok_or(TextureError::ContainerIconNotFound(record))
    }
}
