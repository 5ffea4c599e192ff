use crate::{bitmap::Palette, texture::TextureFile};

/// Archive path of the art palette used for inventory images.
pub const ART_PALETTE_PATH: &str = "textures/art_pal.col";
/// Archive path of the container icon texture file.
pub const CONTAINER_ICONS_PATH: &str = "textures/inve16i0.cif.bin";

#[derive(Clone)]
pub struct ArxArchive {
    archive: std::sync::Arc<libarx::Arx>,
}

impl ArxArchive {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ArxError> {
        use std::sync::Arc;

        let archive =
            libarx::Arx::new(path).map_err(|e| ArxError::ArchiveError(e.to_string()))?;
        Ok(Self {
            archive: Arc::new(archive),
        })
    }

    pub fn get_file(&self, path: &str) -> Result<Vec<u8>, ArxError> {
        use jubako as jbk;
        use libarx::{self as arx, FullBuilder};
        use std::io::Read;

        if let Ok(arx::Entry::File(content_address)) =
            self.archive.get_entry::<FullBuilder>(arx::Path::new(path))
        {
            if let jbk::Result::Ok(Some(jbk::reader::MayMissPack::FOUND(Some(bytes)))) =
                self.archive.get_bytes(content_address.content())
            {
                let mut buf = vec![];
                bytes.stream().read_to_end(&mut buf)?;
                return Ok(buf);
            }
        }

        Err(ArxError::FileNotFound(path.to_string()))
    }

    pub fn get_texture_file(&self, path: &str) -> Result<TextureFile, ArxError> {
        let bytes = self.get_file(path)?;
        TextureFile::decode(&bytes).map_err(|e| ArxError::DecodeError(format!("{}: {}", path, e)))
    }

    pub fn get_palette(&self, path: &str) -> Result<Palette, ArxError> {
        let bytes = self.get_file(path)?;
        Palette::read_col(&mut bytes.as_slice())
            .map_err(|e| ArxError::DecodeError(format!("{}: {}", path, e)))
    }
}

#[derive(Debug, Clone)]
pub enum ArxError {
    FileNotFound(String),
    IoError(String),
    ArchiveError(String),
    DecodeError(String),
}

impl std::fmt::Display for ArxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArxError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ArxError::IoError(err) => write!(f, "IO error: {}", err),
            ArxError::ArchiveError(msg) => write!(f, "Archive error: {}", msg),
            ArxError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ArxError {}

impl From<std::io::Error> for ArxError {
    fn from(err: std::io::Error) -> Self {
        ArxError::IoError(err.to_string())
    }
}
