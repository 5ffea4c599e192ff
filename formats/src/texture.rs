use bincode::{Decode, Encode};

use crate::bitmap::IndexedBitmap;

/// A texture archive: a list of records, each with one or more frames.
/// Stored in game archives as `textures/texture.NNN.bin`.
#[derive(Clone, Debug, Default, Encode, Decode)]
pub struct TextureFile {
    pub records: Vec<TextureRecord>,
}

#[derive(Clone, Debug, Default, Encode, Decode)]
pub struct TextureRecord {
    pub offset_x: i16,
    pub offset_y: i16,
    pub frames: Vec<IndexedBitmap>,
}

impl TextureFile {
    /// Archive path of texture archive `archive`.
    pub fn path(archive: u16) -> String {
        format!("textures/texture.{:03}.bin", archive)
    }

    pub fn frame(&self, record: u16, frame: u16) -> Option<&IndexedBitmap> {
        self.records
            .get(record as usize)?
            .frames
            .get(frame as usize)
    }

    pub fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let (file, _) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(file)
    }

    pub fn encode(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::encode_to_vec(self, bincode::config::standard())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        assert_eq!(TextureFile::path(7), "textures/texture.007.bin");
        assert_eq!(TextureFile::path(245), "textures/texture.245.bin");
    }

    #[test]
    fn test_frame_lookup() {
        let file = TextureFile {
            records: vec![
                TextureRecord::default(),
                TextureRecord {
                    offset_x: 3,
                    offset_y: -2,
                    frames: vec![IndexedBitmap::new(1, 2, vec![5, 6])],
                },
            ],
        };

        let bytes = file.encode().unwrap();
        let decoded = TextureFile::decode(&bytes).unwrap();

        assert_eq!(decoded.frame(1, 0).map(|b| b.data.clone()), Some(vec![5, 6]));
        assert!(decoded.frame(0, 0).is_none());
        assert!(decoded.frame(1, 1).is_none());
        assert!(decoded.frame(9, 0).is_none());
    }
}
