use game_types::ItemGroup;

use crate::{image_key::KeyField, texture_source::TextureError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// The enumeration registry has no ordinal table for this group.
    UnmappedGroup(ItemGroup),
    /// The texture source could not supply a required image.
    MissingAsset(TextureError),
    /// An item attribute does not fit its image key field.
    KeyFieldOverflow { field: KeyField, value: u32 },
}

impl std::fmt::Display for ItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemError::UnmappedGroup(group) => {
                write!(f, "Item group not found in enumeration registry: {:?}", group)
            }
            ItemError::MissingAsset(err) => write!(f, "Could not load image data: {}", err),
            ItemError::KeyFieldOverflow { field, value } => write!(
                f,
                "Image key field {:?} out of range: {} (max {})",
                field,
                value,
                field.max()
            ),
        }
    }
}

impl std::error::Error for ItemError {}

impl From<TextureError> for ItemError {
    fn from(err: TextureError) -> Self {
        ItemError::MissingAsset(err)
    }
}
