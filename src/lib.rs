//! Item presentation services: template lookup, display names, metal
//! classification and dyed, cached item images.

pub mod dye;
pub mod equip;
pub mod error;
pub mod image_cache;
pub mod image_key;
pub mod item;
pub mod metal;
pub mod names;
pub mod registry;
pub mod services;
pub mod settings;
pub mod templates;
pub mod texture_source;

pub use error::ItemError;
pub use image_cache::{ImageCache, ImageEntry};
pub use image_key::{ImageKey, KeyField};
pub use item::ItemInstance;
pub use names::{EnglishTextProvider, TextProvider};
pub use registry::EnumRegistry;
pub use services::ItemServices;
pub use settings::{CacheSettings, ServicesSettings};
pub use templates::{ItemTemplate, TemplateIndex};
pub use texture_source::{ArxTextureSource, TextureError, TextureSource};
