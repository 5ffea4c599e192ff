use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesSettings {
    /// Template database (JSON array ordered by template ordinal).
    pub templates_path: PathBuf,
    /// Archive the texture source reads item art from.
    pub archive_path: PathBuf,
    pub cache: CacheSettings,
}

impl Default for ServicesSettings {
    fn default() -> Self {
        Self {
            templates_path: PathBuf::from("ItemTemplates.json"),
            archive_path: PathBuf::from("data.arx"),
            cache: CacheSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Item image count past which a single warning is logged. Entries are
    /// never evicted.
    pub item_warn_threshold: Option<usize>,
}

impl ServicesSettings {
    /// Loads settings from `path`, falling back to defaults if the file is
    /// missing or invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No settings at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ServicesSettings>(&content) {
                Ok(s) => {
                    info!("Loaded settings from {:?}", path);
                    s
                }
                Err(e) => {
                    error!("Failed to parse {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        fs::write(path.as_ref(), toml::to_string_pretty(self)?)?;
        info!("Saved settings to {:?}", path.as_ref());
        Ok(())
    }
}
