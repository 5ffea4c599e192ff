//! Memoized, fully processed item images.

use formats::{IndexedBitmap, RgbaSurface};
use rustc_hash::FxHashMap;
use std::{collections::hash_map::Entry, fmt::Debug, hash::Hash, sync::Arc};
use tracing::{debug, warn};

/// A processed image: the final palette indices plus the displayable surface
/// built from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageEntry {
    pub bitmap: IndexedBitmap,
    pub surface: RgbaSurface,
}

impl ImageEntry {
    /// The sentinel returned where no image applies.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmap.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height
    }
}

/// Insert-only image store. Each key is produced at most once and its entry
/// never changes afterwards; a different appearance needs a different key.
///
/// Entries are never evicted. When `warn_threshold` is set, crossing it is
/// logged once so unexpected growth shows up in the logs.
pub struct ImageCache<K> {
    name: &'static str,
    entries: FxHashMap<K, Arc<ImageEntry>>,
    warn_threshold: Option<usize>,
    warned: bool,
}

impl<K: Copy + Eq + Hash + Debug> ImageCache<K> {
    pub fn new(name: &'static str) -> Self {
        Self::with_warn_threshold(name, None)
    }

    pub fn with_warn_threshold(name: &'static str, warn_threshold: Option<usize>) -> Self {
        Self {
            name,
            entries: FxHashMap::default(),
            warn_threshold,
            warned: false,
        }
    }

    pub fn get(&self, key: &K) -> Option<Arc<ImageEntry>> {
        self.entries.get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry for `key`, running `producer` only on a miss. A
    /// failed producer stores nothing, so the next request retries.
    pub fn get_or_create<E, F>(&mut self, key: K, producer: F) -> Result<Arc<ImageEntry>, E>
    where
        F: FnOnce() -> Result<ImageEntry, E>,
    {
        let entry = match self.entries.entry(key) {
            Entry::Occupied(hit) => return Ok(hit.get().clone()),
            Entry::Vacant(miss) => {
                debug!("{} cache miss for {:?}", self.name, key);
                miss.insert(Arc::new(producer()?)).clone()
            }
        };

        self.check_growth();
        Ok(entry)
    }

    fn check_growth(&mut self) {
        if let Some(threshold) = self.warn_threshold {
            if !self.warned && self.entries.len() > threshold {
                self.warned = true;
                warn!(
                    "{} cache holds {} entries (threshold {}); entries are never evicted",
                    self.name,
                    self.entries.len(),
                    threshold
                );
            }
        }
    }
}
