//! Bounded LRU of synthesized catalogs.
//!
//! Identical (room, preferred colors) inputs return the same catalog until
//! the entry is evicted. Color order and repeats do not affect the key.

use std::num::NonZeroUsize;
use std::sync::Arc;

use blake3::Hasher;
use lru::LruCache;
use serde::Serialize;
use tracing::debug;

use super::Catalog;
use crate::domain::listing::{Color, Room};

pub const DEFAULT_CACHE_CAPACITY: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CatalogKey([u8; 32]);

impl CatalogKey {
    pub fn new(room: Room, preferred: &[Color]) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(room.name().as_bytes());
        hasher.update(b"|");
        for (index, color) in canonical_colors(preferred).iter().enumerate() {
            if index > 0 {
                hasher.update(b",");
            }
            hasher.update(color.name().as_bytes());
        }
        Self(*hasher.finalize().as_bytes())
    }

    pub fn to_hex(&self) -> String {
        blake3::Hash::from(self.0).to_hex().to_string()
    }
}

/// Sorted and deduplicated copy of `preferred`.
pub fn canonical_colors(preferred: &[Color]) -> Vec<Color> {
    let mut colors = preferred.to_vec();
    colors.sort();
    colors.dedup();
    colors
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

pub struct CatalogCache {
    entries: LruCache<CatalogKey, Arc<Catalog>>,
    hits: u64,
    misses: u64,
}

impl CatalogCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { entries: LruCache::new(capacity), hits: 0, misses: 0 }
    }

    /// Returns the cached catalog for `key`, or builds, stores and returns
    /// a fresh one. Storing at capacity evicts the least recently used entry.
    pub fn get_or_synthesize<F>(&mut self, key: CatalogKey, synthesize: F) -> Arc<Catalog>
    where
        F: FnOnce() -> Catalog,
    {
        if let Some(catalog) = self.entries.get(&key) {
            self.hits += 1;
            debug!(event_name = "catalog.cache.hit", key = %key.to_hex(), "catalog cache hit");
            return Arc::clone(catalog);
        }

        self.misses += 1;
        let catalog = Arc::new(synthesize());
        if let Some((evicted, _)) = self.entries.push(key, Arc::clone(&catalog)) {
            if evicted != key {
                debug!(
                    event_name = "catalog.cache.evicted",
                    key = %evicted.to_hex(),
                    "evicted least recently used catalog"
                );
            }
        }
        debug!(
            event_name = "catalog.cache.miss",
            key = %key.to_hex(),
            rows = catalog.len(),
            "catalog cache miss"
        );
        catalog
    }

    pub fn contains(&self, key: &CatalogKey) -> bool {
        self.entries.contains(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
            capacity: self.entries.cap().get(),
        }
    }
}

impl std::fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogCache").field("stats", &self.stats()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogOrigin;

    fn empty_catalog(room: Room) -> Catalog {
        Catalog::new(room, CatalogOrigin::RoomSeeds, Vec::new())
    }

    fn cache(capacity: usize) -> CatalogCache {
        CatalogCache::new(NonZeroUsize::new(capacity).expect("non-zero capacity"))
    }

    #[test]
    fn key_ignores_color_order_and_repeats() {
        let a = CatalogKey::new(Room::Bedroom, &[Color::Wood, Color::Blue]);
        let b = CatalogKey::new(Room::Bedroom, &[Color::Blue, Color::Wood, Color::Blue]);
        assert_eq!(a, b);
        assert_ne!(a, CatalogKey::new(Room::Kitchen, &[Color::Blue, Color::Wood]));
        assert_ne!(a, CatalogKey::new(Room::Bedroom, &[Color::Blue]));
        assert_eq!(a.to_hex().len(), 64);
    }

    #[test]
    fn repeated_lookup_returns_the_same_catalog() {
        let mut cache = cache(4);
        let key = CatalogKey::new(Room::Office, &[Color::Green, Color::Gold]);

        let first = cache.get_or_synthesize(key, || empty_catalog(Room::Office));
        let second = cache.get_or_synthesize(
            CatalogKey::new(Room::Office, &[Color::Gold, Color::Green]),
            || panic!("cached entry must be reused"),
        );

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, entries: 1, capacity: 4 });
    }

    #[test]
    fn full_cache_evicts_least_recently_used() {
        let mut cache = cache(2);
        let bedroom = CatalogKey::new(Room::Bedroom, &[]);
        let kitchen = CatalogKey::new(Room::Kitchen, &[]);
        let office = CatalogKey::new(Room::Office, &[]);

        cache.get_or_synthesize(bedroom, || empty_catalog(Room::Bedroom));
        cache.get_or_synthesize(kitchen, || empty_catalog(Room::Kitchen));
        cache.get_or_synthesize(bedroom, || empty_catalog(Room::Bedroom));
        cache.get_or_synthesize(office, || empty_catalog(Room::Office));

        assert!(cache.contains(&bedroom));
        assert!(!cache.contains(&kitchen));
        assert!(cache.contains(&office));
        assert_eq!(cache.len(), 2);
    }
}
