pub mod cache;
pub mod seeds;
pub mod synthesizer;

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::listing::{CatalogRow, Room};

pub use cache::{CacheStats, CatalogCache, CatalogKey};
pub use synthesizer::{synthesize, SynthesisSettings};

/// Where the synthesizer took its seed items from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrigin {
    RoomSeeds,
    CrossRoomSample,
}

/// One synthesized catalog. Titles are unique within a catalog.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Catalog {
    room: Room,
    origin: CatalogOrigin,
    rows: Vec<CatalogRow>,
}

impl Catalog {
    /// Builds a catalog, keeping the first row for every repeated title.
    pub fn new(room: Room, origin: CatalogOrigin, rows: Vec<CatalogRow>) -> Self {
        let mut seen = HashSet::new();
        let rows = rows.into_iter().filter(|row| seen.insert(row.title().to_string())).collect();
        Self { room, origin, rows }
    }

    pub fn room(&self) -> Room {
        self.room
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find(&self, title: &str) -> Option<&CatalogRow> {
        self.rows.iter().find(|row| row.title() == title)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::row;
    use super::*;
    use crate::domain::listing::Source;

    #[test]
    fn construction_drops_repeated_titles() {
        let catalog = Catalog::new(
            Room::Bedroom,
            CatalogOrigin::RoomSeeds,
            vec![
                row("Modern White Bed", 100, Source::Ikea, "Bed"),
                row("Modern White Bed", 250, Source::Amazon, "Bed"),
                row("Boho Wood Shelf", 80, Source::Flipkart, "Shelf"),
            ],
        );

        assert_eq!(catalog.len(), 2);
        let kept = catalog.find("Modern White Bed").expect("first occurrence is kept");
        assert_eq!(kept.listing.source, Source::Ikea);
    }
}
