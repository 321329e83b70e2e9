//! Pseudo-catalog synthesis.
//!
//! Listings are recombined from seed items: the price comes from a seed,
//! while style, color, category and store are drawn independently, so a
//! title need not describe the seed it was priced from.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::seeds::{cross_room_sample, seeds_for};
use super::{Catalog, CatalogOrigin};
use crate::domain::listing::{CatalogRow, Color, ProductListing, Room, Source, Style};
use crate::errors::DomainError;

pub const DEFAULT_LISTINGS_PER_ROOM: usize = 50;
pub const DEFAULT_PRICE_MULTIPLIER_MIN: f64 = 0.7;
pub const DEFAULT_PRICE_MULTIPLIER_MAX: f64 = 1.5;

pub const REVIEW_COUNT_RANGE: RangeInclusive<u32> = 800..=3_000;
pub const PURCHASE_COUNT_RANGE: RangeInclusive<u32> = 1_500..=8_000;
pub const RATING_RANGE: RangeInclusive<f64> = 4.5..=4.9;
pub const BASE_SCORE_RANGE: RangeInclusive<f64> = 0.7..=0.95;

const NEUTRAL_PALETTE: &str = "Neutral";

/// Draw parameters for [`synthesize`]. Built through [`SynthesisSettings::new`]
/// so the multiplier range is always non-empty and finite.
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisSettings {
    listings_per_room: usize,
    price_multiplier_min: f64,
    price_multiplier_max: f64,
}

impl SynthesisSettings {
    pub fn new(
        listings_per_room: usize,
        price_multiplier_min: f64,
        price_multiplier_max: f64,
    ) -> Result<Self, DomainError> {
        if !price_multiplier_min.is_finite() || price_multiplier_min <= 0.0 {
            return Err(DomainError::InvariantViolation(format!(
                "price multiplier minimum must be a positive finite number, got {price_multiplier_min}"
            )));
        }
        if !price_multiplier_max.is_finite() || price_multiplier_min > price_multiplier_max {
            return Err(DomainError::InvariantViolation(format!(
                "price multiplier range {price_multiplier_min}..={price_multiplier_max} is empty"
            )));
        }
        Ok(Self { listings_per_room, price_multiplier_min, price_multiplier_max })
    }

    pub fn listings_per_room(&self) -> usize {
        self.listings_per_room
    }

    pub fn price_multipliers(&self) -> RangeInclusive<f64> {
        self.price_multiplier_min..=self.price_multiplier_max
    }
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            listings_per_room: DEFAULT_LISTINGS_PER_ROOM,
            price_multiplier_min: DEFAULT_PRICE_MULTIPLIER_MIN,
            price_multiplier_max: DEFAULT_PRICE_MULTIPLIER_MAX,
        }
    }
}

/// Synthesizes a catalog for `room`. Colors are drawn from `preferred`, or
/// from the full palette when it is empty.
pub fn synthesize<R: Rng + ?Sized>(
    room: Room,
    preferred: &[Color],
    settings: &SynthesisSettings,
    rng: &mut R,
) -> Catalog {
    let room_seeds = seeds_for(room);
    let (seeds, origin) = if room_seeds.is_empty() {
        warn!(
            event_name = "catalog.synthesis.cross_room_fallback",
            room = %room,
            "room has no seed items, sampling across rooms"
        );
        (cross_room_sample(), CatalogOrigin::CrossRoomSample)
    } else {
        (room_seeds, CatalogOrigin::RoomSeeds)
    };

    let colors: &[Color] = if preferred.is_empty() { &Color::PALETTE } else { preferred };
    let categories = room.categories();
    let styles = Style::ALL;
    let sources = Source::ALL;
    let multiplier = settings.price_multipliers();

    let mut rows = Vec::with_capacity(settings.listings_per_room());
    for _ in 0..settings.listings_per_room() {
        let Some(seed) = seeds.choose(rng) else { break };
        let (Some(color), Some(style), Some(category), Some(source)) = (
            colors.choose(rng),
            styles.choose(rng),
            categories.choose(rng),
            sources.choose(rng),
        ) else {
            break;
        };

        let factor = Decimal::from_f64(rng.gen_range(multiplier.clone())).unwrap_or(Decimal::ONE);
        let price = (Decimal::new(seed.price, 0) * factor).round_dp(2);
        let palette = preferred.choose(rng).map(Color::name).unwrap_or(NEUTRAL_PALETTE);

        rows.push(CatalogRow {
            listing: ProductListing {
                title: format!("{style} {color} {category} - Matches {palette} Palette"),
                price,
                url: seed.url.to_string(),
                image_url: seed.image_url.to_string(),
                source: *source,
                category: (*category).to_string(),
                room,
                color: *color,
                style: *style,
            },
            review_count: rng.gen_range(REVIEW_COUNT_RANGE),
            purchase_count: rng.gen_range(PURCHASE_COUNT_RANGE),
            rating: round_to(rng.gen_range(RATING_RANGE), 1),
            base_score: round_to(rng.gen_range(BASE_SCORE_RANGE), 3),
        });
    }

    let catalog = Catalog::new(room, origin, rows);
    debug!(
        event_name = "catalog.synthesis.completed",
        room = %room,
        rows = catalog.len(),
        "synthesized catalog"
    );
    catalog
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::seeds::SEED_LISTINGS;

    fn catalog_for(room: Room, preferred: &[Color], seed: u64) -> Catalog {
        let mut rng = StdRng::seed_from_u64(seed);
        synthesize(room, preferred, &SynthesisSettings::default(), &mut rng)
    }

    #[test]
    fn rows_stay_inside_documented_ranges() {
        let catalog = catalog_for(Room::Bedroom, &[], 7);
        assert!(!catalog.is_empty());
        assert!(catalog.len() <= DEFAULT_LISTINGS_PER_ROOM);

        let max_seed = SEED_LISTINGS.iter().map(|seed| seed.price).max().unwrap_or(0);
        let ceiling = Decimal::new(max_seed, 0) * Decimal::new(15, 1);
        for row in catalog.rows() {
            assert!(REVIEW_COUNT_RANGE.contains(&row.review_count));
            assert!(PURCHASE_COUNT_RANGE.contains(&row.purchase_count));
            assert!(RATING_RANGE.contains(&row.rating));
            assert!(BASE_SCORE_RANGE.contains(&row.base_score));
            assert!(row.listing.price > Decimal::ZERO);
            assert!(row.listing.price <= ceiling);
            assert!(row.listing.price.scale() <= 2);
            assert_eq!(row.listing.room, Room::Bedroom);
            assert!(Room::Bedroom.categories().contains(&row.listing.category.as_str()));
        }
    }

    #[test]
    fn titles_are_unique() {
        let catalog = catalog_for(Room::LivingRoom, &[Color::Blue, Color::Gold], 11);
        let titles: HashSet<&str> = catalog.rows().iter().map(|row| row.title()).collect();
        assert_eq!(titles.len(), catalog.len());
    }

    #[test]
    fn preferred_colors_constrain_listing_colors_and_palette_label() {
        let preferred = [Color::Blue, Color::Wood];
        let catalog = catalog_for(Room::Kitchen, &preferred, 3);

        for row in catalog.rows() {
            assert!(preferred.contains(&row.listing.color));
            assert!(
                row.title().ends_with("Matches Blue Palette")
                    || row.title().ends_with("Matches Wood Palette"),
                "unexpected title {}",
                row.title()
            );
        }
    }

    #[test]
    fn no_preference_uses_neutral_label() {
        let catalog = catalog_for(Room::Bathroom, &[], 5);
        assert!(catalog.rows().iter().all(|row| row.title().ends_with("Matches Neutral Palette")));
    }

    #[test]
    fn rooms_without_seeds_use_cross_room_sample() {
        let catalog = catalog_for(Room::Balcony, &[], 9);

        assert_eq!(catalog.origin(), CatalogOrigin::CrossRoomSample);
        assert_eq!(catalog.room(), Room::Balcony);
        assert!(!catalog.is_empty());
        assert!(catalog.rows().iter().all(|row| row.listing.room == Room::Balcony));
    }

    #[test]
    fn same_seed_reproduces_catalog() {
        assert_eq!(catalog_for(Room::Office, &[Color::Green], 42), catalog_for(Room::Office, &[Color::Green], 42));
    }

    #[test]
    fn inverted_or_non_finite_multipliers_are_rejected() {
        assert!(matches!(
            SynthesisSettings::new(10, 1.5, 0.7),
            Err(DomainError::InvariantViolation(_))
        ));
        assert!(SynthesisSettings::new(10, 0.0, 1.0).is_err());
        assert!(SynthesisSettings::new(10, 0.7, f64::INFINITY).is_err());
        assert!(SynthesisSettings::new(10, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn degenerate_multiplier_range_prices_at_the_seed() {
        let settings = SynthesisSettings::new(5, 1.0, 1.0).expect("single-point range");
        let mut rng = StdRng::seed_from_u64(9);
        let catalog = synthesize(Room::Bedroom, &[], &settings, &mut rng);

        assert!(!catalog.is_empty() && catalog.len() <= 5);
        for row in catalog.rows() {
            assert!(SEED_LISTINGS.iter().any(|seed| Decimal::new(seed.price, 0) == row.listing.price));
        }
    }
}
