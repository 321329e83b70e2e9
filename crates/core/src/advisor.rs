//! Request entry point.
//!
//! `Advisor` owns the catalog cache and the ranking settings. Randomness is
//! always supplied by the caller.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::catalog::cache::{canonical_colors, DEFAULT_CACHE_CAPACITY};
use crate::catalog::{synthesize, CacheStats, CatalogCache, CatalogKey, CatalogOrigin, SynthesisSettings};
use crate::config::AppConfig;
use crate::domain::listing::{Color, ColorFilter, RankedRow, Room, Source, Style, StyleFilter};
use crate::domain::profile::RoomProfile;
use crate::errors::{ApplicationError, DomainError};
use crate::harmony::{suggest_palettes, Suggestion};
use crate::prompt::interpret_prompt;
use crate::ranking::{
    compare_sources, rank_and_select, FilterCriteria, Notice, ScoreCalculator, SelectionPolicy,
    COMPARISON_PER_SOURCE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub room: Room,
    pub style: StyleFilter,
    pub color: ColorFilter,
    pub preferred_colors: Vec<Color>,
    /// Falls back to the configured default budget.
    pub budget: Option<Decimal>,
}

impl RecommendationRequest {
    pub fn for_room(room: Room) -> Self {
        Self {
            room,
            style: StyleFilter::All,
            color: ColorFilter::All,
            preferred_colors: Vec::new(),
            budget: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedItem {
    pub title: String,
    pub price: Decimal,
    pub url: String,
    pub image_url: String,
    pub source: Source,
    pub category: String,
    pub color: Color,
    pub style: Style,
    pub rating: f64,
    pub review_count: u32,
    pub purchase_count: u32,
    pub score: f64,
}

impl From<&RankedRow> for RecommendedItem {
    fn from(ranked: &RankedRow) -> Self {
        let listing = ranked.listing();
        Self {
            title: listing.title.clone(),
            price: listing.price,
            url: listing.url.clone(),
            image_url: listing.image_url.clone(),
            source: listing.source,
            category: listing.category.clone(),
            color: listing.color,
            style: listing.style,
            rating: ranked.row.rating,
            review_count: ranked.row.review_count,
            purchase_count: ranked.row.purchase_count,
            score: ranked.weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub room: Room,
    pub style: StyleFilter,
    pub color: ColorFilter,
    pub budget: Decimal,
    pub preferred_colors: Vec<Color>,
    pub catalog_origin: CatalogOrigin,
    pub catalog_size: usize,
    pub items: Vec<RecommendedItem>,
    /// Every store appears, with zero when it contributed nothing.
    pub source_counts: BTreeMap<Source, usize>,
    pub notices: Vec<Notice>,
    pub comparison: BTreeMap<Source, Vec<RecommendedItem>>,
    pub best_pick: Option<RecommendedItem>,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    pub profile: RoomProfile,
    pub dimensions: String,
    pub suggestion: Suggestion,
}

#[derive(Debug)]
pub struct Advisor {
    synthesis: SynthesisSettings,
    policy: SelectionPolicy,
    calculator: ScoreCalculator,
    default_budget: Decimal,
    cache: CatalogCache,
}

impl Advisor {
    pub fn new(
        synthesis: SynthesisSettings,
        policy: SelectionPolicy,
        default_budget: Decimal,
        cache_capacity: NonZeroUsize,
    ) -> Self {
        Self {
            synthesis,
            policy,
            calculator: ScoreCalculator::new(),
            default_budget,
            cache: CatalogCache::new(cache_capacity),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        config.validate()?;
        let capacity = NonZeroUsize::new(config.cache.capacity).ok_or_else(|| {
            ApplicationError::Configuration("cache.capacity must be greater than zero".to_string())
        })?;

        Ok(Self::new(
            SynthesisSettings::new(
                config.catalog.listings_per_room,
                config.catalog.price_multiplier_min,
                config.catalog.price_multiplier_max,
            )?,
            SelectionPolicy {
                max_results: config.ranking.max_results,
                per_source_cap: config.ranking.per_source_cap,
                per_category_cap: config.ranking.per_category_cap,
            },
            config.ranking.default_budget,
            capacity,
        ))
    }

    pub fn default_budget(&self) -> Decimal {
        self.default_budget
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Reads a free-text description and suggests palettes for its wall color.
    pub fn interpret<R: Rng + ?Sized>(&self, prompt: &str, rng: &mut R) -> Interpretation {
        let profile = interpret_prompt(prompt);
        let suggestion = self.suggest(&profile.wall_color, rng);
        Interpretation { dimensions: profile.dimensions_label().to_string(), profile, suggestion }
    }

    pub fn suggest<R: Rng + ?Sized>(&self, wall_color: &str, rng: &mut R) -> Suggestion {
        suggest_palettes(wall_color, rng)
    }

    pub fn recommend<R: Rng + ?Sized>(
        &mut self,
        request: &RecommendationRequest,
        rng: &mut R,
    ) -> Result<Recommendation, DomainError> {
        let budget = request.budget.unwrap_or(self.default_budget);
        if budget <= Decimal::ZERO {
            return Err(DomainError::InvalidBudget(budget.to_string()));
        }

        let preferred = canonical_colors(&request.preferred_colors);
        let key = CatalogKey::new(request.room, &preferred);
        let synthesis = &self.synthesis;
        let catalog = self
            .cache
            .get_or_synthesize(key, || synthesize(request.room, &preferred, synthesis, rng));

        let criteria = FilterCriteria {
            style: request.style,
            color: request.color,
            preferred_colors: preferred.clone(),
        };
        let outcome =
            rank_and_select(catalog.rows(), &criteria, budget, &self.calculator, &self.policy);

        let items: Vec<RecommendedItem> = outcome.selection.iter().map(RecommendedItem::from).collect();
        let mut source_counts: BTreeMap<Source, usize> =
            Source::ALL.into_iter().map(|source| (source, 0)).collect();
        for item in &items {
            *source_counts.entry(item.source).or_insert(0) += 1;
        }
        let comparison = compare_sources(&outcome.ranked, COMPARISON_PER_SOURCE)
            .into_iter()
            .map(|(source, rows)| (source, rows.iter().map(RecommendedItem::from).collect()))
            .collect();

        info!(
            event_name = "advisor.recommendation.completed",
            room = %request.room,
            style = %request.style,
            color = %request.color,
            catalog_rows = catalog.len(),
            items = items.len(),
            notices = outcome.notices.len(),
            "recommendation ready"
        );

        Ok(Recommendation {
            room: request.room,
            style: request.style,
            color: request.color,
            budget,
            preferred_colors: preferred,
            catalog_origin: catalog.origin(),
            catalog_size: catalog.len(),
            best_pick: items.first().cloned(),
            items,
            source_counts,
            notices: outcome.notices,
            comparison,
        })
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(
            SynthesisSettings::default(),
            SelectionPolicy::default(),
            Decimal::new(1_000, 0),
            NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        )
    }
}
