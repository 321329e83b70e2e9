//! Filter-and-rank pipeline
//!
//! Keyword filter, budget filter, weighted score, then greedy diverse
//! selection. Each filter that empties the working set falls back to its
//! input and records a [`Notice`] instead of failing.

mod filter;
mod scoring;
mod selection;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::info;

use crate::domain::listing::{CatalogRow, RankedRow, Source};

pub use filter::{keyword_filter, within_budget, FilterCriteria};
pub use scoring::{ScoreBounds, ScoreCalculator, ScoringWeights};
pub use selection::{select_diverse, SelectionPolicy};

/// Default scoring weights
pub const DEFAULT_WEIGHTS: ScoringWeights =
    ScoringWeights { price: 0.30, rating: 0.20, purchases: 0.30, base_score: 0.20 };

/// Keeps the price term finite when every price is equal.
pub const PRICE_EPSILON: f64 = 1e-6;

pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const DEFAULT_PER_SOURCE_CAP: usize = 7;
pub const DEFAULT_PER_CATEGORY_CAP: usize = 3;

/// Ranked rows shown per store in a comparison.
pub const COMPARISON_PER_SOURCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    KeywordFallback,
    BudgetFallback,
}

impl Notice {
    pub fn code(&self) -> &'static str {
        match self {
            Notice::KeywordFallback => "keyword_fallback",
            Notice::BudgetFallback => "budget_fallback",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::KeywordFallback => "No exact matches. Showing similar items.",
            Notice::BudgetFallback => "Nothing fits the budget. Showing items at any price.",
        }
    }
}

impl Serialize for Notice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Notice", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingOutcome {
    /// Every budget-filtered row, by weight descending.
    pub ranked: Vec<RankedRow>,
    pub selection: Vec<RankedRow>,
    pub notices: Vec<Notice>,
}

pub fn rank_and_select(
    rows: &[CatalogRow],
    criteria: &FilterCriteria,
    budget: Decimal,
    calculator: &ScoreCalculator,
    policy: &SelectionPolicy,
) -> RankingOutcome {
    let mut notices = Vec::new();

    let mut matched = keyword_filter(rows, criteria);
    if matched.is_empty() {
        info!(
            event_name = "ranking.keyword_fallback",
            style = %criteria.style,
            color = %criteria.color,
            "keyword filter matched nothing, using unfiltered catalog"
        );
        matched = rows.to_vec();
        notices.push(Notice::KeywordFallback);
    }

    let mut affordable = within_budget(&matched, budget);
    if affordable.is_empty() && !matched.is_empty() {
        info!(
            event_name = "ranking.budget_fallback",
            budget = %budget,
            "no rows within budget, retrying without a limit"
        );
        affordable = within_budget(&matched, Decimal::MAX);
        notices.push(Notice::BudgetFallback);
    }

    let ranked = calculator.rank(affordable);
    let selection = select_diverse(&ranked, policy);

    RankingOutcome { ranked, selection, notices }
}

/// The first `per_source` ranked rows of every store, in rank order.
/// Stores with no rows map to an empty list.
pub fn compare_sources(ranked: &[RankedRow], per_source: usize) -> BTreeMap<Source, Vec<RankedRow>> {
    let mut comparison: BTreeMap<Source, Vec<RankedRow>> =
        Source::ALL.into_iter().map(|source| (source, Vec::new())).collect();

    for row in ranked {
        if let Some(bucket) = comparison.get_mut(&row.listing().source) {
            if bucket.len() < per_source {
                bucket.push(row.clone());
            }
        }
    }

    comparison
}
