//! Weighted desirability score

use rust_decimal::prelude::ToPrimitive;

use super::{DEFAULT_WEIGHTS, PRICE_EPSILON};
use crate::domain::listing::{CatalogRow, RankedRow};

/// Weights for scoring components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Cheaper-is-better price term (default: 0.30)
    pub price: f64,
    /// Rating out of five (default: 0.20)
    pub rating: f64,
    /// Purchases relative to the most purchased row (default: 0.30)
    pub purchases: f64,
    /// Synthetic base score (default: 0.20)
    pub base_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Price and purchase extremes of the set being scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBounds {
    pub min_price: f64,
    pub max_price: f64,
    pub max_purchases: u32,
}

impl ScoreBounds {
    pub fn of(rows: &[CatalogRow]) -> Option<Self> {
        let first = rows.first()?;
        let start = price_of(first);
        let mut bounds =
            Self { min_price: start, max_price: start, max_purchases: first.purchase_count };

        for row in &rows[1..] {
            let price = price_of(row);
            bounds.min_price = bounds.min_price.min(price);
            bounds.max_price = bounds.max_price.max(price);
            bounds.max_purchases = bounds.max_purchases.max(row.purchase_count);
        }

        Some(bounds)
    }
}

#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    weights: ScoringWeights,
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self { weights: ScoringWeights::default() }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn price_term(&self, row: &CatalogRow, bounds: &ScoreBounds) -> f64 {
        (bounds.max_price - price_of(row)) / (bounds.max_price - bounds.min_price + PRICE_EPSILON)
    }

    pub fn purchase_term(&self, row: &CatalogRow, bounds: &ScoreBounds) -> f64 {
        if bounds.max_purchases == 0 {
            return 0.0;
        }
        f64::from(row.purchase_count) / f64::from(bounds.max_purchases)
    }

    pub fn score(&self, row: &CatalogRow, bounds: &ScoreBounds) -> f64 {
        self.weights.price * self.price_term(row, bounds)
            + self.weights.rating * (row.rating / 5.0)
            + self.weights.purchases * self.purchase_term(row, bounds)
            + self.weights.base_score * row.base_score
    }

    /// Scores `rows` against their own bounds and sorts by weight
    /// descending. The sort is stable, so ties keep input order.
    pub fn rank(&self, rows: Vec<CatalogRow>) -> Vec<RankedRow> {
        let Some(bounds) = ScoreBounds::of(&rows) else {
            return Vec::new();
        };

        let mut ranked: Vec<RankedRow> = rows
            .into_iter()
            .map(|row| {
                let weight = self.score(&row, &bounds);
                RankedRow { row, weight }
            })
            .collect();

        ranked.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn price_of(row: &CatalogRow) -> f64 {
    row.listing.price.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::row;
    use crate::domain::listing::Source;

    #[test]
    fn test_total_score_calculation() {
        let calculator = ScoreCalculator::new();
        let mut cheap = row("Modern White Stool", 100, Source::Ikea, "Stool");
        cheap.rating = 4.5;
        cheap.purchase_count = 2_000;
        cheap.base_score = 0.8;
        let mut pricey = row("Modern White Table", 300, Source::Amazon, "Table");
        pricey.purchase_count = 4_000;

        let bounds = ScoreBounds::of(&[cheap.clone(), pricey]).expect("bounds");
        let total = calculator.score(&cheap, &bounds);
        // 0.3 * ~1.0 + 0.2 * 0.9 + 0.3 * 0.5 + 0.2 * 0.8 = 0.79
        assert!((total - 0.79).abs() < 1e-6);
    }

    #[test]
    fn equal_prices_do_not_divide_by_zero() {
        let rows = vec![
            row("Boho Wood Bench", 120, Source::Flipkart, "Bench"),
            row("Boho Wood Chair", 120, Source::Ikea, "Chair"),
        ];
        let ranked = ScoreCalculator::new().rank(rows);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|row| row.weight.is_finite()));
    }

    #[test]
    fn zero_purchases_contribute_nothing() {
        let mut lonely = row("Boho Wood Bench", 120, Source::Flipkart, "Bench");
        lonely.purchase_count = 0;
        let bounds = ScoreBounds::of(std::slice::from_ref(&lonely)).expect("bounds");

        assert_eq!(ScoreCalculator::new().purchase_term(&lonely, &bounds), 0.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = vec![
            row("Modern White A", 100, Source::Ikea, "Shelf"),
            row("Modern White B", 100, Source::Ikea, "Shelf"),
            row("Modern White C", 100, Source::Ikea, "Shelf"),
        ];
        let ranked = ScoreCalculator::new().rank(rows);
        let titles: Vec<&str> = ranked.iter().map(|row| row.row.title()).collect();

        assert_eq!(titles, vec!["Modern White A", "Modern White B", "Modern White C"]);
    }
}
