//! Keyword and budget filters

use rust_decimal::Decimal;

use crate::domain::listing::{CatalogRow, Color, ColorFilter, StyleFilter};
use crate::lexicon::{contains_any, AVOID_KEYWORDS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub style: StyleFilter,
    pub color: ColorFilter,
    pub preferred_colors: Vec<Color>,
}

impl FilterCriteria {
    /// Union of the preferred colors' keywords. Tags without keywords add
    /// nothing, so an all-`Gold` preference yields an empty list.
    fn preferred_keywords(&self) -> Vec<&'static str> {
        self.preferred_colors.iter().flat_map(|color| color.keywords().iter().copied()).collect()
    }

    /// Whether a row passes every keyword stage.
    pub fn matches(&self, row: &CatalogRow) -> bool {
        let title = row.title().to_lowercase();

        if let StyleFilter::Only(style) = self.style {
            if !contains_any(&title, style.keywords()) {
                return false;
            }
        }

        if let ColorFilter::Only(color) = self.color {
            if !contains_any(&title, color.keywords()) {
                return false;
            }
        }

        let preferred = self.preferred_keywords();
        if !preferred.is_empty() && !contains_any(&title, &preferred) {
            return false;
        }

        !contains_any(&title, AVOID_KEYWORDS)
    }
}

/// Rows passing the style, color, preferred-color and avoid stages, in input order.
pub fn keyword_filter(rows: &[CatalogRow], criteria: &FilterCriteria) -> Vec<CatalogRow> {
    rows.iter().filter(|row| criteria.matches(row)).cloned().collect()
}

pub fn within_budget(rows: &[CatalogRow], budget: Decimal) -> Vec<CatalogRow> {
    rows.iter().filter(|row| row.listing.price <= budget).cloned().collect()
}
