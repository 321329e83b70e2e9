//! Greedy diversity-capped selection

use std::collections::{HashMap, HashSet};

use crate::domain::listing::{RankedRow, Source};

use super::{DEFAULT_MAX_RESULTS, DEFAULT_PER_CATEGORY_CAP, DEFAULT_PER_SOURCE_CAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub max_results: usize,
    pub per_source_cap: usize,
    pub per_category_cap: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            per_source_cap: DEFAULT_PER_SOURCE_CAP,
            per_category_cap: DEFAULT_PER_CATEGORY_CAP,
        }
    }
}

/// Scans `ranked` in order and admits a row unless its source or category
/// bucket is full or its title is already admitted. A skipped row never
/// comes back, even if later slots stay empty.
pub fn select_diverse(ranked: &[RankedRow], policy: &SelectionPolicy) -> Vec<RankedRow> {
    let mut source_counts: HashMap<Source, usize> = HashMap::new();
    let mut category_counts: HashMap<&str, usize> = HashMap::new();
    let mut titles: HashSet<&str> = HashSet::new();
    let mut selected = Vec::new();

    for candidate in ranked {
        if selected.len() >= policy.max_results {
            break;
        }

        let listing = candidate.listing();
        let from_source = source_counts.get(&listing.source).copied().unwrap_or(0);
        let in_category = category_counts.get(listing.category.as_str()).copied().unwrap_or(0);
        if from_source >= policy.per_source_cap
            || in_category >= policy.per_category_cap
            || titles.contains(listing.title.as_str())
        {
            continue;
        }

        *source_counts.entry(listing.source).or_insert(0) += 1;
        *category_counts.entry(listing.category.as_str()).or_insert(0) += 1;
        titles.insert(listing.title.as_str());
        selected.push(candidate.clone());
    }

    selected
}
