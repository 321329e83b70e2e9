//! Review sentiment backed by the VADER lexicon.
//!
//! Labels follow the usual VADER cut-offs on the compound score.

use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

fn compound_with(analyzer: &SentimentIntensityAnalyzer<'_>, text: &str) -> f64 {
    analyzer.polarity_scores(text).get("compound").copied().unwrap_or(0.0)
}

/// Compound score in `[-1, 1]`; text without lexicon words scores `0.0`.
pub fn compound_score(text: &str) -> f64 {
    compound_with(&SentimentIntensityAnalyzer::new(), text)
}

/// Mean compound score of `reviews`, or `0.0` for none.
pub fn mean_compound<S: AsRef<str>>(reviews: &[S]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let analyzer = SentimentIntensityAnalyzer::new();
    reviews.iter().map(|review| compound_with(&analyzer, review.as_ref())).sum::<f64>()
        / reviews.len() as f64
}
