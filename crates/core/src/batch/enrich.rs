//! Adds synthetic popularity, review text and sentiment columns to a
//! product export.

use std::path::Path;

use csv::Writer;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use super::sentiment::{mean_compound, SentimentLabel};
use super::ProductTable;
use crate::errors::ApplicationError;

pub const REVIEW_TEMPLATES: [&str; 10] = [
    "Love this {product}! Super sturdy and stylish.",
    "Great value for money. Easy to assemble. Looks perfect in my {room}.",
    "Perfect fit! Durable and elegant. 5 stars!",
    "Assembly was tricky, but worth it. Good quality.",
    "Color not as expected. Otherwise fine.",
    "Best purchase! Transformed my {room}.",
    "Overpriced for the quality.",
    "Amazing! Will buy again.",
    "Fell apart after a week. Poor quality.",
    "Exactly what I needed. Highly recommend.",
];

pub const REVIEW_ROOMS: [&str; 7] =
    ["bedroom", "kitchen", "living room", "bathroom", "office", "hallway", "balcony"];

pub const REVIEWS_PER_PRODUCT: usize = 3;

pub const ENRICHED_COLUMNS: [&str; 5] =
    ["num_reviews", "num_purchases", "review_text", "sentiment_score", "sentiment"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentSummary {
    pub input_rows: usize,
    pub written_rows: usize,
    pub dropped_rows: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// Three distinct templates filled with the title's first word and one
/// randomly chosen room.
pub fn synthesize_reviews<R: Rng + ?Sized>(title: &str, rng: &mut R) -> Vec<String> {
    let product = title.split_whitespace().next().unwrap_or(title);
    let room = REVIEW_ROOMS.choose(rng).copied().unwrap_or("home");

    REVIEW_TEMPLATES
        .choose_multiple(rng, REVIEWS_PER_PRODUCT)
        .map(|template| template.replace("{product}", product).replace("{room}", room))
        .collect()
}

pub fn enrich_csv<R: Rng + ?Sized>(
    input: &Path,
    output: &Path,
    rng: &mut R,
) -> Result<EnrichmentSummary, ApplicationError> {
    let table = ProductTable::read(input)?;
    let mut writer = Writer::from_path(output)?;
    writer.write_record(&table.output_headers(&ENRICHED_COLUMNS))?;

    let mut summary = EnrichmentSummary { input_rows: table.records.len(), ..Default::default() };
    for record in &table.records {
        let title = table.title(record);
        if title.is_empty() {
            summary.dropped_rows += 1;
            continue;
        }

        let num_reviews: u32 = rng.gen_range(10..1_000);
        let num_purchases: u32 = rng.gen_range(50..5_000);
        let reviews = synthesize_reviews(title, rng);
        let score = (mean_compound(&reviews) * 10_000.0).round() / 10_000.0;
        let label = SentimentLabel::from_score(score);
        let review_text = serde_json::to_string(&reviews)
            .map_err(|error| ApplicationError::Import(error.to_string()))?;

        match label {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
            SentimentLabel::Negative => summary.negative += 1,
        }

        writer.write_record(&table.output_record(
            record,
            &[
                num_reviews.to_string(),
                num_purchases.to_string(),
                review_text,
                score.to_string(),
                label.as_str().to_string(),
            ],
        ))?;
        summary.written_rows += 1;
    }
    writer.flush()?;

    info!(
        event_name = "batch.enrich.completed",
        input = %input.display(),
        output = %output.display(),
        written = summary.written_rows,
        dropped = summary.dropped_rows,
        "enriched product export"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn reviews_are_distinct_and_filled() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let reviews = synthesize_reviews("MALM bed frame", &mut rng);
            assert_eq!(reviews.len(), REVIEWS_PER_PRODUCT);
            assert_eq!(reviews.iter().collect::<HashSet<_>>().len(), REVIEWS_PER_PRODUCT);
            assert!(reviews.iter().all(|review| !review.contains('{')));
            assert!(!reviews.iter().any(|review| review.contains("bed frame")));
        }
    }

    #[test]
    fn enrichment_adds_columns_and_drops_untitled_rows() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err| err.to_string())?;
        let input = dir.path().join("ikea.csv");
        let output = dir.path().join("ikea_enhanced.csv");
        fs::write(&input, "name,price\nKALLAX shelf,$49\n,$10\nPAX wardrobe,299\n")
            .map_err(|err| err.to_string())?;

        let mut rng = StdRng::seed_from_u64(42);
        let summary = enrich_csv(&input, &output, &mut rng).map_err(|err| err.to_string())?;

        assert_eq!(summary.input_rows, 3);
        assert_eq!(summary.written_rows, 2);
        assert_eq!(summary.dropped_rows, 1);
        assert_eq!(summary.positive + summary.neutral + summary.negative, 2);

        let mut reader = csv::Reader::from_path(&output).map_err(|err| err.to_string())?;
        let headers = reader.headers().map_err(|err| err.to_string())?.clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec![
                "name",
                "price",
                "num_reviews",
                "num_purchases",
                "review_text",
                "sentiment_score",
                "sentiment"
            ]
        );

        for record in reader.records() {
            let record = record.map_err(|err| err.to_string())?;
            let reviews: Vec<String> =
                serde_json::from_str(&record[4]).map_err(|err| err.to_string())?;
            assert_eq!(reviews.len(), 3);
            let num_reviews: u32 = record[2].parse().map_err(|_| "num_reviews".to_string())?;
            assert!((10..1_000).contains(&num_reviews));
            let num_purchases: u32 = record[3].parse().map_err(|_| "num_purchases".to_string())?;
            assert!((50..5_000).contains(&num_purchases));
            let score: f64 = record[5].parse().map_err(|_| "sentiment_score".to_string())?;
            assert_eq!(&record[6], SentimentLabel::from_score(score).as_str());
        }
        Ok(())
    }

    #[test]
    fn fixed_seed_is_reproducible() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err| err.to_string())?;
        let input = dir.path().join("amazon.csv");
        fs::write(&input, "title,price\nVelvet accent chair,$129.99\nOak desk,$210\n")
            .map_err(|err| err.to_string())?;

        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        enrich_csv(&input, &first, &mut StdRng::seed_from_u64(7)).map_err(|err| err.to_string())?;
        enrich_csv(&input, &second, &mut StdRng::seed_from_u64(7)).map_err(|err| err.to_string())?;

        let first = fs::read_to_string(first).map_err(|err| err.to_string())?;
        let second = fs::read_to_string(second).map_err(|err| err.to_string())?;
        assert_eq!(first, second);
        Ok(())
    }
}
