use std::str::FromStr;

use clap::Args;
use roomwise_core::advisor::{Advisor, Recommendation, RecommendationRequest};
use roomwise_core::domain::listing::{ColorFilter, Room, StyleFilter};
use roomwise_core::domain::profile::{DEFAULT_ROOM, DEFAULT_WALL_COLOR, UNKNOWN_DIMENSIONS};
use roomwise_core::errors::DomainError;
use roomwise_core::harmony::Suggestion;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::commands::{load_config, rng_for, CommandResult};

const COMMAND: &str = "recommend";

#[derive(Debug, Clone, Default, Args)]
pub struct RecommendArgs {
    #[arg(long, conflicts_with_all = ["room", "wall_color"], help = "Free-text room description")]
    pub prompt: Option<String>,
    #[arg(long, help = "Room name, e.g. Bedroom or \"Living Room\"")]
    pub room: Option<String>,
    #[arg(long, help = "Wall color used for palette suggestions")]
    pub wall_color: Option<String>,
    #[arg(long, help = "Minimalist, Modern, Boho or \"All Styles\"")]
    pub style: Option<String>,
    #[arg(long, help = "A palette color or \"All Colors\"")]
    pub color: Option<String>,
    #[arg(long, help = "Maximum price per item; defaults to ranking.default_budget")]
    pub budget: Option<String>,
    #[arg(long, help = "Seed palette and catalog draws for reproducible output")]
    pub seed: Option<u64>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RecommendReport {
    wall_color: String,
    dimensions: Option<String>,
    suggestion: Suggestion,
    recommendation: Recommendation,
}

pub fn run(args: &RecommendArgs) -> CommandResult {
    let config = match load_config(COMMAND) {
        Ok(config) => config,
        Err(result) => return result,
    };
    let mut advisor = match Advisor::from_config(&config) {
        Ok(advisor) => advisor,
        Err(error) => return CommandResult::from_application_error(COMMAND, error),
    };
    let mut rng = rng_for(args.seed);

    let (room, wall_color, dimensions, suggestion) = match &args.prompt {
        Some(prompt) => {
            let interpretation = advisor.interpret(prompt, &mut rng);
            let profile = interpretation.profile;
            (profile.room, profile.wall_color, profile.dimensions, interpretation.suggestion)
        }
        None => {
            let room = match args.room.as_deref().map(Room::from_str).transpose() {
                Ok(room) => room.unwrap_or(DEFAULT_ROOM),
                Err(error) => return CommandResult::invalid_input(COMMAND, &error),
            };
            let wall_color = args.wall_color.clone().unwrap_or_else(|| DEFAULT_WALL_COLOR.to_string());
            let suggestion = advisor.suggest(&wall_color, &mut rng);
            (room, wall_color, None, suggestion)
        }
    };

    let request = match build_request(args, room, &suggestion) {
        Ok(request) => request,
        Err(error) => return CommandResult::invalid_input(COMMAND, &error),
    };
    let recommendation = match advisor.recommend(&request, &mut rng) {
        Ok(recommendation) => recommendation,
        Err(error) => return CommandResult::invalid_input(COMMAND, &error),
    };

    let report = RecommendReport { wall_color, dimensions, suggestion, recommendation };
    if args.json {
        return CommandResult::report(COMMAND, &report);
    }
    CommandResult { exit_code: 0, output: render_human(&report) }
}

fn build_request(
    args: &RecommendArgs,
    room: Room,
    suggestion: &Suggestion,
) -> Result<RecommendationRequest, DomainError> {
    let style = args.style.as_deref().unwrap_or_default().parse::<StyleFilter>()?;
    let color = args.color.as_deref().unwrap_or_default().parse::<ColorFilter>()?;
    let budget = args.budget.as_deref().map(parse_budget).transpose()?;

    Ok(RecommendationRequest {
        room,
        style,
        color,
        preferred_colors: suggestion.colors.clone(),
        budget,
    })
}

fn parse_budget(raw: &str) -> Result<Decimal, DomainError> {
    let trimmed = raw.trim().trim_start_matches('$');
    Decimal::from_str(trimmed).map_err(|_| DomainError::InvalidBudget(raw.trim().to_string()))
}

fn render_human(report: &RecommendReport) -> String {
    let recommendation = &report.recommendation;
    let mut lines = vec![format!(
        "{} | wall color {} | dimensions {} | budget ${:.2}",
        recommendation.room,
        report.wall_color,
        report.dimensions.as_deref().unwrap_or(UNKNOWN_DIMENSIONS),
        recommendation.budget
    )];
    lines.push(format!(
        "style {} | color {} | palettes: {}",
        recommendation.style,
        recommendation.color,
        report.suggestion.palettes.join(", ")
    ));

    for notice in &recommendation.notices {
        lines.push(format!("note: {}", notice.message()));
    }

    if recommendation.is_empty() {
        lines.push("no listings fit this room and budget".to_string());
        return lines.join("\n");
    }

    for (rank, item) in recommendation.items.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {} | {} | {} | ${:.2} | rating {:.1} | {} reviews | score {:.3}",
            rank + 1,
            item.title,
            item.source,
            item.category,
            item.price,
            item.rating,
            item.review_count,
            item.score
        ));
    }

    let per_source: Vec<String> = recommendation
        .source_counts
        .iter()
        .map(|(source, count)| format!("{source} {count}"))
        .collect();
    lines.push(format!("per store: {}", per_source.join(", ")));

    if let Some(best) = &recommendation.best_pick {
        lines.push(format!("best pick: {} ({}) ${:.2}", best.title, best.source, best.price));
    }

    lines.join("\n")
}
