use std::collections::BTreeSet;

use anyhow::{ensure, Context};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roomwise_core::advisor::{Advisor, RecommendationRequest};
use roomwise_core::catalog::seeds::{cross_room_sample, seeds_for, CROSS_ROOM_SAMPLE_SIZE, SEED_LISTINGS};
use roomwise_core::config::{AppConfig, LoadOptions};
use roomwise_core::domain::listing::{Room, Source};
use serde::Serialize;

use crate::commands::{CommandResult, EXIT_CONFIG, EXIT_INTERNAL};

const SMOKE_SEED: u64 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

impl DoctorCheck {
    fn from_result(name: &'static str, result: anyhow::Result<String>) -> Self {
        match result {
            Ok(details) => Self { name, status: CheckStatus::Pass, details },
            Err(error) => Self { name, status: CheckStatus::Fail, details: format!("{error:#}") },
        }
    }
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = exit_code(&report);

    if json_output {
        let output = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
        return CommandResult { exit_code, output };
    }

    CommandResult { exit_code, output: render_human(&report) }
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    let config = AppConfig::load(LoadOptions::default());
    match &config {
        Ok(_) => checks.push(DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Pass,
            details: "configuration loaded and validated".to_string(),
        }),
        Err(error) => checks.push(DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Fail,
            details: error.to_string(),
        }),
    }

    checks.push(DoctorCheck::from_result("seed_tables", check_seed_tables()));

    match &config {
        Ok(config) => {
            checks.push(DoctorCheck::from_result("recommendation_pipeline", smoke_pipeline(config)))
        }
        Err(_) => checks.push(DoctorCheck {
            name: "recommendation_pipeline",
            status: CheckStatus::Skipped,
            details: "skipped because configuration did not load".to_string(),
        }),
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn exit_code(report: &DoctorReport) -> u8 {
    let config_failed = report
        .checks
        .iter()
        .any(|check| check.name == "config_validation" && check.status == CheckStatus::Fail);
    match report.overall_status {
        CheckStatus::Pass => 0,
        _ if config_failed => EXIT_CONFIG,
        _ => EXIT_INTERNAL,
    }
}

fn check_seed_tables() -> anyhow::Result<String> {
    ensure!(!SEED_LISTINGS.is_empty(), "seed table is empty");

    if let Some(seed) = SEED_LISTINGS.iter().find(|seed| seed.price <= 0) {
        anyhow::bail!("seed `{}` has non-positive price {}", seed.title, seed.price);
    }

    let sources: BTreeSet<Source> = SEED_LISTINGS.iter().map(|seed| seed.source).collect();
    ensure!(
        sources.len() == Source::ALL.len(),
        "only {} of {} stores have seed listings",
        sources.len(),
        Source::ALL.len()
    );

    let expected_sample = CROSS_ROOM_SAMPLE_SIZE.min(SEED_LISTINGS.len());
    ensure!(
        cross_room_sample().len() == expected_sample,
        "cross-room sample has {} listings, expected {expected_sample}",
        cross_room_sample().len()
    );

    let seeded_rooms = Room::ALL.iter().filter(|room| !seeds_for(**room).is_empty()).count();
    Ok(format!(
        "{} seed listings across {} stores; {seeded_rooms} rooms seeded, others use a {expected_sample}-item cross-room sample",
        SEED_LISTINGS.len(),
        sources.len()
    ))
}

fn smoke_pipeline(config: &AppConfig) -> anyhow::Result<String> {
    let mut advisor = Advisor::from_config(config).context("advisor could not be built")?;
    let mut rng = StdRng::seed_from_u64(SMOKE_SEED);

    let interpretation =
        advisor.interpret("bedroom, wall color is light blue, 12x10", &mut rng);
    ensure!(
        interpretation.profile.room == Room::Bedroom,
        "prompt interpreter read room `{}` instead of Bedroom",
        interpretation.profile.room
    );

    let mut request = RecommendationRequest::for_room(interpretation.profile.room);
    request.preferred_colors = interpretation.suggestion.colors.clone();
    let seeded = advisor.recommend(&request, &mut rng).context("seeded room recommendation failed")?;
    ensure!(!seeded.is_empty(), "seeded room produced no recommendations");
    ensure!(
        seeded.items.len() <= config.ranking.max_results,
        "selection returned {} items, above ranking.max_results {}",
        seeded.items.len(),
        config.ranking.max_results
    );

    let fallback = advisor
        .recommend(&RecommendationRequest::for_room(Room::Balcony), &mut rng)
        .context("cross-room recommendation failed")?;
    ensure!(!fallback.is_empty(), "room without seeds produced no recommendations");

    let stats = advisor.cache_stats();
    Ok(format!(
        "{} items for {}, {} for {}; cache {} entries",
        seeded.items.len(),
        seeded.room,
        fallback.items.len(),
        fallback.room,
        stats.entries
    ))
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
