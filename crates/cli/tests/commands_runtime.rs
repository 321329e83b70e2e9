use std::env;
use std::fs;
use std::sync::{Mutex, OnceLock};

use roomwise_cli::commands::recommend::RecommendArgs;
use roomwise_cli::commands::{config, doctor, enrich, interpret, recommend, segregate};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn recommend_for_explicit_room_returns_json_report() {
    with_env(&[], || {
        let args = RecommendArgs {
            room: Some("bedroom".to_string()),
            wall_color: Some("Navy".to_string()),
            seed: Some(11),
            json: true,
            ..RecommendArgs::default()
        };
        let result = recommend::run(&args);
        assert_eq!(result.exit_code, 0, "unexpected output: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["wall_color"], "Navy");
        assert_eq!(payload["suggestion"]["wall_tone"], "blue");

        let recommendation = &payload["recommendation"];
        assert_eq!(recommendation["room"], "Bedroom");
        assert_eq!(recommendation["catalog_origin"], "room_seeds");
        let items = recommendation["items"].as_array().expect("items array");
        assert!(!items.is_empty());
        assert!(items.len() <= 20);
        assert_eq!(recommendation["best_pick"], items[0]);
        assert_eq!(recommendation["comparison"].as_object().map(|stores| stores.len()), Some(3));
    });
}

#[test]
fn recommend_reads_room_and_wall_color_from_prompt() {
    with_env(&[], || {
        let args = RecommendArgs {
            prompt: Some("Kitchen, wall color is beige, 10x8".to_string()),
            seed: Some(5),
            json: true,
            ..RecommendArgs::default()
        };
        let result = recommend::run(&args);
        assert_eq!(result.exit_code, 0, "unexpected output: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["recommendation"]["room"], "Kitchen");
        assert_eq!(payload["wall_color"], "Beige");
        assert_eq!(payload["dimensions"], "10x8");
        assert_eq!(payload["suggestion"]["palettes"].as_array().map(Vec::len), Some(2));
    });
}

#[test]
fn recommend_serves_rooms_without_seeds_from_cross_room_sample() {
    with_env(&[], || {
        let args = RecommendArgs {
            room: Some("Balcony".to_string()),
            seed: Some(3),
            json: true,
            ..RecommendArgs::default()
        };
        let result = recommend::run(&args);
        assert_eq!(result.exit_code, 0, "unexpected output: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["recommendation"]["catalog_origin"], "cross_room_sample");
        assert!(!payload["recommendation"]["items"].as_array().expect("items").is_empty());
    });
}

#[test]
fn recommend_respects_default_budget_from_env() {
    with_env(&[("ROOMWISE_RANKING_DEFAULT_BUDGET", "150")], || {
        let args = RecommendArgs {
            room: Some("Living Room".to_string()),
            seed: Some(21),
            json: true,
            ..RecommendArgs::default()
        };
        let result = recommend::run(&args);
        assert_eq!(result.exit_code, 0, "unexpected output: {}", result.output);

        let payload = parse_payload(&result.output);
        let recommendation = &payload["recommendation"];
        assert_eq!(decimal(&recommendation["budget"]), 150.0);

        let budget_fallback = recommendation["notices"]
            .as_array()
            .expect("notices")
            .iter()
            .any(|notice| notice["code"] == "budget_fallback");
        if !budget_fallback {
            for item in recommendation["items"].as_array().expect("items") {
                assert!(decimal(&item["price"]) <= 150.0, "item over budget: {item}");
            }
        }
    });
}

#[test]
fn recommend_is_reproducible_for_a_fixed_seed() {
    with_env(&[], || {
        let args = RecommendArgs {
            prompt: Some("office, wall color is gray".to_string()),
            seed: Some(99),
            json: true,
            ..RecommendArgs::default()
        };
        let first = recommend::run(&args);
        let second = recommend::run(&args);
        assert_eq!(first.exit_code, 0);
        assert_eq!(first.output, second.output);
    });
}

#[test]
fn recommend_human_output_lists_best_pick() {
    with_env(&[], || {
        let args = RecommendArgs {
            room: Some("Bathroom".to_string()),
            seed: Some(8),
            ..RecommendArgs::default()
        };
        let result = recommend::run(&args);
        assert_eq!(result.exit_code, 0);
        assert!(result.output.starts_with("Bathroom | wall color White"));
        assert!(result.output.contains("per store: "));
        assert!(last_line(&result.output).starts_with("best pick: "));
    });
}

#[test]
fn recommend_rejects_unknown_room() {
    with_env(&[], || {
        let args = RecommendArgs { room: Some("Garage".to_string()), ..RecommendArgs::default() };
        let result = recommend::run(&args);
        assert_eq!(result.exit_code, 3);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "recommend");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "invalid_input");
    });
}

#[test]
fn recommend_rejects_invalid_budgets() {
    with_env(&[], || {
        for budget in ["cheap", "-5", "0"] {
            let args = RecommendArgs {
                room: Some("Bedroom".to_string()),
                budget: Some(budget.to_string()),
                ..RecommendArgs::default()
            };
            let result = recommend::run(&args);
            assert_eq!(result.exit_code, 3, "budget `{budget}` should be rejected");
            assert_eq!(parse_payload(&result.output)["error_class"], "invalid_input");
        }
    });
}

#[test]
fn recommend_rejects_gold_as_color_filter() {
    with_env(&[], || {
        let args = RecommendArgs {
            room: Some("Bedroom".to_string()),
            color: Some("Gold".to_string()),
            ..RecommendArgs::default()
        };
        let result = recommend::run(&args);
        assert_eq!(result.exit_code, 3);
    });
}

#[test]
fn recommend_returns_config_failure_for_invalid_env() {
    with_env(&[("ROOMWISE_SERVER_PORT", "eighty")], || {
        let result = recommend::run(&RecommendArgs::default());
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "config_validation");
        assert!(payload["message"].as_str().unwrap_or_default().contains("ROOMWISE_SERVER_PORT"));
    });
}

#[test]
fn interpret_returns_profile_and_suggestion() {
    with_env(&[], || {
        let result = interpret::run("living room, wall color is sage green, 15x12", Some(3));
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["profile"]["room"], "Living Room");
        assert_eq!(payload["profile"]["wall_color"], "Sage Green");
        assert_eq!(payload["dimensions"], "15x12");
        assert_eq!(payload["suggestion"]["wall_tone"], "green");
    });
}

#[test]
fn interpret_falls_back_to_defaults_for_empty_prompt() {
    with_env(&[], || {
        let payload = parse_payload(&interpret::run("", Some(1)).output);
        assert_eq!(payload["profile"]["room"], "Living Room");
        assert_eq!(payload["profile"]["wall_color"], "White");
        assert_eq!(payload["dimensions"], "Unknown");
    });
}

#[test]
fn segregate_writes_room_files() {
    with_env(&[], || {
        let dir = TempDir::new().expect("tempdir");
        let input = dir.path().join("ikea.csv");
        fs::write(&input, "name,price,category\nHEMNES bed,$199,Beds\nKIVIK,$599,Sofas & sectionals\n")
            .expect("write input");
        let output_dir = dir.path().join("rooms");

        let result = segregate::run(&input, &output_dir);
        assert_eq!(result.exit_code, 0, "unexpected output: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "ok");
        assert!(output_dir.join("Bedroom.csv").exists());
        assert!(output_dir.join("Living_Room.csv").exists());
    });
}

#[test]
fn segregate_reports_missing_input_as_import_failure() {
    with_env(&[], || {
        let dir = TempDir::new().expect("tempdir");
        let result = segregate::run(&dir.path().join("missing.csv"), dir.path());
        assert_eq!(result.exit_code, 4);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "segregate");
        assert_eq!(payload["error_class"], "import");
    });
}

#[test]
fn enrich_is_reproducible_with_seed() {
    with_env(&[], || {
        let dir = TempDir::new().expect("tempdir");
        let input = dir.path().join("amazon.csv");
        fs::write(&input, "title,price\nVelvet accent chair,$129.99\n,$5\nOak desk,$210\n")
            .expect("write input");
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");

        let result = enrich::run(&input, &first, Some(42));
        assert_eq!(result.exit_code, 0, "unexpected output: {}", result.output);
        let message = parse_payload(&result.output)["message"].as_str().unwrap_or_default().to_string();
        assert!(message.contains("enriched 2 of 3 rows"), "message was {message}");

        enrich::run(&input, &second, Some(42));
        assert_eq!(
            fs::read_to_string(first).expect("first"),
            fs::read_to_string(second).expect("second")
        );
    });
}

#[test]
fn config_attributes_env_overrides() {
    with_env(&[("ROOMWISE_CACHE_CAPACITY", "8"), ("ROOMWISE_LOG_LEVEL", "debug")], || {
        let output = config::run();
        assert!(output.starts_with("effective config"));
        assert!(output.contains("- cache.capacity = 8 (source: env (ROOMWISE_CACHE_CAPACITY))"));
        assert!(output.contains("- logging.level = debug (source: env (ROOMWISE_LOG_LEVEL))"));
        assert!(output.contains("- ranking.max_results = 20 (source: default)"));
    });
}

#[test]
fn config_reports_validation_failure() {
    with_env(&[("ROOMWISE_CACHE_CAPACITY", "0")], || {
        let output = config::run();
        assert!(output.starts_with("config validation failed"), "output was {output}");
    });
}

#[test]
fn doctor_passes_with_default_config() {
    with_env(&[], || {
        let result = doctor::run(true);
        assert_eq!(result.exit_code, 0, "unexpected output: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["overall_status"], "pass");
        let names: Vec<&str> = payload["checks"]
            .as_array()
            .expect("checks")
            .iter()
            .filter_map(|check| check["name"].as_str())
            .collect();
        assert_eq!(names, vec!["config_validation", "seed_tables", "recommendation_pipeline"]);
    });
}

#[test]
fn doctor_skips_pipeline_when_config_is_invalid() {
    with_env(&[("ROOMWISE_CATALOG_PRICE_MULTIPLIER_MIN", "3.0")], || {
        let result = doctor::run(false);
        assert_eq!(result.exit_code, 2);
        assert!(result.output.starts_with("doctor: one or more readiness checks failed"));
        assert!(result.output.contains("- [fail] config_validation"));
        assert!(result.output.contains("- [ok] seed_tables"));
        assert!(last_line(&result.output).starts_with("- [skip] recommendation_pipeline"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn last_line(output: &str) -> &str {
    output.lines().last().unwrap_or_default()
}

fn decimal(value: &Value) -> f64 {
    match value {
        Value::String(raw) => raw.parse().expect("decimal string"),
        other => other.as_f64().expect("decimal number"),
    }
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "ROOMWISE_CATALOG_LISTINGS_PER_ROOM",
        "ROOMWISE_CATALOG_PRICE_MULTIPLIER_MIN",
        "ROOMWISE_CATALOG_PRICE_MULTIPLIER_MAX",
        "ROOMWISE_RANKING_MAX_RESULTS",
        "ROOMWISE_RANKING_PER_SOURCE_CAP",
        "ROOMWISE_RANKING_PER_CATEGORY_CAP",
        "ROOMWISE_RANKING_DEFAULT_BUDGET",
        "ROOMWISE_CACHE_CAPACITY",
        "ROOMWISE_SERVER_BIND_ADDRESS",
        "ROOMWISE_SERVER_PORT",
        "ROOMWISE_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "ROOMWISE_LOGGING_LEVEL",
        "ROOMWISE_LOGGING_FORMAT",
        "ROOMWISE_LOG_LEVEL",
        "ROOMWISE_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
