use std::env;
use std::fs;
use std::path::Path;

use roomwise_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

struct ConfigField {
    key_path: &'static str,
    value: String,
    env_keys: &'static [&'static str],
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in fields(&config) {
        let source = field_source(
            field.key_path,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        lines.push(render_line(field.key_path, &field.value, source));
    }

    lines.join("\n")
}

fn fields(config: &AppConfig) -> Vec<ConfigField> {
    vec![
        field(
            "catalog.listings_per_room",
            config.catalog.listings_per_room.to_string(),
            &["ROOMWISE_CATALOG_LISTINGS_PER_ROOM"],
        ),
        field(
            "catalog.price_multiplier_min",
            config.catalog.price_multiplier_min.to_string(),
            &["ROOMWISE_CATALOG_PRICE_MULTIPLIER_MIN"],
        ),
        field(
            "catalog.price_multiplier_max",
            config.catalog.price_multiplier_max.to_string(),
            &["ROOMWISE_CATALOG_PRICE_MULTIPLIER_MAX"],
        ),
        field(
            "ranking.max_results",
            config.ranking.max_results.to_string(),
            &["ROOMWISE_RANKING_MAX_RESULTS"],
        ),
        field(
            "ranking.per_source_cap",
            config.ranking.per_source_cap.to_string(),
            &["ROOMWISE_RANKING_PER_SOURCE_CAP"],
        ),
        field(
            "ranking.per_category_cap",
            config.ranking.per_category_cap.to_string(),
            &["ROOMWISE_RANKING_PER_CATEGORY_CAP"],
        ),
        field(
            "ranking.default_budget",
            config.ranking.default_budget.to_string(),
            &["ROOMWISE_RANKING_DEFAULT_BUDGET"],
        ),
        field("cache.capacity", config.cache.capacity.to_string(), &["ROOMWISE_CACHE_CAPACITY"]),
        field(
            "server.bind_address",
            config.server.bind_address.clone(),
            &["ROOMWISE_SERVER_BIND_ADDRESS"],
        ),
        field("server.port", config.server.port.to_string(), &["ROOMWISE_SERVER_PORT"]),
        field(
            "server.graceful_shutdown_secs",
            config.server.graceful_shutdown_secs.to_string(),
            &["ROOMWISE_SERVER_GRACEFUL_SHUTDOWN_SECS"],
        ),
        field(
            "logging.level",
            config.logging.level.clone(),
            &["ROOMWISE_LOGGING_LEVEL", "ROOMWISE_LOG_LEVEL"],
        ),
        field(
            "logging.format",
            format!("{:?}", config.logging.format),
            &["ROOMWISE_LOGGING_FORMAT", "ROOMWISE_LOG_FORMAT"],
        ),
    ]
}

fn field(key_path: &'static str, value: String, env_keys: &'static [&'static str]) -> ConfigField {
    ConfigField { key_path, value, env_keys }
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_are_found_in_toml_documents() {
        let doc: Value = "[ranking]\ndefault_budget = \"500\"\n".parse().expect("toml");
        assert!(contains_path(&doc, "ranking.default_budget"));
        assert!(!contains_path(&doc, "ranking.max_results"));
        assert!(!contains_path(&doc, "cache.capacity"));
    }

    #[test]
    fn file_attribution_names_the_file() {
        let doc: Value = "[cache]\ncapacity = 4\n".parse().expect("toml");
        let source =
            field_source("cache.capacity", &[], Some(&doc), Some(Path::new("roomwise.toml")));
        assert_eq!(source, "file (roomwise.toml)");
        assert_eq!(field_source("server.port", &[], Some(&doc), None), "default");
    }
}
