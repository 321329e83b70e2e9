use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_CANDIDATES: [&str; 2] = ["roomwise.toml", "config/roomwise.toml"];

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub ranking: RankingConfig,
    pub cache: CacheConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    pub listings_per_room: usize,
    pub price_multiplier_min: f64,
    pub price_multiplier_max: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankingConfig {
    pub max_results: usize,
    pub per_source_cap: usize,
    pub per_category_cap: usize,
    pub default_budget: Decimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CacheConfig {
    pub capacity: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub listings_per_room: Option<usize>,
    pub default_budget: Option<Decimal>,
    pub cache_capacity: Option<usize>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                listings_per_room: 50,
                price_multiplier_min: 0.7,
                price_multiplier_max: 1.5,
            },
            ranking: RankingConfig {
                max_results: 20,
                per_source_cap: 7,
                per_category_cap: 3,
                default_budget: Decimal::new(1_000, 0),
            },
            cache: CacheConfig { capacity: 32 },
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 8080,
                graceful_shutdown_secs: 15,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_CANDIDATES[0]));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(catalog) = patch.catalog {
            if let Some(listings_per_room) = catalog.listings_per_room {
                self.catalog.listings_per_room = listings_per_room;
            }
            if let Some(price_multiplier_min) = catalog.price_multiplier_min {
                self.catalog.price_multiplier_min = price_multiplier_min;
            }
            if let Some(price_multiplier_max) = catalog.price_multiplier_max {
                self.catalog.price_multiplier_max = price_multiplier_max;
            }
        }

        if let Some(ranking) = patch.ranking {
            if let Some(max_results) = ranking.max_results {
                self.ranking.max_results = max_results;
            }
            if let Some(per_source_cap) = ranking.per_source_cap {
                self.ranking.per_source_cap = per_source_cap;
            }
            if let Some(per_category_cap) = ranking.per_category_cap {
                self.ranking.per_category_cap = per_category_cap;
            }
            if let Some(default_budget) = ranking.default_budget {
                self.ranking.default_budget = default_budget;
            }
        }

        if let Some(cache) = patch.cache {
            if let Some(capacity) = cache.capacity {
                self.cache.capacity = capacity;
            }
        }

        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(graceful_shutdown_secs) = server.graceful_shutdown_secs {
                self.server.graceful_shutdown_secs = graceful_shutdown_secs;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("ROOMWISE_CATALOG_LISTINGS_PER_ROOM") {
            self.catalog.listings_per_room =
                parse_usize("ROOMWISE_CATALOG_LISTINGS_PER_ROOM", &value)?;
        }
        if let Some(value) = read_env("ROOMWISE_CATALOG_PRICE_MULTIPLIER_MIN") {
            self.catalog.price_multiplier_min =
                parse_f64("ROOMWISE_CATALOG_PRICE_MULTIPLIER_MIN", &value)?;
        }
        if let Some(value) = read_env("ROOMWISE_CATALOG_PRICE_MULTIPLIER_MAX") {
            self.catalog.price_multiplier_max =
                parse_f64("ROOMWISE_CATALOG_PRICE_MULTIPLIER_MAX", &value)?;
        }

        if let Some(value) = read_env("ROOMWISE_RANKING_MAX_RESULTS") {
            self.ranking.max_results = parse_usize("ROOMWISE_RANKING_MAX_RESULTS", &value)?;
        }
        if let Some(value) = read_env("ROOMWISE_RANKING_PER_SOURCE_CAP") {
            self.ranking.per_source_cap = parse_usize("ROOMWISE_RANKING_PER_SOURCE_CAP", &value)?;
        }
        if let Some(value) = read_env("ROOMWISE_RANKING_PER_CATEGORY_CAP") {
            self.ranking.per_category_cap =
                parse_usize("ROOMWISE_RANKING_PER_CATEGORY_CAP", &value)?;
        }
        if let Some(value) = read_env("ROOMWISE_RANKING_DEFAULT_BUDGET") {
            self.ranking.default_budget = parse_decimal("ROOMWISE_RANKING_DEFAULT_BUDGET", &value)?;
        }

        if let Some(value) = read_env("ROOMWISE_CACHE_CAPACITY") {
            self.cache.capacity = parse_usize("ROOMWISE_CACHE_CAPACITY", &value)?;
        }

        if let Some(value) = read_env("ROOMWISE_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("ROOMWISE_SERVER_PORT") {
            self.server.port = parse_u16("ROOMWISE_SERVER_PORT", &value)?;
        }
        if let Some(value) = read_env("ROOMWISE_SERVER_GRACEFUL_SHUTDOWN_SECS") {
            self.server.graceful_shutdown_secs =
                parse_u64("ROOMWISE_SERVER_GRACEFUL_SHUTDOWN_SECS", &value)?;
        }

        let log_level =
            read_env("ROOMWISE_LOGGING_LEVEL").or_else(|| read_env("ROOMWISE_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("ROOMWISE_LOGGING_FORMAT").or_else(|| read_env("ROOMWISE_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(log_format) = overrides.log_format {
            self.logging.format = log_format;
        }
        if let Some(listings_per_room) = overrides.listings_per_room {
            self.catalog.listings_per_room = listings_per_room;
        }
        if let Some(default_budget) = overrides.default_budget {
            self.ranking.default_budget = default_budget;
        }
        if let Some(capacity) = overrides.cache_capacity {
            self.cache.capacity = capacity;
        }
        if let Some(bind_address) = overrides.bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_catalog(&self.catalog)?;
        validate_ranking(&self.ranking)?;
        validate_cache(&self.cache)?;
        validate_server(&self.server)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

/// The config file `load` would read for `explicit_path`, if any exists.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    CONFIG_FILE_CANDIDATES.into_iter().map(PathBuf::from).find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_catalog(catalog: &CatalogConfig) -> Result<(), ConfigError> {
    if catalog.listings_per_room == 0 || catalog.listings_per_room > 1_000 {
        return Err(ConfigError::Validation(
            "catalog.listings_per_room must be in range 1..=1000".to_string(),
        ));
    }

    let (min, max) = (catalog.price_multiplier_min, catalog.price_multiplier_max);
    if !min.is_finite() || !max.is_finite() || min <= 0.0 {
        return Err(ConfigError::Validation(
            "catalog.price_multiplier_min must be a positive finite number".to_string(),
        ));
    }
    if min > max {
        return Err(ConfigError::Validation(format!(
            "catalog.price_multiplier_min ({min}) must not exceed price_multiplier_max ({max})"
        )));
    }

    Ok(())
}

fn validate_ranking(ranking: &RankingConfig) -> Result<(), ConfigError> {
    if ranking.max_results == 0 {
        return Err(ConfigError::Validation(
            "ranking.max_results must be greater than zero".to_string(),
        ));
    }

    if ranking.per_source_cap == 0 || ranking.per_category_cap == 0 {
        return Err(ConfigError::Validation(
            "ranking.per_source_cap and ranking.per_category_cap must be greater than zero"
                .to_string(),
        ));
    }

    if ranking.default_budget <= Decimal::ZERO {
        return Err(ConfigError::Validation(
            "ranking.default_budget must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_cache(cache: &CacheConfig) -> Result<(), ConfigError> {
    if cache.capacity == 0 {
        return Err(ConfigError::Validation("cache.capacity must be greater than zero".to_string()));
    }

    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.bind_address.trim().is_empty() {
        return Err(ConfigError::Validation("server.bind_address must not be empty".to_string()));
    }

    if server.port == 0 {
        return Err(ConfigError::Validation("server.port must be greater than zero".to_string()));
    }

    if server.graceful_shutdown_secs == 0 {
        return Err(ConfigError::Validation(
            "server.graceful_shutdown_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn invalid_override(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvOverride { key: key.to_string(), value: value.to_string() }
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse::<u16>().map_err(|_| invalid_override(key, value))
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse::<u64>().map_err(|_| invalid_override(key, value))
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse::<usize>().map_err(|_| invalid_override(key, value))
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse::<f64>().map_err(|_| invalid_override(key, value))
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal, ConfigError> {
    value.trim().parse::<Decimal>().map_err(|_| invalid_override(key, value))
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    catalog: Option<CatalogPatch>,
    ranking: Option<RankingPatch>,
    cache: Option<CachePatch>,
    server: Option<ServerPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogPatch {
    listings_per_room: Option<usize>,
    price_multiplier_min: Option<f64>,
    price_multiplier_max: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RankingPatch {
    max_results: Option<usize>,
    per_source_cap: Option<usize>,
    per_category_cap: Option<usize>,
    default_budget: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
struct CachePatch {
    capacity: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
    graceful_shutdown_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::io;
    use std::sync::{Mutex, OnceLock};

    use rust_decimal::Decimal;
    use tempfile::TempDir;

    use super::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_vars(vars: &[&str]) {
        for var in vars {
            env::remove_var(var);
        }
    }

    fn ensure(condition: bool, message: &'static str) -> Result<(), String> {
        if condition {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }

    #[test]
    fn defaults_are_valid() -> Result<(), String> {
        let config = AppConfig::default();
        config.validate().map_err(|err| err.to_string())?;
        ensure(config.catalog.listings_per_room == 50, "default catalog size should be 50")?;
        ensure(config.ranking.max_results == 20, "default selection size should be 20")?;
        ensure(config.ranking.per_source_cap == 7, "default source cap should be 7")?;
        ensure(config.ranking.per_category_cap == 3, "default category cap should be 3")?;
        ensure(
            matches!(config.logging.format, LogFormat::Compact),
            "default logging format should be compact",
        )
    }

    #[test]
    fn file_load_supports_env_interpolation() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("TEST_ROOMWISE_BIND", "0.0.0.0");

        let result = (|| -> Result<(), String> {
            let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
            let path = dir.path().join("roomwise.toml");
            fs::write(
                &path,
                r#"
[server]
bind_address = "${TEST_ROOMWISE_BIND}"
port = 9090
"#,
            )
            .map_err(|err| err.to_string())?;

            let config =
                AppConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() })
                    .map_err(|err| format!("config load failed: {err}"))?;

            ensure(
                config.server.bind_address == "0.0.0.0",
                "bind address should be loaded from environment",
            )?;
            ensure(config.server.port == 9090, "port should be loaded from file")?;
            Ok(())
        })();

        clear_vars(&["TEST_ROOMWISE_BIND"]);
        result
    }

    #[test]
    fn logging_env_aliases_are_supported() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("ROOMWISE_LOG_LEVEL", "warn");
        env::set_var("ROOMWISE_LOG_FORMAT", "pretty");

        let result = (|| -> Result<(), String> {
            let config = AppConfig::load(LoadOptions::default())
                .map_err(|err| format!("config load failed: {err}"))?;

            ensure(config.logging.level == "warn", "warning log level should be set from env var")?;
            ensure(
                matches!(config.logging.format, LogFormat::Pretty),
                "pretty logging format should be set from env var",
            )?;
            Ok(())
        })();

        clear_vars(&["ROOMWISE_LOG_LEVEL", "ROOMWISE_LOG_FORMAT"]);
        result
    }

    #[test]
    fn precedence_defaults_file_env_overrides() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("ROOMWISE_RANKING_DEFAULT_BUDGET", "750");
        env::set_var("ROOMWISE_CACHE_CAPACITY", "8");

        let result = (|| -> Result<(), String> {
            let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
            let path = dir.path().join("roomwise.toml");
            fs::write(
                &path,
                r#"
[catalog]
listings_per_room = 30

[ranking]
default_budget = 500
per_source_cap = 5

[cache]
capacity = 4

[logging]
level = "warn"
"#,
            )
            .map_err(|err| err.to_string())?;

            let config = AppConfig::load(LoadOptions {
                config_path: Some(path),
                overrides: ConfigOverrides {
                    listings_per_room: Some(40),
                    log_level: Some("debug".to_string()),
                    ..ConfigOverrides::default()
                },
                ..LoadOptions::default()
            })
            .map_err(|err| format!("config load failed: {err}"))?;

            ensure(config.catalog.listings_per_room == 40, "override catalog size should win")?;
            ensure(config.logging.level == "debug", "overridden log level should be debug")?;
            ensure(
                config.ranking.default_budget == Decimal::new(750, 0),
                "env budget should win over file and defaults",
            )?;
            ensure(config.cache.capacity == 8, "env cache capacity should win over file")?;
            ensure(config.ranking.per_source_cap == 5, "file source cap should win over default")?;
            ensure(config.ranking.per_category_cap == 3, "untouched fields keep defaults")?;
            Ok(())
        })();

        clear_vars(&["ROOMWISE_RANKING_DEFAULT_BUDGET", "ROOMWISE_CACHE_CAPACITY"]);
        result
    }

    #[test]
    fn invalid_env_override_is_reported_with_key() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("ROOMWISE_SERVER_PORT", "eighty");

        let result = (|| -> Result<(), String> {
            let error = match AppConfig::load(LoadOptions::default()) {
                Ok(_) => return Err("expected override failure but config load succeeded".to_string()),
                Err(error) => error,
            };
            ensure(
                matches!(error, ConfigError::InvalidEnvOverride { ref key, .. } if key == "ROOMWISE_SERVER_PORT"),
                "override failure should name the variable",
            )
        })();

        clear_vars(&["ROOMWISE_SERVER_PORT"]);
        result
    }

    #[test]
    fn validation_fails_fast_with_actionable_error() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("ROOMWISE_CATALOG_PRICE_MULTIPLIER_MIN", "2.0");
        env::set_var("ROOMWISE_CATALOG_PRICE_MULTIPLIER_MAX", "1.0");

        let result = (|| -> Result<(), String> {
            let error = match AppConfig::load(LoadOptions::default()) {
                Ok(_) => {
                    return Err("expected validation failure but config load succeeded".to_string())
                }
                Err(error) => error,
            };
            let has_message = matches!(
                error,
                ConfigError::Validation(ref message) if message.contains("price_multiplier_min")
            );
            ensure(has_message, "validation failure should mention price_multiplier_min")
        })();

        clear_vars(&["ROOMWISE_CATALOG_PRICE_MULTIPLIER_MIN", "ROOMWISE_CATALOG_PRICE_MULTIPLIER_MAX"]);
        result
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let error = AppConfig::load(LoadOptions {
            config_path: Some("does/not/exist/roomwise.toml".into()),
            require_file: true,
            ..LoadOptions::default()
        });

        assert!(matches!(error, Err(ConfigError::MissingConfigFile(_))));
    }
}
