pub mod config;
pub mod doctor;
pub mod enrich;
pub mod interpret;
pub mod recommend;
pub mod segregate;

use rand::rngs::StdRng;
use rand::SeedableRng;
use roomwise_core::config::{AppConfig, LoadOptions};
use roomwise_core::errors::{ApplicationError, DomainError};
use serde::Serialize;

pub const EXIT_INTERNAL: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;
pub const EXIT_IMPORT: u8 = 4;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Pretty JSON report, or a serialization failure outcome.
    pub fn report<T: Serialize>(command: &str, report: &T) -> Self {
        match serde_json::to_string_pretty(report) {
            Ok(output) => Self { exit_code: 0, output },
            Err(error) => Self::failure(command, "serialization", error.to_string(), EXIT_INTERNAL),
        }
    }

    pub fn invalid_input(command: &str, error: &DomainError) -> Self {
        Self::failure(command, "invalid_input", error.to_string(), EXIT_INVALID_INPUT)
    }

    pub fn from_application_error(command: &str, error: ApplicationError) -> Self {
        match error {
            ApplicationError::Domain(error) => Self::invalid_input(command, &error),
            ApplicationError::Import(message) => {
                Self::failure(command, "import", message, EXIT_IMPORT)
            }
            ApplicationError::Configuration(message) => {
                Self::failure(command, "config_validation", message, EXIT_CONFIG)
            }
        }
    }
}

pub(crate) fn load_config(command: &str) -> Result<AppConfig, CommandResult> {
    AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            EXIT_CONFIG,
        )
    })
}

pub(crate) fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
