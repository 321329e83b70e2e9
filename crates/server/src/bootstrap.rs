use rand::rngs::StdRng;
use rand::SeedableRng;
use roomwise_core::advisor::Advisor;
use roomwise_core::config::AppConfig;
use roomwise_core::errors::ApplicationError;
use thiserror::Error;
use tracing::info;

use crate::api::AdvisorState;

pub struct Application {
    pub config: AppConfig,
    pub state: AdvisorState,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("advisor initialization failed: {0}")]
    Advisor(#[from] ApplicationError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let advisor = Advisor::from_config(&config)?;
    info!(
        event_name = "system.bootstrap.advisor_ready",
        correlation_id = "bootstrap",
        listings_per_room = config.catalog.listings_per_room,
        cache_capacity = config.cache.capacity,
        default_budget = %config.ranking.default_budget,
        "advisor initialized"
    );

    let state = AdvisorState::new(advisor, StdRng::from_entropy());
    Ok(Application { config, state })
}

#[cfg(test)]
mod tests {
    use roomwise_core::config::{AppConfig, ConfigOverrides, LoadOptions};
    use rust_decimal::Decimal;

    use crate::bootstrap::{bootstrap_with_config, BootstrapError};

    #[test]
    fn invalid_config_fails_before_the_advisor_is_built() {
        let mut config = AppConfig::default();
        config.cache.capacity = 0;

        let result = bootstrap_with_config(config);
        assert!(matches!(result, Err(BootstrapError::Advisor(_))));
        let message = result.err().map(|error| error.to_string()).unwrap_or_default();
        assert!(message.contains("cache.capacity"), "message was {message}");
    }

    #[test]
    fn overrides_reach_the_advisor() {
        let config = AppConfig::load(LoadOptions {
            overrides: ConfigOverrides {
                default_budget: Some(Decimal::new(450, 0)),
                port: Some(9090),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .expect("config should load with valid overrides");

        let app = bootstrap_with_config(config).expect("bootstrap should succeed");

        assert_eq!(app.config.server.port, 9090);
        assert_eq!(app.state.default_budget("test").expect("advisor lock"), Decimal::new(450, 0));
    }
}
