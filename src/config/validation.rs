use crate::config::types::{Config, CrawlerConfig, OutputConfig, PolicyConfig, SeedConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_policy_config(&config.policy, &config.output)?;
    validate_output_config(&config.output)?;
    validate_seed_config(&config.seed)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.workers < 1 || config.workers > 100 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 100, got {}",
            config.workers
        )));
    }

    if config.time_budget_secs < 1 {
        return Err(ConfigError::Validation(
            "time-budget-secs must be >= 1".to_string(),
        ));
    }

    if config.fetch_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "fetch-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that tally marker and tally output path are configured together
fn validate_policy_config(policy: &PolicyConfig, output: &OutputConfig) -> Result<(), ConfigError> {
    match (&policy.tally_marker, &output.tally_path) {
        (Some(marker), Some(_)) if marker.is_empty() => Err(ConfigError::Validation(
            "tally-marker cannot be empty when set".to_string(),
        )),
        (Some(_), None) => Err(ConfigError::Validation(
            "tally-marker requires output.tally-path".to_string(),
        )),
        (None, Some(_)) => Err(ConfigError::Validation(
            "output.tally-path requires policy.tally-marker".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Validates output file paths
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.queued_path.is_empty() {
        return Err(ConfigError::Validation(
            "queued-path cannot be empty".to_string(),
        ));
    }

    if config.crawled_path.is_empty() {
        return Err(ConfigError::Validation(
            "crawled-path cannot be empty".to_string(),
        ));
    }

    if config.queued_path == config.crawled_path {
        return Err(ConfigError::Validation(
            "queued-path and crawled-path must differ".to_string(),
        ));
    }

    Ok(())
}

/// Validates seed URLs
fn validate_seed_config(config: &SeedConfig) -> Result<(), ConfigError> {
    if config.urls.is_empty() {
        return Err(ConfigError::Validation(
            "seed must list at least one URL".to_string(),
        ));
    }

    for seed in &config.urls {
        let url = Url::parse(seed)
            .map_err(|e| ConfigError::InvalidSeed(format!("'{}': {}", seed, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Seed URL '{}' must use an http(s) scheme",
                seed
            )));
        }
    }

    Ok(())
}
