use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
workers = 8
time-budget-secs = 10
fetch-timeout-secs = 15
worker-delay-ms = 1000
user-agent = "linktrawl/1.0"

[policy]
crawl-marker = "/watch?"
tally-marker = "/user/"
exclude-marker = "NUScast"

[output]
queued-path = "./queued.txt"
crawled-path = "./crawled.txt"
tally-path = "./tally.txt"

[seed]
urls = ["https://example.com/"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.workers, 8);
        assert_eq!(config.crawler.time_budget_secs, 10);
        assert_eq!(config.policy.crawl_marker, "/watch?");
        assert_eq!(config.policy.tally_marker.as_deref(), Some("/user/"));
        assert_eq!(config.seed.urls.len(), 1);
        assert!(config.policy.tally_enabled());
    }

    #[test]
    fn test_load_config_without_tally() {
        let config_content = r#"
[crawler]
workers = 4
time-budget-secs = 60
fetch-timeout-secs = 15
worker-delay-ms = 500
user-agent = "linktrawl/1.0"

[policy]
crawl-marker = ""
exclude-marker = "nowhere"

[output]
queued-path = "./queued.txt"
crawled-path = "./crawled.txt"

[seed]
urls = ["https://example.com/"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert!(config.policy.tally_marker.is_none());
        assert!(config.output.tally_path.is_none());
        assert!(!config.policy.tally_enabled());
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[crawler]
workers = 0
time-budget-secs = 10
fetch-timeout-secs = 15
worker-delay-ms = 1000
user-agent = "linktrawl/1.0"

[policy]
crawl-marker = ""
exclude-marker = "nowhere"

[output]
queued-path = "./queued.txt"
crawled-path = "./crawled.txt"

[seed]
urls = ["https://example.com/"]
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
