//! Linktrawl: a time-boxed, multi-worker link crawler
//!
//! This crate implements a bounded-time web crawler that keeps its frontier
//! and visited state in line-oriented text files, deduplicates discovered
//! links against both, and optionally tallies profile references by
//! occurrence count.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod frontier;
pub mod policy;
pub mod store;

use thiserror::Error;

/// Main error type for linktrawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No seed URLs available to bootstrap the frontier")]
    EmptySeed,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid seed URL in config: {0}")]
    InvalidSeed(String),
}

/// Result type alias for linktrawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use frontier::Frontier;
pub use policy::{classify, LinkClass};
