use serde::Deserialize;

/// Main configuration structure for linktrawl
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub policy: PolicyConfig,
    pub output: OutputConfig,
    pub seed: SeedConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of concurrent worker tasks
    pub workers: u32,

    /// Global wall-clock budget for the whole run (seconds)
    #[serde(rename = "time-budget-secs")]
    pub time_budget_secs: u64,

    /// Per-request fetch timeout (seconds)
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,

    /// Fixed pause each worker takes after a pipeline run (milliseconds)
    #[serde(rename = "worker-delay-ms")]
    pub worker_delay_ms: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

/// Link acceptance policy configuration
///
/// A discovered link is rejected when it contains the exclusion marker,
/// queued for crawling when it contains the crawl marker, and tallied when
/// it contains the tally marker. The exclusion check wins over both markers.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Substring a URL must contain to be re-queued for crawling.
    /// An empty marker accepts every URL.
    #[serde(rename = "crawl-marker")]
    pub crawl_marker: String,

    /// Substring identifying profile links to tally instead of crawl.
    /// Absent means tallying is disabled.
    #[serde(rename = "tally-marker", default)]
    pub tally_marker: Option<String>,

    /// Substring identifying the seed channel's own pages, always rejected
    #[serde(rename = "exclude-marker")]
    pub exclude_marker: String,
}

impl PolicyConfig {
    /// Returns true when this policy tallies profile links
    pub fn tally_enabled(&self) -> bool {
        self.tally_marker.is_some()
    }
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the queued-links file (one URL per line, overwritten)
    #[serde(rename = "queued-path")]
    pub queued_path: String,

    /// Path to the crawled-links file (`<url> (<ms>ms)` per line, appended)
    #[serde(rename = "crawled-path")]
    pub crawled_path: String,

    /// Path to the ranked tally file (`name (count)` per line, overwritten)
    #[serde(rename = "tally-path", default)]
    pub tally_path: Option<String>,
}

/// Seed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// URLs used to seed the frontier when the queued file is empty
    pub urls: Vec<String>,
}
