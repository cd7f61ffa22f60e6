//! Crawler module: fetching, the per-link pipeline, and worker coordination
//!
//! This module contains:
//! - HTTP fetching with a per-request timeout and content-type check
//! - The per-link crawl pipeline (fetch, extract, classify, enqueue, persist)
//! - The worker pool and the frontier refill loop

mod fetcher;
mod pipeline;
mod worker;

pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use pipeline::{crawl_page, CrawlContext};
pub use worker::{run_crawl, CrawlReport, Deadline, RunOutcome};

use crate::config::Config;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It seeds the frontier
/// from the queued file (or the configured seed URLs), drives the worker pool
/// through refill cycles until the persisted frontier is empty or the time
/// budget elapses, and reports how many links were crawled.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl finished; carries the crawled count and outcome
/// * `Err(CrawlError)` - Crawl could not start
pub async fn crawl(config: Config) -> Result<CrawlReport, CrawlError> {
    run_crawl(config).await
}
