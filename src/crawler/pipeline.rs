//! Per-link crawl pipeline
//!
//! One pipeline run takes a URL through fetch, extraction, classification,
//! frontier update, and persistence. No failure propagates out of a run:
//! every error is terminal for that link only, and persistence is always
//! attempted.

use crate::config::Config;
use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use crate::extract::extract_links;
use crate::frontier::Frontier;
use crate::policy::{classify, LinkClass};
use crate::store;
use reqwest::Client;
use std::path::Path;
use std::sync::{Arc, Mutex};
use url::Url;

/// Shared state each worker needs to run the pipeline
pub struct CrawlContext {
    pub config: Arc<Config>,
    pub client: Client,
    pub frontier: Arc<Frontier>,
    /// Serializes file writes so concurrent runs never interleave lines
    store_lock: Mutex<()>,
}

impl CrawlContext {
    pub fn new(config: Arc<Config>, client: Client, frontier: Arc<Frontier>) -> Self {
        Self {
            config,
            client,
            frontier,
            store_lock: Mutex::new(()),
        }
    }
}

/// Runs the crawl pipeline for one URL
///
/// 1. Skip if the URL has already completed a fetch attempt.
/// 2. Fetch; a non-HTML response or a failed request yields no links and no
///    timing record.
/// 3. Classify every extracted link, partitioning into crawl candidates and
///    tally subjects.
/// 4. Update the frontier: mark crawled, tally, enqueue.
/// 5. Persist the queued set (and tally) unconditionally, and append the
///    timing record on HTML success.
pub async fn crawl_page(ctx: &CrawlContext, url: &str) {
    // Guards against a URL dequeued twice across refill cycles
    if ctx.frontier.is_crawled(url) {
        tracing::debug!("Skipping already-crawled {}", url);
        return;
    }

    let outcome = fetch_page(&ctx.client, url).await;
    let elapsed_ms = outcome.elapsed_ms();

    let links = match &outcome {
        FetchOutcome::Html { body, .. } => match Url::parse(url) {
            Ok(base) => extract_links(body, &base),
            Err(e) => {
                tracing::warn!("Cannot parse {} as a base URL: {}", url, e);
                Default::default()
            }
        },
        FetchOutcome::NotHtml { content_type } => {
            tracing::debug!("{} is not HTML ({}), nothing to extract", url, content_type);
            Default::default()
        }
        FetchOutcome::Failed { error } => {
            tracing::warn!("Unable to retrieve {}: {}", url, error);
            Default::default()
        }
    };

    let mut candidates = Vec::new();
    let mut tally_subjects = Vec::new();
    for link in links {
        match classify(&link, &ctx.config.policy) {
            LinkClass::CrawlCandidate => candidates.push(link),
            LinkClass::TallySubject => tally_subjects.push(link),
            LinkClass::Rejected => {}
        }
    }

    tracing::debug!(
        "{}: {} candidates, {} tally subjects",
        url,
        candidates.len(),
        tally_subjects.len()
    );

    ctx.frontier.mark_crawled(url);
    ctx.frontier
        .record_tally(tally_subjects.iter().map(String::as_str));
    ctx.frontier.enqueue_candidates(candidates);

    persist(ctx, url, elapsed_ms);
}

/// Mirrors the frontier to disk after a pipeline run
///
/// Write errors are logged and swallowed; the in-memory frontier stays
/// authoritative for the cycle even when the on-disk mirror lags.
fn persist(ctx: &CrawlContext, url: &str, elapsed_ms: Option<u64>) {
    let _guard = ctx.store_lock.lock().unwrap();

    let queued = ctx.frontier.queued_snapshot();
    let queued_path = Path::new(&ctx.config.output.queued_path);
    if let Err(e) = store::save_set(&queued, queued_path) {
        tracing::warn!("Failed to write queued file: {}", e);
    }

    if let Some(tally_path) = &ctx.config.output.tally_path {
        let tally = ctx.frontier.tally_snapshot();
        if let Err(e) = store::save_ranked_tally(&tally, Path::new(tally_path)) {
            tracing::warn!("Failed to write tally file: {}", e);
        }
    }

    if let Some(ms) = elapsed_ms {
        let record = store::timing_record(url, ms);
        let crawled_path = Path::new(&ctx.config.output.crawled_path);
        if let Err(e) = store::append_line(&record, crawled_path) {
            tracing::warn!("Failed to append crawled record: {}", e);
        }
    }
}
