//! Worker pool and frontier refill loop
//!
//! The run moves through four states: seed one link synchronously to
//! bootstrap the frontier, then repeat refill cycles (reload the queued file,
//! publish the batch, wait for it to drain) until the persisted frontier is
//! empty or the time budget elapses.
//!
//! The queued file, not the in-memory frontier, is what each cycle reloads.
//! That resynchronization point is deliberate: the disk is the authoritative
//! source between cycles.
//!
//! The time budget is cooperative. Workers check the shared deadline before
//! starting a pipeline run; once it expires no new work starts, in-flight
//! runs finish, and the loop exits normally.

use crate::config::Config;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::pipeline::{crawl_page, CrawlContext};
use crate::frontier::Frontier;
use crate::store;
use crate::{CrawlError, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Shared wall-clock budget for the whole run
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Starts the clock with the given budget
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Returns true once the budget has elapsed
    pub fn expired(&self) -> bool {
        self.start.elapsed() > self.budget
    }
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A refill cycle found the persisted queued file empty
    FrontierExhausted,
    /// The global time budget elapsed
    BudgetElapsed,
}

/// Final report of a crawl run
#[derive(Debug)]
pub struct CrawlReport {
    /// Number of links that completed a fetch attempt
    pub crawled: usize,
    pub outcome: RunOutcome,
}

/// Runs the full crawl: seed, refill cycles, drain, report
pub async fn run_crawl(config: Config) -> Result<CrawlReport> {
    let config = Arc::new(config);
    let client = build_http_client(&config.crawler.user_agent, config.crawler.fetch_timeout_secs)?;
    let frontier = Arc::new(Frontier::new());
    let ctx = Arc::new(CrawlContext::new(
        config.clone(),
        client,
        frontier.clone(),
    ));

    let deadline = Deadline::new(Duration::from_secs(config.crawler.time_budget_secs));

    seed_frontier(&ctx).await?;

    let outcome = refill_loop(&ctx, deadline).await?;

    let crawled = frontier.crawled_len();
    match outcome {
        RunOutcome::FrontierExhausted => {
            tracing::info!("No more valid links to crawl. Crawled: {}", crawled)
        }
        RunOutcome::BudgetElapsed => {
            tracing::info!("Time budget elapsed. Crawling completed. Crawled: {}", crawled)
        }
    }

    Ok(CrawlReport { crawled, outcome })
}

/// Bootstraps the frontier and crawls the first link synchronously
///
/// The queued file is loaded if it has content; otherwise the configured
/// seed URLs start the run and are persisted so the first refill cycle sees
/// them.
async fn seed_frontier(ctx: &CrawlContext) -> Result<()> {
    let queued_path = Path::new(&ctx.config.output.queued_path);
    let mut loaded = store::load_set(queued_path)?;

    if loaded.is_empty() {
        tracing::info!("Queued file empty, seeding from configuration");
        loaded = ctx.config.seed.urls.iter().cloned().collect();
    }

    ctx.frontier.enqueue_candidates(loaded.iter().cloned());
    store::save_set(&loaded, queued_path)?;

    let first = loaded.iter().next().cloned().ok_or(CrawlError::EmptySeed)?;
    tracing::info!("Seeding crawl with {}", first);
    crawl_page(ctx, &first).await;

    Ok(())
}

/// Repeats refill cycles until the persisted frontier is empty or the
/// deadline expires
///
/// Each cycle reloads the queued file, publishes every link to the worker
/// pool, and blocks until the whole batch has drained before reloading.
async fn refill_loop(ctx: &Arc<CrawlContext>, deadline: Deadline) -> Result<RunOutcome> {
    let queued_path = Path::new(&ctx.config.output.queued_path);
    let workers = Arc::new(Semaphore::new(ctx.config.crawler.workers as usize));
    let worker_delay = Duration::from_millis(ctx.config.crawler.worker_delay_ms);

    loop {
        if deadline.expired() {
            return Ok(RunOutcome::BudgetElapsed);
        }

        let batch = store::load_set(queued_path)?;
        if batch.is_empty() {
            return Ok(RunOutcome::FrontierExhausted);
        }

        tracing::info!(
            "{} links queued, {} links crawled",
            batch.len(),
            ctx.frontier.crawled_len()
        );

        let mut tasks = JoinSet::new();
        for link in batch {
            let ctx = ctx.clone();
            let workers = workers.clone();
            tasks.spawn(async move {
                let _permit = workers.acquire_owned().await.expect("semaphore closed");

                // Cooperative cancellation: once the budget is spent no new
                // pipeline run starts, but in-flight runs finish
                if deadline.expired() {
                    return;
                }

                crawl_page(&ctx, &link).await;

                // Voluntary rate limit between pipeline runs; no
                // coordination meaning
                tokio::time::sleep(worker_delay).await;
            });
        }

        // Wait for the full batch to drain before the next reload
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Worker task failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_not_expired_immediately() {
        let deadline = Deadline::new(Duration::from_secs(60));
        assert!(!deadline.expired());
    }

    #[test]
    fn test_deadline_expires() {
        let deadline = Deadline::new(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(5));
        assert!(deadline.expired());
    }
}
