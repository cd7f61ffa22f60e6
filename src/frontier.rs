//! Frontier store: queued and crawled link sets plus the actor tally
//!
//! All three containers live behind one mutex so that every operation is
//! linearizable across workers. The dedup invariant lives here: a URL is
//! queued only while it is in neither the queued nor the crawled set, and a
//! URL that has been crawled is never re-admitted.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use url::Url;

/// Shared crawl frontier
///
/// Owns the queued set (discovered, not yet fetched), the crawled set
/// (fetch attempted, success or failure), and the actor tally. Crawled only
/// ever grows.
pub struct Frontier {
    inner: Mutex<FrontierState>,
}

struct FrontierState {
    queued: HashSet<String>,
    crawled: HashSet<String>,
    tally: HashMap<String, u64>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FrontierState {
                queued: HashSet::new(),
                crawled: HashSet::new(),
                tally: HashMap::new(),
            }),
        }
    }

    /// Inserts each URL into the queued set iff it is in neither the queued
    /// nor the crawled set
    pub fn enqueue_candidates<I>(&self, urls: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut state = self.inner.lock().unwrap();
        for url in urls {
            if !state.queued.contains(&url) && !state.crawled.contains(&url) {
                state.queued.insert(url);
            }
        }
    }

    /// Moves a URL from the queued set to the crawled set
    ///
    /// A URL absent from the queued set (the seed on a fresh run, or a link
    /// republished by two refill cycles) is still added to crawled.
    pub fn mark_crawled(&self, url: &str) {
        let mut state = self.inner.lock().unwrap();
        if !state.queued.remove(url) {
            tracing::debug!("Marking {} crawled, but it was not queued", url);
        }
        state.crawled.insert(url.to_string());
    }

    /// Returns true if the URL has already completed a fetch attempt
    pub fn is_crawled(&self, url: &str) -> bool {
        self.inner.lock().unwrap().crawled.contains(url)
    }

    /// Counts each bare profile link toward its actor's tally
    ///
    /// A link carrying any query string referenced an action on the profile
    /// (subscribe and the like) rather than the profile itself, and is
    /// skipped. The actor name is the final path segment of the profile URL.
    pub fn record_tally<'a, I>(&self, urls: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = self.inner.lock().unwrap();
        for url in urls {
            if let Some(actor) = actor_name(url) {
                let count = state.tally.entry(actor).or_insert(0);
                *count += 1;
            }
        }
    }

    /// Snapshot of the queued set for persistence
    pub fn queued_snapshot(&self) -> HashSet<String> {
        self.inner.lock().unwrap().queued.clone()
    }

    /// Snapshot of the tally for persistence
    pub fn tally_snapshot(&self) -> HashMap<String, u64> {
        self.inner.lock().unwrap().tally.clone()
    }

    /// Number of URLs that have completed a fetch attempt
    pub fn crawled_len(&self) -> usize {
        self.inner.lock().unwrap().crawled.len()
    }

    /// Number of URLs waiting on the frontier
    pub fn queued_len(&self) -> usize {
        self.inner.lock().unwrap().queued.len()
    }

    /// Verifies the dedup invariant; exposed for tests
    #[cfg(test)]
    pub fn queued_crawled_disjoint(&self) -> bool {
        let state = self.inner.lock().unwrap();
        state.queued.is_disjoint(&state.crawled)
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the actor name from a bare profile URL
///
/// Returns None for URLs with a query string or without a usable final path
/// segment.
fn actor_name(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    if parsed.query().is_some() {
        return None;
    }

    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(|segment| segment.to_string())
}
