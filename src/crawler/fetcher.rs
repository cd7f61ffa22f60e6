//! HTTP fetcher
//!
//! Builds the shared HTTP client and performs a single timed GET per link.
//! Any response whose content-type is not HTML carries nothing to extract,
//! and any transport failure is terminal for that link (single-attempt
//! policy, no retries).

use reqwest::Client;
use std::time::{Duration, Instant};

/// Outcome of fetching one URL
#[derive(Debug)]
pub enum FetchOutcome {
    /// An HTML page was fetched and read
    Html {
        /// Page body content
        body: String,
        /// Fetch plus read duration in whole milliseconds
        elapsed_ms: u64,
    },

    /// The response was not HTML; nothing to extract
    NotHtml {
        /// The content-type the server reported
        content_type: String,
    },

    /// The request failed (timeout, connection error, bad status)
    Failed {
        /// Error description for the log
        error: String,
    },
}

impl FetchOutcome {
    /// Elapsed milliseconds for a successful HTML fetch, if any
    pub fn elapsed_ms(&self) -> Option<u64> {
        match self {
            FetchOutcome::Html { elapsed_ms, .. } => Some(*elapsed_ms),
            _ => None,
        }
    }
}

/// Builds the HTTP client shared by all workers
///
/// # Arguments
///
/// * `user_agent` - User agent string sent with every request
/// * `timeout_secs` - Per-request timeout in seconds
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one URL and classifies the outcome
///
/// The elapsed time covers sending the request and reading the body, rounded
/// down to whole milliseconds. Non-2xx statuses, timeouts, and connection
/// errors all collapse to `Failed`; the caller still marks the URL crawled
/// so it is never retried.
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    let start = Instant::now();

    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };
            return FetchOutcome::Failed { error };
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::Failed {
            error: format!("HTTP {}", status.as_u16()),
        };
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        return FetchOutcome::NotHtml { content_type };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Html {
            body,
            elapsed_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => FetchOutcome::Failed {
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("linktrawl-test/1.0", 15);
        assert!(client.is_ok());
    }

    #[test]
    fn test_elapsed_ms_only_for_html() {
        let html = FetchOutcome::Html {
            body: String::new(),
            elapsed_ms: 42,
        };
        assert_eq!(html.elapsed_ms(), Some(42));

        let not_html = FetchOutcome::NotHtml {
            content_type: "image/png".to_string(),
        };
        assert_eq!(not_html.elapsed_ms(), None);

        let failed = FetchOutcome::Failed {
            error: "Request timeout".to_string(),
        };
        assert_eq!(failed.elapsed_ms(), None);
    }

    // Network behavior is exercised end-to-end against wiremock in tests/
}
