//! Link acceptance policy
//!
//! Pure classification of discovered URLs against the configured path
//! markers. No side effects; the same URL and policy always yield the same
//! classification.

use crate::config::PolicyConfig;

/// Classification of a single discovered link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkClass {
    /// Contains the exclusion marker or matches no marker; dropped
    Rejected,
    /// Matches the crawl marker; re-queued on the frontier
    CrawlCandidate,
    /// Matches the tally marker; counted, never crawled
    TallySubject,
}

impl LinkClass {
    /// Returns true if the link should be added to the frontier
    pub fn should_crawl(&self) -> bool {
        matches!(self, Self::CrawlCandidate)
    }
}

/// Classifies a resolved absolute URL against the policy
///
/// Check order matters: the exclusion marker wins over both markers, and the
/// crawl marker wins over the tally marker when a URL contains both. An empty
/// crawl marker accepts every URL that survives the exclusion check.
///
/// # Examples
///
/// ```
/// use linktrawl::config::PolicyConfig;
/// use linktrawl::policy::{classify, LinkClass};
///
/// let policy = PolicyConfig {
///     crawl_marker: "/watch?".to_string(),
///     tally_marker: Some("/user/".to_string()),
///     exclude_marker: "NUScast".to_string(),
/// };
///
/// assert_eq!(
///     classify("https://x.test/watch?v=1", &policy),
///     LinkClass::CrawlCandidate
/// );
/// ```
pub fn classify(url: &str, policy: &PolicyConfig) -> LinkClass {
    if !policy.exclude_marker.is_empty() && url.contains(&policy.exclude_marker) {
        return LinkClass::Rejected;
    }

    if url.contains(&policy.crawl_marker) {
        return LinkClass::CrawlCandidate;
    }

    if let Some(tally_marker) = &policy.tally_marker {
        if url.contains(tally_marker.as_str()) {
            return LinkClass::TallySubject;
        }
    }

    LinkClass::Rejected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_policy() -> PolicyConfig {
        PolicyConfig {
            crawl_marker: "/watch?".to_string(),
            tally_marker: Some("/user/".to_string()),
            exclude_marker: "NUScast".to_string(),
        }
    }

    #[test]
    fn test_classify_crawl_candidate() {
        let policy = create_test_policy();
        assert_eq!(
            classify("https://x.test/watch?v=1", &policy),
            LinkClass::CrawlCandidate
        );
    }

    #[test]
    fn test_classify_tally_subject() {
        let policy = create_test_policy();
        assert_eq!(
            classify("https://x.test/user/alice", &policy),
            LinkClass::TallySubject
        );
    }

    #[test]
    fn test_classify_no_marker_rejected() {
        let policy = create_test_policy();
        assert_eq!(
            classify("https://x.test/about", &policy),
            LinkClass::Rejected
        );
    }

    #[test]
    fn test_exclusion_wins_over_crawl_marker() {
        let policy = create_test_policy();
        assert_eq!(
            classify("https://x.test/watch?v=NUScast", &policy),
            LinkClass::Rejected
        );
    }

    #[test]
    fn test_exclusion_wins_over_tally_marker() {
        let policy = create_test_policy();
        assert_eq!(
            classify("https://x.test/user/NUScast", &policy),
            LinkClass::Rejected
        );
    }

    #[test]
    fn test_crawl_marker_wins_over_tally_marker() {
        let policy = create_test_policy();
        assert_eq!(
            classify("https://x.test/watch?list=/user/alice", &policy),
            LinkClass::CrawlCandidate
        );
    }

    #[test]
    fn test_empty_crawl_marker_accepts_everything() {
        let policy = PolicyConfig {
            crawl_marker: String::new(),
            tally_marker: None,
            exclude_marker: "nowhere".to_string(),
        };
        assert_eq!(
            classify("https://anything.test/page", &policy),
            LinkClass::CrawlCandidate
        );
    }

    #[test]
    fn test_tally_disabled_rejects_profile_links() {
        let policy = PolicyConfig {
            crawl_marker: "/watch?".to_string(),
            tally_marker: None,
            exclude_marker: "NUScast".to_string(),
        };
        assert_eq!(
            classify("https://x.test/user/alice", &policy),
            LinkClass::Rejected
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let policy = create_test_policy();
        let url = "https://x.test/watch?v=abc";
        let first = classify(url, &policy);
        for _ in 0..10 {
            assert_eq!(classify(url, &policy), first);
        }
    }

    #[test]
    fn test_should_crawl() {
        assert!(LinkClass::CrawlCandidate.should_crawl());
        assert!(!LinkClass::TallySubject.should_crawl());
        assert!(!LinkClass::Rejected.should_crawl());
    }
}
