use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Mapping from canonical page key to the number of times the page was
/// internally referenced. The sole piece of state a crawl run accumulates.
pub type VisitTable = HashMap<String, u64>;

/// The outcome of one crawl run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlSummary {
    /// The seed URL as given.
    pub seed: String,
    /// Canonical key -> internal reference count.
    pub pages: VisitTable,
    /// Wall-clock time of the whole traversal.
    pub duration: Duration,
    /// Pages whose body was fetched and parsed.
    pub fetched: usize,
    /// Pages whose fetch failed; they stay in `pages` with their count but
    /// were never expanded.
    pub failed: usize,
}

impl CrawlSummary {
    pub fn new(seed: String) -> Self {
        Self {
            seed,
            pages: VisitTable::new(),
            duration: Duration::from_secs(0),
            fetched: 0,
            failed: 0,
        }
    }

    /// Total internal link occurrences discovered, including revisits.
    pub fn total_references(&self) -> u64 {
        self.pages.values().sum()
    }
}
