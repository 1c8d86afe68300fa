use crate::error::{CrawlError, Result};
use crate::extract::extract_links;
use crate::fetch::PageFetcher;
use crate::normalize::normalize;
use crate::result::CrawlSummary;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, trace, warn};
use url::Url;

pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Depth-first traversal of one website, counting internal references.
///
/// Starting from a seed URL the crawler fetches pages, extracts their
/// anchors and follows every link that stays on the seed's host. Each page
/// is fetched at most once; further references to it only raise its count
/// in the visit table. Fetch failures end their branch and leave the rest
/// of the traversal untouched.
pub struct Crawler {
    fetcher: PageFetcher,
    progress_callback: Option<ProgressCallback>,
}

impl Crawler {
    pub fn new() -> Self {
        Self {
            fetcher: PageFetcher::new(),
            progress_callback: None,
        }
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            fetcher: PageFetcher::with_timeout(timeout_secs),
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Crawl the site reachable from `seed` and return the populated visit
    /// table.
    ///
    /// A malformed or hostless seed fails the whole run. A malformed URL
    /// discovered mid-crawl only ends its own branch, logged as a warning.
    pub async fn crawl(&self, seed: &str) -> Result<CrawlSummary> {
        let seed_url = Url::parse(seed).map_err(|e| CrawlError::MalformedUrl {
            url: seed.to_string(),
            reason: e.to_string(),
        })?;
        let seed_host = seed_url
            .host_str()
            .ok_or_else(|| CrawlError::MalformedUrl {
                url: seed.to_string(),
                reason: "URL has no host".to_string(),
            })?
            .to_string();

        info!("starting crawl of {}", seed_host);
        let started = Instant::now();
        let mut summary = CrawlSummary::new(seed_url.to_string());

        // LIFO worklist instead of recursion: same depth-first, left-to-right
        // order, no call-stack limit on deep link chains.
        let mut pending: Vec<Url> = vec![seed_url.clone()];

        while let Some(current) = pending.pop() {
            // Origin scoping compares raw hosts. No "www." folding here, that
            // only happens inside the canonical key.
            if current.host_str() != Some(seed_host.as_str()) {
                trace!("offsite, skipping {}", current);
                continue;
            }

            let key = match normalize(current.as_str()) {
                Ok(key) => key,
                Err(e) => {
                    warn!("skipping branch, {}", e);
                    continue;
                }
            };

            if let Some(count) = summary.pages.get_mut(&key) {
                *count += 1;
                trace!("revisit #{} of {}", count, key);
                continue;
            }

            // Recorded before the fetch so a cycle back to this page counts
            // as a revisit instead of re-entering the worklist.
            summary.pages.insert(key, 1);

            if let Some(ref callback) = self.progress_callback {
                callback(current.as_str());
            }

            let html = match self.fetcher.fetch(&current).await {
                Ok(html) => {
                    summary.fetched += 1;
                    html
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!("fetch failed for {}: {}", current, e);
                    continue;
                }
            };

            // Relative hrefs resolve against the seed at every level, never
            // against the page they appear on.
            let links = extract_links(&html, &seed_url);
            // Reversed so the page's first anchor is popped first.
            pending.extend(links.into_iter().rev());
        }

        summary.duration = started.elapsed();
        info!(
            "crawl of {} complete: {} pages, {} fetched, {} fetch failures, {:.2?} elapsed",
            seed_host,
            summary.pages.len(),
            summary.fetched,
            summary.failed,
            summary.duration
        );
        Ok(summary)
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new()
    }
}
