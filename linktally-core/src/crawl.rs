use indicatif::{ProgressBar, ProgressStyle};
use linktally_crawler::error::CrawlError;
use linktally_crawler::{Crawler, CrawlSummary};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

/// Options for configuring a crawl operation
pub struct CrawlOptions {
    pub seed: String,
    pub timeout_secs: u64,
    pub show_progress: bool,
}

impl CrawlOptions {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            timeout_secs: 10,
            show_progress: false,
        }
    }
}

/// Callback for reporting crawl progress messages
pub type CrawlProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Extract the path component from a URL, for compact progress display
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Execute a crawl with the given options.
/// Returns the crawl summary with the populated visit table.
pub async fn execute_crawl(
    options: CrawlOptions,
    progress_callback: Option<CrawlProgressCallback>,
) -> Result<CrawlSummary, CrawlError> {
    let CrawlOptions {
        seed,
        timeout_secs,
        show_progress,
    } = options;

    // Single spinner for overall crawl progress (only if enabled)
    let progress_bar = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(Arc::new(pb))
    } else {
        None
    };

    let visited_count = Arc::new(AtomicUsize::new(0));

    let mut crawler = Crawler::with_timeout(timeout_secs);

    if show_progress {
        let pb_clone = progress_bar.clone().unwrap();
        let count_clone = visited_count.clone();
        crawler = crawler.with_progress_callback(Arc::new(move |url: &str| {
            let count = count_clone.fetch_add(1, Ordering::Relaxed) + 1;
            pb_clone.set_message(format!(
                "Crawling... {} pages visited, now at {}",
                count,
                extract_url_path(url)
            ));
        }));
    }

    if let Some(ref callback) = progress_callback {
        callback(format!("Crawling {}", seed));
    }

    let result = crawler.crawl(&seed).await;

    if let Some(ref pb) = progress_bar {
        if result.is_ok() {
            let total = visited_count.load(Ordering::Relaxed);
            pb.finish_with_message(format!("Crawl complete! {} pages visited", total));
        } else {
            pb.finish_and_clear();
        }
    }

    result
}
