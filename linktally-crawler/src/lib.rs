pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod result;

pub use crawler::Crawler;
pub use error::CrawlError;
pub use extract::extract_links;
pub use fetch::PageFetcher;
pub use normalize::normalize;
pub use result::{CrawlSummary, VisitTable};
