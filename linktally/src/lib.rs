pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{handle_crawl, parse_seed_url};

// Re-export crawl functionality from linktally-core
pub use linktally_core::crawl::{CrawlOptions, CrawlProgressCallback, execute_crawl};
pub use linktally_core::report::{ReportFormat, generate_report, save_report, sort_pages};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
