use clap::ArgMatches;
use colored::Colorize;
use linktally_core::crawl::{CrawlOptions, execute_crawl};
use linktally_core::report::{ReportFormat, generate_report, save_report};
use std::path::PathBuf;
use url::Url;

/// Parse the seed argument as a URL, trying to add http:// if needed
pub fn parse_seed_url(raw: &str) -> Option<String> {
    if let Ok(url) = Url::parse(raw)
        && url.has_host()
    {
        return Some(raw.to_string());
    }

    let with_scheme = format!("http://{}", raw);
    if let Ok(url) = Url::parse(&with_scheme)
        && url.has_host()
    {
        return Some(with_scheme);
    }

    None
}

pub async fn handle_crawl(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let raw_url = sub_matches.get_one::<String>("url").unwrap();
    let timeout_secs = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let output = sub_matches.get_one::<PathBuf>("output");
    let format_str = sub_matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    let seed = match parse_seed_url(raw_url) {
        Some(seed) => seed,
        None => {
            eprintln!("{} Invalid seed URL '{}'", "✗".red().bold(), raw_url);
            std::process::exit(1);
        }
    };

    // The value_parser restricts this to known formats already
    let format = ReportFormat::from_str(format_str).unwrap_or(ReportFormat::Text);

    println!("\n🕷️  Crawling {}", seed.bright_white());
    println!("Timeout: {}s per request\n", timeout_secs);

    let options = CrawlOptions {
        seed,
        timeout_secs,
        show_progress: true,
    };

    let summary = match execute_crawl(options, None).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} Crawl failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    println!("\n{} Crawl complete!\n", "✓".green().bold());

    let report = match generate_report(&summary, &format) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} Failed to render report: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => match save_report(&report, path) {
            Ok(()) => println!("{} Report saved to {}", "✓".green().bold(), path.display()),
            Err(e) => {
                eprintln!(
                    "{} Failed to save report to {}: {}",
                    "✗".red().bold(),
                    path.display(),
                    e
                );
                std::process::exit(1);
            }
        },
        None => print!("{}", report),
    }
}
