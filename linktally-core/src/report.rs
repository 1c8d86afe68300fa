// Report generation from a completed crawl

use linktally_crawler::{CrawlSummary, VisitTable};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const DIVIDER: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// One report entry: a canonical page key and its internal reference count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCount {
    pub page: String,
    pub count: u64,
}

/// Order the visit table by count descending; entries with equal counts are
/// ordered by key ascending. The tie-break is strict, so the output is
/// identical regardless of table iteration order.
pub fn sort_pages(table: &VisitTable) -> Vec<PageCount> {
    let mut pages: Vec<PageCount> = table
        .iter()
        .map(|(page, count)| PageCount {
            page: page.clone(),
            count: *count,
        })
        .collect();

    pages.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.page.cmp(&b.page)));
    pages
}

pub fn generate_text_report(summary: &CrawlSummary) -> String {
    let mut report = String::new();

    report.push_str(DIVIDER);
    report.push('\n');
    report.push_str("                    LINKTALLY INTERNAL LINK REPORT\n");
    report.push_str(DIVIDER);
    report.push_str("\n\n");

    report.push_str(&format!("Seed URL:        {}\n", summary.seed));
    report.push_str(&format!("Pages found:     {}\n", summary.pages.len()));
    report.push_str(&format!("Pages fetched:   {}\n", summary.fetched));
    report.push_str(&format!("Fetch failures:  {}\n", summary.failed));
    report.push_str(&format!("Elapsed:         {:.2?}\n", summary.duration));
    report.push('\n');

    for entry in sort_pages(&summary.pages) {
        report.push_str(&format!(
            "Found {} internal links to {}\n",
            entry.count, entry.page
        ));
    }

    report.push('\n');
    report.push_str(DIVIDER);
    report.push('\n');

    report
}

pub fn generate_json_report(summary: &CrawlSummary) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "linktally",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json",
            },
            "crawl": {
                "seed": summary.seed,
                "pages_found": summary.pages.len(),
                "pages_fetched": summary.fetched,
                "fetch_failures": summary.failed,
                "duration_ms": summary.duration.as_millis() as u64,
            },
            "pages": sort_pages(&summary.pages),
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_csv_report(summary: &CrawlSummary) -> String {
    let mut report = String::from("page,count\n");
    for entry in sort_pages(&summary.pages) {
        // Canonical keys can contain commas inside query strings.
        report.push_str(&format!("\"{}\",{}\n", entry.page.replace('"', "\"\""), entry.count));
    }
    report
}

pub fn generate_markdown_report(summary: &CrawlSummary) -> String {
    let mut report = String::new();

    report.push_str("# linktally internal link report\n\n");
    report.push_str(&format!("- Seed URL: `{}`\n", summary.seed));
    report.push_str(&format!("- Pages found: {}\n", summary.pages.len()));
    report.push_str(&format!("- Pages fetched: {}\n", summary.fetched));
    report.push_str(&format!("- Fetch failures: {}\n\n", summary.failed));

    report.push_str("| Page | Internal links |\n");
    report.push_str("| --- | ---: |\n");
    for entry in sort_pages(&summary.pages) {
        report.push_str(&format!("| `{}` | {} |\n", entry.page, entry.count));
    }

    report
}

pub fn generate_report(
    summary: &CrawlSummary,
    format: &ReportFormat,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        ReportFormat::Text => generate_text_report(summary),
        ReportFormat::Json => generate_json_report(summary)?,
        ReportFormat::Csv => generate_csv_report(summary),
        ReportFormat::Markdown => generate_markdown_report(summary),
    })
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
