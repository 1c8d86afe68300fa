use crate::CLAP_STYLING;
use clap::{arg, command};

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("linktally")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linktally")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("crawl")
                .about(
                    "Crawl a website from a seed URL and report how often each page \
                is internally linked.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The seed URL to crawl (scheme optional, http:// assumed)"),
                )
                .arg(
                    arg!(-t --"timeout" <SECONDS>)
                        .required(false)
                        .help("Per-request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, csv, markdown")
                        .value_parser(["text", "json", "csv", "markdown"])
                        .default_value("text"),
                ),
        )
}
