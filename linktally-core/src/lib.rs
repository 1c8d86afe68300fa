pub mod crawl;
pub mod report;

use colored::Colorize;

pub fn print_banner() {
    println!(
        "{}",
        r#"
  _ _       _    _        _ _
 | (_)_ __ | | _| |_ __ _| | |_   _
 | | | '_ \| |/ / __/ _` | | | | | |
 | | | | | |   <| || (_| | | | |_| |
 |_|_|_| |_|_|\_\\__\__,_|_|_|\__, |
                              |___/
"#
        .bright_cyan()
    );
    println!(
        "  {} {}\n",
        "internal link tally".bright_white().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_blue()
    );
}
