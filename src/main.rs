use colored::*;

use tokenscout::arguments;
use tokenscout::logger::{self, LogTag};
use tokenscout::paths;
use tokenscout::run;

#[tokio::main]
async fn main() {
    if arguments::patterns::is_help_requested() {
        arguments::print_help();
        return;
    }
    if arguments::patterns::is_version_requested() {
        println!("tokenscout {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // Directories must exist before the logger opens its file
    if let Err(e) = paths::ensure_all_directories() {
        eprintln!("{} {}", "Startup failed:".red().bold(), e);
        std::process::exit(1);
    }

    logger::init();
    arguments::print_debug_info();

    let exit_code = match run::run().await {
        Ok(()) => 0,
        Err(e) => {
            logger::error(LogTag::System, &e.to_string());
            if e.is_auth() {
                logger::error(
                    LogTag::System,
                    "Check your CoinMarketCap API key (config.json or CMC_API_KEY)",
                );
            }
            1
        }
    };

    logger::flush();
    std::process::exit(exit_code);
}
