/// Single-run screening pipeline
///
/// Fetch listings, map them into token records, filter and rank against the
/// selected chain and risk tier, then print and persist the report. One
/// invocation, one snapshot; there is no polling loop.
use colored::*;

use crate::apis::coinmarketcap::CoinMarketCapClient;
use crate::arguments;
use crate::config::Config;
use crate::errors::ScoutError;
use crate::filtering::{self, RiskProfile};
use crate::logger::{self, LogTag};
use crate::prompt;
use crate::report;
use crate::tokens::{self, types::Chain};

/// Run the full screening pipeline once.
pub async fn run() -> Result<(), ScoutError> {
    let config = Config::load(&arguments::get_config_path())
        .map_err(|e| ScoutError::configuration_error(format!("{:#}", e)))?;

    let (chain, risk) = resolve_selection()?;
    logger::info(
        LogTag::System,
        &format!("Screening {} tokens at {} risk", chain, risk),
    );

    let client = CoinMarketCapClient::new(&config.api)?;
    let limit = arguments::get_listing_limit().unwrap_or(config.api.listing_limit);

    let listings = client.fetch_listings(limit).await?;
    let records = tokens::map_listings(&listings);

    let (ranked, _stats) = filtering::filter_and_rank(&records, chain, risk);

    let top_count = arguments::get_top_count().unwrap_or(config.screener.report_top_count);
    let top = &ranked[..ranked.len().min(top_count)];

    report::print_results(top, chain, risk);

    match report::write_report(top, chain, risk) {
        Ok(path) => println!("\n{} {}", "Report saved:".dimmed(), path),
        // A failed file write should not discard the console output
        Err(e) => logger::warning(LogTag::Report, &e),
    }

    Ok(())
}

/// Chain and risk come from --chain / --risk when present, otherwise from
/// the interactive prompts.
fn resolve_selection() -> Result<(Chain, RiskProfile), ScoutError> {
    let chain = match arguments::get_chain_arg() {
        Some(chain) => chain,
        None => prompt::prompt_chain().map_err(ScoutError::configuration_error)?,
    };

    let risk = match arguments::get_risk_arg() {
        Some(risk) => risk,
        None => prompt::prompt_risk().map_err(ScoutError::configuration_error)?,
    };

    Ok((chain, risk))
}
