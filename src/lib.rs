//! tokenscout - CoinMarketCap token screener
//!
//! Fetches the latest listings, filters them against a chain and risk tier,
//! scores the survivors, and prints a ranked recommendation report with a
//! templated SWOT block per token.

pub mod analysis;
pub mod apis;
pub mod arguments;
pub mod config;
pub mod errors;
pub mod filtering;
pub mod logger;
pub mod paths;
pub mod prompt;
pub mod report;
pub mod run;
pub mod scoring;
pub mod tokens;
