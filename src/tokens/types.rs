/// Core token types for the screening pipeline
///
/// Raw CMC listings are mapped into `TokenRecord` at the fetch boundary so
/// the filter/scorer never touches untyped JSON. Records are immutable once
/// built and live only for the duration of one run.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::apis::coinmarketcap::types::CmcListing;
use crate::tokens::classify;

/// Supported target blockchains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    Ethereum,
    Solana,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Solana => "Solana",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ethereum" | "eth" => Some(Chain::Ethereum),
            "solana" | "sol" => Some(Chain::Solana),
            _ => None,
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One token as seen by the filter/scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    pub symbol: String,
    pub name: String,
    /// Classified home chain; None when the token belongs to neither
    /// supported chain
    pub chain: Option<Chain>,

    pub price_usd: f64,
    pub market_cap: f64,
    pub volume_24h: f64,

    /// 24h change is the volatility proxy used by the thresholds
    pub percent_change_24h: f64,
    pub percent_change_1h: Option<f64>,
    pub percent_change_7d: Option<f64>,

    pub listing_age_days: i64,
    pub date_added: Option<NaiveDate>,
    pub cmc_rank: Option<i64>,
    pub num_market_pairs: Option<i64>,
    pub tags: Vec<String>,
    pub is_stablecoin: bool,
}

impl TokenRecord {
    /// Map a raw listing into a typed record.
    ///
    /// Returns None when the USD quote is missing any of the fields the
    /// thresholds need (price, market cap, volume, 24h change) - such
    /// listings cannot be screened and are dropped at the boundary.
    pub fn from_listing(listing: &CmcListing, now: DateTime<Utc>) -> Option<Self> {
        let quote = listing.quote.usd.as_ref()?;

        let price_usd = quote.price?;
        let market_cap = quote.market_cap?;
        let volume_24h = quote.volume_24h?;
        let percent_change_24h = quote.percent_change_24h?;

        let listing_age_days = listing
            .date_added
            .map(|added| (now - added).num_days())
            .unwrap_or(0);

        Some(Self {
            symbol: listing.symbol.clone(),
            name: listing.name.clone(),
            chain: classify::classify_chain(listing),
            price_usd,
            market_cap,
            volume_24h,
            percent_change_24h,
            percent_change_1h: quote.percent_change_1h,
            percent_change_7d: quote.percent_change_7d,
            listing_age_days,
            date_added: listing.date_added.map(|d| d.date_naive()),
            cmc_rank: listing.cmc_rank,
            num_market_pairs: listing.num_market_pairs,
            tags: listing.tags.clone(),
            is_stablecoin: classify::is_stablecoin(listing),
        })
    }

    /// 24h volume as a fraction of market cap (None for zero cap)
    pub fn volume_to_mcap(&self) -> Option<f64> {
        if self.market_cap > 0.0 {
            Some(self.volume_24h / self.market_cap)
        } else {
            None
        }
    }
}
