/// Chain classification and stablecoin detection at the fetch boundary
///
/// CMC listings do not carry a single authoritative "home chain" field, so
/// classification combines the native symbol, the platform object, and the
/// chain indicator tags. Stablecoin detection is equally heuristic: tag,
/// fiat indicator in name/symbol, or a price pegged near $1 with flat 30d
/// movement.
use crate::apis::coinmarketcap::types::CmcListing;
use crate::tokens::types::Chain;

/// Tags that mark an Ethereum-ecosystem token
const ETH_TAG_INDICATORS: &[&str] = &["ethereum", "ethereum-ecosystem", "erc-20", "erc20"];

/// Tags that mark a Solana-ecosystem token
const SOL_TAG_INDICATORS: &[&str] = &["solana", "solana-ecosystem", "spl"];

/// Tags that mark a stablecoin directly
const STABLECOIN_TAGS: &[&str] = &["stablecoin", "stablecoins", "asset-backed-stablecoin"];

/// Name/symbol substrings common to fiat-pegged tokens
const STABLE_INDICATORS: &[&str] = &["usd", "eur", "gbp", "usdt", "usdc", "dai", "busd", "tusd"];

/// Price band treated as a $1 peg candidate
const PEG_PRICE_MIN: f64 = 0.95;
const PEG_PRICE_MAX: f64 = 1.05;

/// 30d movement below this (at a pegged price) means stablecoin
const PEG_MAX_VOLATILITY_30D: f64 = 5.0;

/// Determine which supported chain a listing belongs to, if any.
///
/// Order matters: the native coin check wins over platform/tags so that
/// ETH itself classifies as Ethereum even though it has no platform.
pub fn classify_chain(listing: &CmcListing) -> Option<Chain> {
    let symbol = listing.symbol.to_lowercase();

    if symbol == "eth" {
        return Some(Chain::Ethereum);
    }
    if symbol == "sol" {
        return Some(Chain::Solana);
    }

    if let Some(platform) = &listing.platform {
        let name = platform.name.to_lowercase();
        let psym = platform.symbol.to_lowercase();
        if name == "ethereum" || psym == "eth" {
            return Some(Chain::Ethereum);
        }
        if name == "solana" || psym == "sol" {
            return Some(Chain::Solana);
        }
        // Token of some other chain; tags would only add noise here
        return None;
    }

    let tags: Vec<String> = listing.tags.iter().map(|t| t.to_lowercase()).collect();
    if tags.iter().any(|t| ETH_TAG_INDICATORS.contains(&t.as_str())) {
        return Some(Chain::Ethereum);
    }
    if tags.iter().any(|t| SOL_TAG_INDICATORS.contains(&t.as_str())) {
        return Some(Chain::Solana);
    }

    None
}

/// Heuristic stablecoin check; better to exclude a borderline token than
/// to recommend a peg.
pub fn is_stablecoin(listing: &CmcListing) -> bool {
    let tags: Vec<String> = listing.tags.iter().map(|t| t.to_lowercase()).collect();
    if tags.iter().any(|t| STABLECOIN_TAGS.contains(&t.as_str())) {
        return true;
    }

    let name = listing.name.to_lowercase();
    let symbol = listing.symbol.to_lowercase();
    if STABLE_INDICATORS
        .iter()
        .any(|ind| name.contains(ind) || symbol.contains(ind))
    {
        return true;
    }

    // Price-peg heuristic for untagged stables
    if let Some(quote) = &listing.quote.usd {
        if let Some(price) = quote.price {
            if (PEG_PRICE_MIN..=PEG_PRICE_MAX).contains(&price) {
                let volatility_30d = quote.percent_change_30d.unwrap_or(0.0).abs();
                if volatility_30d < PEG_MAX_VOLATILITY_30D {
                    return true;
                }
            }
        }
    }

    false
}
