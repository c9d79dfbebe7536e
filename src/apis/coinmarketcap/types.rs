/// Wire types for the CoinMarketCap listings endpoint
///
/// These mirror the raw JSON shape and never leave the fetch boundary;
/// `tokens::types::TokenRecord` is the typed form the pipeline consumes.
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ListingsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub data: Vec<CmcListing>,
}

/// Status object attached to every CMC response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    pub error_code: i64,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub credit_count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmcListing {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cmc_rank: Option<i64>,
    #[serde(default)]
    pub num_market_pairs: Option<i64>,
    #[serde(default)]
    pub platform: Option<CmcPlatform>,
    pub quote: CmcQuoteMap,
}

/// Parent chain for tokens that live on another blockchain
#[derive(Debug, Clone, Deserialize)]
pub struct CmcPlatform {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmcQuoteMap {
    #[serde(rename = "USD")]
    pub usd: Option<CmcQuote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmcQuote {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_1h: Option<f64>,
    #[serde(default)]
    pub percent_change_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_7d: Option<f64>,
    #[serde(default)]
    pub percent_change_30d: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": {"error_code": 0, "error_message": null, "credit_count": 25},
        "data": [{
            "id": 1027,
            "name": "Ethereum",
            "symbol": "ETH",
            "tags": ["pos", "smart-contracts"],
            "date_added": "2015-08-07T00:00:00.000Z",
            "cmc_rank": 2,
            "num_market_pairs": 9000,
            "platform": null,
            "quote": {"USD": {
                "price": 3000.5,
                "volume_24h": 2.0e10,
                "percent_change_1h": 0.1,
                "percent_change_24h": -1.2,
                "percent_change_7d": 4.5,
                "percent_change_30d": 10.0,
                "market_cap": 3.6e11
            }}
        }]
    }"#;

    #[test]
    fn test_deserialize_listings_response() {
        let resp: ListingsResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resp.status.error_code, 0);
        assert_eq!(resp.data.len(), 1);

        let eth = &resp.data[0];
        assert_eq!(eth.symbol, "ETH");
        assert!(eth.platform.is_none());
        let quote = eth.quote.usd.as_ref().unwrap();
        assert_eq!(quote.market_cap, Some(3.6e11));
        assert_eq!(quote.percent_change_24h, Some(-1.2));
    }

    #[test]
    fn test_missing_fields_default() {
        // Sparse listings (no rank, no platform, partial quote) must still parse
        let json = r#"{
            "status": {"error_code": 0},
            "data": [{
                "id": 1,
                "name": "Mystery",
                "symbol": "MYST",
                "quote": {"USD": {"price": 0.5}}
            }]
        }"#;
        let resp: ListingsResponse = serde_json::from_str(json).unwrap();
        let t = &resp.data[0];
        assert!(t.tags.is_empty());
        assert!(t.cmc_rank.is_none());
        assert!(t.quote.usd.as_ref().unwrap().market_cap.is_none());
    }
}
