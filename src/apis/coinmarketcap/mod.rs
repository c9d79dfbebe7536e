/// CoinMarketCap API client
///
/// API Documentation: https://coinmarketcap.com/api/documentation/v1/
///
/// Endpoints implemented:
/// 1. /cryptocurrency/listings/latest - Current listings with USD quotes

pub mod types;

use self::types::{CmcListing, ListingsResponse};
use crate::apis::client::HttpClient;
use crate::config::ApiConfig;
use crate::errors::{AuthError, NetworkError, ScoutError};
use crate::logger::{self, LogTag};
use std::time::Instant;

/// Auxiliary listing fields requested on top of the default payload
const LISTINGS_AUX: &str = "platform,tags,date_added,cmc_rank,num_market_pairs";

/// CMC status codes that indicate an API key problem
const CMC_ERROR_KEY_INVALID: i64 = 1001;
const CMC_ERROR_KEY_MISSING: i64 = 1002;

pub struct CoinMarketCapClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl CoinMarketCapClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ScoutError> {
        if config.api_key.trim().is_empty() {
            return Err(ScoutError::Auth(AuthError::ApiKeyMissing));
        }

        let http_client = HttpClient::new(config.timeout_secs)
            .map_err(ScoutError::network_error)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the current listings snapshot, one request, no retries.
    ///
    /// Network transport failures and HTTP 401/403 abort the run; an empty
    /// data array is a valid (if useless) response and is returned as-is.
    pub async fn fetch_listings(&self, limit: usize) -> Result<Vec<CmcListing>, ScoutError> {
        let start = Instant::now();
        let url = format!("{}/cryptocurrency/listings/latest", self.base_url);

        logger::debug(
            LogTag::Api,
            &format!("GET {} (limit={}, aux={})", url, limit, LISTINGS_AUX),
        );

        let response = self
            .http_client
            .client()
            .get(&url)
            .header("Accept", "application/json")
            .header("X-CMC_PRO_API_KEY", &self.api_key)
            .query(&[
                ("start", "1".to_string()),
                ("limit", limit.to_string()),
                ("convert", "USD".to_string()),
                ("aux", LISTINGS_AUX.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ScoutError::Auth(AuthError::AccessDenied {
                endpoint: url,
                status: status.as_u16(),
            }));
        }

        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(ScoutError::Network(NetworkError::HttpStatusError {
                endpoint: url,
                status: status.as_u16(),
                body,
            }));
        }

        let parsed: ListingsResponse = response
            .json()
            .await
            .map_err(|e| ScoutError::invalid_response(e.to_string()))?;

        // CMC reports key problems with HTTP 200 + status.error_code on some plans
        if parsed.status.error_code != 0 {
            let message = parsed
                .status
                .error_message
                .unwrap_or_else(|| format!("error code {}", parsed.status.error_code));
            if parsed.status.error_code == CMC_ERROR_KEY_INVALID
                || parsed.status.error_code == CMC_ERROR_KEY_MISSING
            {
                return Err(ScoutError::Auth(AuthError::ApiKeyInvalid {
                    provider_name: "coinmarketcap".to_string(),
                }));
            }
            return Err(ScoutError::invalid_response(message));
        }

        logger::info(
            LogTag::Api,
            &format!(
                "Fetched {} listings in {}ms",
                parsed.data.len(),
                start.elapsed().as_millis()
            ),
        );

        Ok(parsed.data)
    }
}
