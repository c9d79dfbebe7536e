/// Token domain types and boundary mapping
pub mod classify;
pub mod types;

use crate::apis::coinmarketcap::types::CmcListing;
use crate::logger::{self, LogTag};
use chrono::Utc;

use self::types::TokenRecord;

/// Map raw listings into typed records, dropping listings whose USD quote
/// is too sparse to screen. Chain classification and stablecoin detection
/// happen here so the pipeline never re-derives them.
pub fn map_listings(listings: &[CmcListing]) -> Vec<TokenRecord> {
    let now = Utc::now();
    let mut records = Vec::with_capacity(listings.len());
    let mut dropped = 0usize;

    for listing in listings {
        match TokenRecord::from_listing(listing, now) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        logger::debug(
            LogTag::Tokens,
            &format!("Dropped {} listings with incomplete USD quotes", dropped),
        );
    }
    logger::info(
        LogTag::Tokens,
        &format!("Mapped {} listings into token records", records.len()),
    );

    records
}
