/// Composite quality score (0-100)
///
/// Five components worth up to 20 points each: market cap, volume, price
/// stability, exchange pairs, listing age. Every component is monotone -
/// more cap/volume/pairs/age and less volatility never lowers the score.
/// The exact saturation points and weights are tunable policy, not a
/// contract; ranking order is what the pipeline guarantees.
use crate::filtering::RiskThresholds;
use crate::tokens::types::TokenRecord;

pub const MAX_SCORE: f64 = 100.0;

const COMPONENT_MAX: f64 = 20.0;

/// Cap/volume components saturate at this multiple of the tier floor
const SATURATION_MULTIPLE: f64 = 10.0;

/// Compute the quality score of a token against a tier's thresholds.
pub fn quality_score(token: &TokenRecord, thresholds: &RiskThresholds) -> f64 {
    market_cap_score(token, thresholds)
        + volume_score(token, thresholds)
        + stability_score(token, thresholds)
        + market_pairs_score(token, thresholds)
        + age_score(token, thresholds)
}

/// Market cap: linear from 0 at zero cap, full marks at 10x the tier floor
fn market_cap_score(token: &TokenRecord, thresholds: &RiskThresholds) -> f64 {
    let saturation = thresholds.min_market_cap * SATURATION_MULTIPLE;
    if saturation <= 0.0 {
        return COMPONENT_MAX;
    }
    ((token.market_cap / saturation) * COMPONENT_MAX).clamp(0.0, COMPONENT_MAX)
}

/// Volume: same shape as market cap
fn volume_score(token: &TokenRecord, thresholds: &RiskThresholds) -> f64 {
    let saturation = thresholds.min_volume_24h * SATURATION_MULTIPLE;
    if saturation <= 0.0 {
        return COMPONENT_MAX;
    }
    ((token.volume_24h / saturation) * COMPONENT_MAX).clamp(0.0, COMPONENT_MAX)
}

/// Price stability: full marks at zero movement, zero at the tier ceiling.
/// 24h and 7d windows weigh 10 points each; a missing window counts as no
/// movement (same treatment the thresholds give it).
fn stability_score(token: &TokenRecord, thresholds: &RiskThresholds) -> f64 {
    let window = |change: f64, ceiling: f64| -> f64 {
        if ceiling <= 0.0 {
            return COMPONENT_MAX / 2.0;
        }
        (1.0 - change.abs() / ceiling).clamp(0.0, 1.0) * (COMPONENT_MAX / 2.0)
    };

    window(token.percent_change_24h, thresholds.max_volatility_24h)
        + window(
            token.percent_change_7d.unwrap_or(0.0),
            thresholds.max_volatility_7d,
        )
}

/// Exchange listings: full marks at the tier's ideal pair count
fn market_pairs_score(token: &TokenRecord, thresholds: &RiskThresholds) -> f64 {
    let pairs = token.num_market_pairs.unwrap_or(0) as f64;
    if thresholds.ideal_market_pairs <= 0 {
        return COMPONENT_MAX;
    }
    ((pairs / thresholds.ideal_market_pairs as f64) * COMPONENT_MAX).clamp(0.0, COMPONENT_MAX)
}

/// Listing age: full marks at twice the tier's minimum age
fn age_score(token: &TokenRecord, thresholds: &RiskThresholds) -> f64 {
    if thresholds.min_age_days <= 0 {
        return COMPONENT_MAX;
    }
    let ratio = token.listing_age_days as f64 / thresholds.min_age_days as f64;
    (ratio * (COMPONENT_MAX / 2.0)).clamp(0.0, COMPONENT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::RiskProfile;
    use crate::tokens::types::{Chain, TokenRecord};

    fn token(market_cap: f64, volume_24h: f64, change_24h: f64) -> TokenRecord {
        TokenRecord {
            symbol: "TST".to_string(),
            name: "Test".to_string(),
            chain: Some(Chain::Ethereum),
            price_usd: 1.5,
            market_cap,
            volume_24h,
            percent_change_24h: change_24h,
            percent_change_1h: None,
            percent_change_7d: Some(2.0),
            listing_age_days: 365,
            date_added: None,
            cmc_rank: Some(200),
            num_market_pairs: Some(10),
            tags: vec![],
            is_stablecoin: false,
        }
    }

    #[test]
    fn test_score_bounds() {
        let thresholds = RiskProfile::Low.thresholds();
        let tiny = token(1.0, 1.0, 100.0);
        let huge = token(1e13, 1e12, 0.0);

        assert!(quality_score(&tiny, &thresholds) >= 0.0);
        assert!(quality_score(&huge, &thresholds) <= MAX_SCORE);
    }

    #[test]
    fn test_monotone_in_market_cap() {
        let thresholds = RiskProfile::Medium.thresholds();
        let small = token(2.0e8, 5.0e7, 5.0);
        let large = token(4.0e8, 5.0e7, 5.0);
        assert!(quality_score(&large, &thresholds) > quality_score(&small, &thresholds));
    }

    #[test]
    fn test_monotone_in_volume() {
        let thresholds = RiskProfile::Medium.thresholds();
        let thin = token(2.0e8, 2.0e7, 5.0);
        let deep = token(2.0e8, 6.0e7, 5.0);
        assert!(quality_score(&deep, &thresholds) > quality_score(&thin, &thresholds));
    }

    #[test]
    fn test_monotone_in_inverse_volatility() {
        let thresholds = RiskProfile::Medium.thresholds();
        let calm = token(2.0e8, 5.0e7, 2.0);
        let wild = token(2.0e8, 5.0e7, 20.0);
        assert!(quality_score(&calm, &thresholds) > quality_score(&wild, &thresholds));
    }

    #[test]
    fn test_negative_change_scores_like_positive() {
        // Volatility is direction-agnostic
        let thresholds = RiskProfile::High.thresholds();
        let up = token(5.0e7, 5.0e6, 10.0);
        let down = token(5.0e7, 5.0e6, -10.0);
        assert_eq!(
            quality_score(&up, &thresholds),
            quality_score(&down, &thresholds)
        );
    }
}
