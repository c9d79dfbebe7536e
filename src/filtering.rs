/// Token filtering and ranking pipeline
///
/// Single entry point: `filter_and_rank` takes the typed token records, the
/// selected chain, and a risk tier, and returns ranked recommendations plus
/// per-stage rejection statistics.
///
/// Filtering order (cheapest checks first):
/// 1. Chain match
/// 2. Stablecoin exclusion
/// 3. Market cap floor
/// 4. 24h volume floor
/// 5. Volatility ceilings (1h / 24h / 7d where present)
/// 6. Listing age floor
/// 7. Quality score floor
use std::collections::HashMap;

use colored::*;
use serde::Serialize;

use crate::analysis::{self, SwotAnalysis};
use crate::arguments::{is_debug_filtering_enabled, is_debug_scoring_enabled};
use crate::logger::{self, LogTag};
use crate::scoring;
use crate::tokens::types::{Chain, TokenRecord};

// =============================================================================
// RISK PROFILES
// =============================================================================

/// Named risk bucket selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskProfile {
    Low,
    Medium,
    High,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Low => "low",
            RiskProfile::Medium => "medium",
            RiskProfile::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(RiskProfile::Low),
            "medium" | "med" => Some(RiskProfile::Medium),
            "high" => Some(RiskProfile::High),
            _ => None,
        }
    }

    /// Fixed numeric thresholds for this tier. Values are policy, shaped so
    /// each tier is strictly looser than the one above it.
    pub fn thresholds(&self) -> RiskThresholds {
        match self {
            RiskProfile::Low => RiskThresholds {
                min_market_cap: 1_000_000_000.0,
                min_volume_24h: 100_000_000.0,
                max_volatility_1h: 5.0,
                max_volatility_24h: 10.0,
                max_volatility_7d: 20.0,
                min_age_days: 180,
                min_quality_score: 40.0,
                volume_mcap_band: (0.01, 0.20),
                ideal_market_pairs: 15,
            },
            RiskProfile::Medium => RiskThresholds {
                min_market_cap: 100_000_000.0,
                min_volume_24h: 10_000_000.0,
                max_volatility_1h: 8.0,
                max_volatility_24h: 25.0,
                max_volatility_7d: 40.0,
                min_age_days: 90,
                min_quality_score: 30.0,
                volume_mcap_band: (0.02, 0.30),
                ideal_market_pairs: 8,
            },
            RiskProfile::High => RiskThresholds {
                min_market_cap: 10_000_000.0,
                min_volume_24h: 1_000_000.0,
                max_volatility_1h: 12.0,
                max_volatility_24h: 50.0,
                max_volatility_7d: 80.0,
                min_age_days: 30,
                min_quality_score: 20.0,
                volume_mcap_band: (0.05, 0.40),
                ideal_market_pairs: 3,
            },
        }
    }
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Numeric thresholds backing one risk tier
#[derive(Debug, Clone)]
pub struct RiskThresholds {
    pub min_market_cap: f64,
    pub min_volume_24h: f64,
    pub max_volatility_1h: f64,
    /// Primary volatility ceiling; 24h change is the proxy
    pub max_volatility_24h: f64,
    pub max_volatility_7d: f64,
    pub min_age_days: i64,
    pub min_quality_score: f64,
    /// Healthy volume/market-cap ratio band, used by scoring and SWOT
    pub volume_mcap_band: (f64, f64),
    /// Pair count at which the exchange-listings score saturates
    pub ideal_market_pairs: i64,
}

// =============================================================================
// RESULTS
// =============================================================================

/// One recommendation: a surviving token, its score, and the SWOT block
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    pub token: TokenRecord,
    pub score: f64,
    pub analysis: SwotAnalysis,
}

// =============================================================================
// MAIN PIPELINE
// =============================================================================

/// Filter, score, and rank token records.
///
/// Every returned result satisfies all active thresholds and matches the
/// requested chain; stablecoins never survive. Empty input (or zero
/// survivors) yields an empty vector, never an error.
pub fn filter_and_rank(
    tokens: &[TokenRecord],
    chain: Chain,
    risk: RiskProfile,
) -> (Vec<RankedResult>, FilteringStats) {
    let start_time = std::time::Instant::now();
    let thresholds = risk.thresholds();
    let debug_enabled = is_debug_filtering_enabled();

    if debug_enabled {
        logger::debug(
            LogTag::Filtering,
            &format!(
                "Starting filtering cycle: {} tokens, chain={}, risk={}",
                tokens.len(),
                chain,
                risk
            ),
        );
    }

    let mut results = Vec::new();
    let mut stats = FilteringStats::new();

    for token in tokens {
        stats.total_processed += 1;

        if let Some(reason) = apply_thresholds(token, chain, &thresholds, &mut stats) {
            stats.record_rejection(token, reason, debug_enabled);
            continue;
        }
        stats.passed_thresholds += 1;

        let score = scoring::quality_score(token, &thresholds);
        if is_debug_scoring_enabled() {
            logger::debug(
                LogTag::Scoring,
                &format!("{}: {:.1}/100 (floor {:.0})", token.symbol, score, thresholds.min_quality_score),
            );
        }
        if score < thresholds.min_quality_score {
            stats.record_rejection(token, FilterRejectionReason::QualityScoreTooLow, debug_enabled);
            continue;
        }
        stats.record_stage_pass(FilterStage::QualityScore);

        results.push(RankedResult {
            token: token.clone(),
            score,
            analysis: analysis::analyze(token, &thresholds),
        });
    }

    // Highest score first; deterministic ties by cap descending, then symbol
    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.token.market_cap.total_cmp(&a.token.market_cap))
            .then_with(|| a.token.symbol.cmp(&b.token.symbol))
    });

    stats.final_passed = results.len();

    logger::info(
        LogTag::Filtering,
        &format!(
            "Filtering complete: {} of {} tokens passed in {}ms",
            stats.final_passed,
            stats.total_processed,
            start_time.elapsed().as_millis()
        ),
    );

    if debug_enabled {
        log_filtering_stats(&stats);
    }

    (results, stats)
}

/// Apply the threshold checks in order.
/// Returns Some(reason) if the token is rejected, None if it passes.
fn apply_thresholds(
    token: &TokenRecord,
    chain: Chain,
    thresholds: &RiskThresholds,
    stats: &mut FilteringStats,
) -> Option<FilterRejectionReason> {
    // 1. Chain match
    if token.chain != Some(chain) {
        return Some(FilterRejectionReason::ChainMismatch);
    }
    stats.record_stage_pass(FilterStage::Chain);

    // 2. Stablecoin exclusion
    if token.is_stablecoin {
        return Some(FilterRejectionReason::Stablecoin);
    }
    stats.record_stage_pass(FilterStage::Stablecoin);

    // 3. Market cap floor
    if token.market_cap < thresholds.min_market_cap {
        return Some(FilterRejectionReason::MarketCapTooLow);
    }
    stats.record_stage_pass(FilterStage::MarketCap);

    // 4. Volume floor
    if token.volume_24h < thresholds.min_volume_24h {
        return Some(FilterRejectionReason::VolumeTooLow);
    }
    stats.record_stage_pass(FilterStage::Volume);

    // 5. Volatility ceilings; unknown windows are skipped, 24h is mandatory
    if let Some(change_1h) = token.percent_change_1h {
        if change_1h.abs() > thresholds.max_volatility_1h {
            return Some(FilterRejectionReason::TooVolatile1h);
        }
    }
    if token.percent_change_24h.abs() > thresholds.max_volatility_24h {
        return Some(FilterRejectionReason::TooVolatile24h);
    }
    if let Some(change_7d) = token.percent_change_7d {
        if change_7d.abs() > thresholds.max_volatility_7d {
            return Some(FilterRejectionReason::TooVolatile7d);
        }
    }
    stats.record_stage_pass(FilterStage::Volatility);

    // 6. Age floor
    if token.listing_age_days < thresholds.min_age_days {
        return Some(FilterRejectionReason::TooYoung);
    }
    stats.record_stage_pass(FilterStage::Age);

    None
}

// =============================================================================
// FILTERING STATISTICS
// =============================================================================

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRejectionReason {
    ChainMismatch,
    Stablecoin,
    MarketCapTooLow,
    VolumeTooLow,
    TooVolatile1h,
    TooVolatile24h,
    TooVolatile7d,
    TooYoung,
    QualityScoreTooLow,
}

impl FilterRejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChainMismatch => "chain_mismatch",
            Self::Stablecoin => "stablecoin",
            Self::MarketCapTooLow => "mcap_too_low",
            Self::VolumeTooLow => "volume_too_low",
            Self::TooVolatile1h => "too_volatile_1h",
            Self::TooVolatile24h => "too_volatile_24h",
            Self::TooVolatile7d => "too_volatile_7d",
            Self::TooYoung => "too_young",
            Self::QualityScoreTooLow => "quality_score_too_low",
        }
    }
}

/// Pipeline stages for pass counting
#[derive(Debug, Clone, Copy)]
enum FilterStage {
    Chain,
    Stablecoin,
    MarketCap,
    Volume,
    Volatility,
    Age,
    QualityScore,
}

/// Filtering statistics tracker
#[derive(Debug, Default)]
pub struct FilteringStats {
    pub total_processed: usize,
    pub passed_thresholds: usize,
    pub final_passed: usize,
    pub rejection_counts: HashMap<&'static str, usize>,
    // Per-stage pass counts
    pub chain_check_passed: usize,
    pub stablecoin_check_passed: usize,
    pub market_cap_check_passed: usize,
    pub volume_check_passed: usize,
    pub volatility_check_passed: usize,
    pub age_check_passed: usize,
    pub quality_check_passed: usize,
}

impl FilteringStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_rejection(
        &mut self,
        token: &TokenRecord,
        reason: FilterRejectionReason,
        debug_enabled: bool,
    ) {
        *self.rejection_counts.entry(reason.as_str()).or_insert(0) += 1;

        if debug_enabled {
            logger::debug(
                LogTag::Filtering,
                &format!("Rejected {} ({}): {}", token.symbol, token.name, reason.as_str()),
            );
        }
    }

    fn record_stage_pass(&mut self, stage: FilterStage) {
        match stage {
            FilterStage::Chain => self.chain_check_passed += 1,
            FilterStage::Stablecoin => self.stablecoin_check_passed += 1,
            FilterStage::MarketCap => self.market_cap_check_passed += 1,
            FilterStage::Volume => self.volume_check_passed += 1,
            FilterStage::Volatility => self.volatility_check_passed += 1,
            FilterStage::Age => self.age_check_passed += 1,
            FilterStage::QualityScore => self.quality_check_passed += 1,
        }
    }

    pub fn rejections(&self, reason: FilterRejectionReason) -> usize {
        self.rejection_counts
            .get(reason.as_str())
            .copied()
            .unwrap_or(0)
    }
}

/// Log the full pipeline breakdown (debug-filtering only)
fn log_filtering_stats(stats: &FilteringStats) {
    let mut summary = String::new();

    summary.push_str(&format!("{}\n", "FILTERING PIPELINE RESULTS".bright_cyan().bold()));

    summary.push_str(&format!(
        "{} {} processed -> {} passed thresholds -> {} final\n",
        "Pipeline:".bright_white().bold(),
        format!("{}", stats.total_processed).bright_yellow().bold(),
        format!("{}", stats.passed_thresholds).bright_green().bold(),
        format!("{}", stats.final_passed).bright_magenta().bold(),
    ));

    summary.push_str(&format!(
        "{} chain {}, stable {}, mcap {}, volume {}, volatility {}, age {}, score {}\n",
        "Stage passes:".bright_white().bold(),
        stats.chain_check_passed,
        stats.stablecoin_check_passed,
        stats.market_cap_check_passed,
        stats.volume_check_passed,
        stats.volatility_check_passed,
        stats.age_check_passed,
        stats.quality_check_passed,
    ));

    let mut rejection_vec: Vec<_> = stats.rejection_counts.iter().collect();
    rejection_vec.sort_by(|a, b| b.1.cmp(a.1));

    if !rejection_vec.is_empty() {
        summary.push_str(&format!("{} ", "Rejections:".bright_white().bold()));
        let details: Vec<String> = rejection_vec
            .iter()
            .map(|(reason, count)| {
                format!(
                    "{}={}",
                    reason.bright_white(),
                    format!("{}", count).bright_red().bold()
                )
            })
            .collect();
        summary.push_str(&details.join(", "));
    }

    logger::debug(LogTag::Filtering, &summary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::types::Chain;

    fn token(
        symbol: &str,
        chain: Option<Chain>,
        market_cap: f64,
        volume_24h: f64,
        change_24h: f64,
        age_days: i64,
        stable: bool,
    ) -> TokenRecord {
        TokenRecord {
            symbol: symbol.to_string(),
            name: format!("{} Coin", symbol),
            chain,
            price_usd: 1.5,
            market_cap,
            volume_24h,
            percent_change_24h: change_24h,
            percent_change_1h: None,
            percent_change_7d: None,
            listing_age_days: age_days,
            date_added: None,
            cmc_rank: None,
            num_market_pairs: None,
            tags: vec![],
            is_stablecoin: stable,
        }
    }

    /// The two-token low-risk scenario: only the large, calm, old token passes.
    #[test]
    fn test_low_risk_scenario() {
        let tokens = vec![
            token("AAA", Some(Chain::Ethereum), 5.0e9, 2.0e8, 3.0, 400, false),
            token("BBB", Some(Chain::Ethereum), 1.0e6, 1.0e3, 50.0, 5, false),
        ];

        let (results, stats) = filter_and_rank(&tokens, Chain::Ethereum, RiskProfile::Low);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].token.symbol, "AAA");
        assert_eq!(stats.total_processed, 2);
        assert_eq!(stats.rejections(FilterRejectionReason::MarketCapTooLow), 1);
    }

    #[test]
    fn test_all_results_satisfy_thresholds() {
        let tokens = vec![
            token("AAA", Some(Chain::Solana), 5.0e9, 2.0e8, 3.0, 400, false),
            token("BBB", Some(Chain::Solana), 2.0e9, 9.0e7, 3.0, 400, false), // volume fails
            token("CCC", Some(Chain::Solana), 3.0e9, 5.0e8, -5.0, 400, false),
            token("DDD", Some(Chain::Solana), 2.0e9, 3.0e8, 10.1, 400, false), // volatility fails
            token("EEE", Some(Chain::Solana), 2.0e9, 3.0e8, 0.5, 179, false), // age fails
        ];

        let (results, _) = filter_and_rank(&tokens, Chain::Solana, RiskProfile::Low);
        let thresholds = RiskProfile::Low.thresholds();

        assert_eq!(results.len(), 2);
        for result in &results {
            let t = &result.token;
            assert_eq!(t.chain, Some(Chain::Solana));
            assert!(!t.is_stablecoin);
            assert!(t.market_cap >= thresholds.min_market_cap);
            assert!(t.volume_24h >= thresholds.min_volume_24h);
            assert!(t.percent_change_24h.abs() <= thresholds.max_volatility_24h);
            assert!(t.listing_age_days >= thresholds.min_age_days);
            assert!(result.score >= thresholds.min_quality_score);
        }
    }

    #[test]
    fn test_stablecoins_never_appear() {
        let tokens = vec![
            token("USDX", Some(Chain::Ethereum), 5.0e9, 2.0e8, 0.1, 900, true),
            token("AAA", Some(Chain::Ethereum), 5.0e9, 2.0e8, 3.0, 400, false),
        ];

        let (results, stats) = filter_and_rank(&tokens, Chain::Ethereum, RiskProfile::Low);

        assert!(results.iter().all(|r| !r.token.is_stablecoin));
        assert_eq!(stats.rejections(FilterRejectionReason::Stablecoin), 1);
    }

    #[test]
    fn test_chain_mismatch_yields_empty_not_error() {
        let tokens = vec![
            token("AAA", Some(Chain::Ethereum), 5.0e9, 2.0e8, 3.0, 400, false),
            token("BBB", None, 5.0e9, 2.0e8, 3.0, 400, false),
        ];

        let (results, stats) = filter_and_rank(&tokens, Chain::Solana, RiskProfile::Low);

        assert!(results.is_empty());
        assert_eq!(stats.rejections(FilterRejectionReason::ChainMismatch), 2);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let (results, stats) = filter_and_rank(&[], Chain::Ethereum, RiskProfile::Medium);
        assert!(results.is_empty());
        assert_eq!(stats.total_processed, 0);
    }

    #[test]
    fn test_ordering_is_monotone_in_score() {
        let tokens = vec![
            token("AAA", Some(Chain::Solana), 2.0e9, 5.0e8, 1.0, 400, false),
            token("BBB", Some(Chain::Solana), 8.0e9, 9.0e8, 0.5, 900, false),
            token("CCC", Some(Chain::Solana), 3.0e9, 4.0e8, 2.0, 400, false),
        ];

        let (results, _) = filter_and_rank(&tokens, Chain::Solana, RiskProfile::Low);

        assert_eq!(results.len(), 3);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(results[0].token.symbol, "BBB");
    }

    #[test]
    fn test_tie_breaks_cap_then_symbol() {
        // High tier with all components saturated: identical max scores
        let mut a = token("ZZZ", Some(Chain::Solana), 2.0e8, 5.0e7, 0.0, 100, false);
        let mut b = token("MMM", Some(Chain::Solana), 5.0e8, 5.0e7, 0.0, 100, false);
        let mut c = token("AAA", Some(Chain::Solana), 2.0e8, 5.0e7, 0.0, 100, false);
        a.num_market_pairs = Some(10);
        b.num_market_pairs = Some(10);
        c.num_market_pairs = Some(10);

        let (results, _) = filter_and_rank(&[a, b, c], Chain::Solana, RiskProfile::High);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[1].score, results[2].score);
        // Highest cap first, then symbol ascending among equal caps
        assert_eq!(results[0].token.symbol, "MMM");
        assert_eq!(results[1].token.symbol, "AAA");
        assert_eq!(results[2].token.symbol, "ZZZ");
    }

    #[test]
    fn test_volatility_windows() {
        let thresholds_pass = |t: TokenRecord| {
            let (results, _) = filter_and_rank(&[t], Chain::Ethereum, RiskProfile::Low);
            results.len() == 1
        };

        // 1h breach rejects even when 24h is calm
        let mut t = token("AAA", Some(Chain::Ethereum), 5.0e9, 2.0e8, 1.0, 400, false);
        t.percent_change_1h = Some(6.0);
        assert!(!thresholds_pass(t));

        // 7d breach rejects
        let mut t = token("AAA", Some(Chain::Ethereum), 5.0e9, 2.0e8, 1.0, 400, false);
        t.percent_change_7d = Some(-25.0);
        assert!(!thresholds_pass(t));

        // Unknown windows are skipped
        let t = token("AAA", Some(Chain::Ethereum), 5.0e9, 2.0e8, 1.0, 400, false);
        assert!(thresholds_pass(t));
    }
}
