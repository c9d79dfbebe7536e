/// Templated SWOT analysis attached to each recommendation
///
/// The texts are canned policy, not derived from data; the selection rules
/// are what matters. Kept separate from scoring so replacing the wording
/// never touches the ranking.
use serde::Serialize;

use crate::filtering::RiskThresholds;
use crate::tokens::types::TokenRecord;

/// Rank at or above which a token counts as well-positioned
const STRONG_RANK_CEILING: i64 = 300;

/// Tags that count as a recognizable utility story
const UTILITY_TAGS: &[&str] = &["defi", "nft", "gaming", "layer-2", "governance"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub risks: Vec<String>,
}

impl SwotAnalysis {
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
            && self.weaknesses.is_empty()
            && self.opportunities.is_empty()
            && self.risks.is_empty()
    }
}

/// Build the SWOT block for a token that passed filtering.
pub fn analyze(token: &TokenRecord, thresholds: &RiskThresholds) -> SwotAnalysis {
    let mut swot = SwotAnalysis::default();

    // Market position
    if let Some(rank) = token.cmc_rank {
        if rank <= STRONG_RANK_CEILING {
            swot.strengths
                .push(format!("Strong market position (Rank #{})", rank));
        }
    }

    if token.listing_age_days > 365 {
        swot.strengths.push(format!(
            "Well-established ({:.1} years old)",
            token.listing_age_days as f64 / 365.0
        ));
    }

    // Volume health relative to the tier's volume/mcap band
    match token.volume_to_mcap() {
        Some(ratio) if ratio >= thresholds.volume_mcap_band.0 => {
            swot.strengths.push(format!(
                "Healthy trading volume ({:.1}% of market cap)",
                ratio * 100.0
            ));
        }
        _ => {
            swot.weaknesses
                .push("Lower than ideal trading volume".to_string());
        }
    }

    // Weekly trend
    if let Some(change_7d) = token.percent_change_7d {
        if change_7d > 0.0 {
            swot.opportunities
                .push(format!("Positive 7-day trend (+{:.1}%)", change_7d));
        } else {
            swot.risks
                .push(format!("Negative 7-day trend ({:.1}%)", change_7d));
        }
    }

    // Utility story
    let utilities: Vec<String> = token
        .tags
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| UTILITY_TAGS.contains(&t.as_str()))
        .collect();

    if utilities.is_empty() {
        swot.weaknesses
            .push("Limited clear utility cases".to_string());
    } else {
        swot.strengths
            .push(format!("Clear utility: {}", utilities.join(", ")));
    }

    swot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::RiskProfile;
    use crate::tokens::types::Chain;

    fn token() -> TokenRecord {
        TokenRecord {
            symbol: "TST".to_string(),
            name: "Test".to_string(),
            chain: Some(Chain::Solana),
            price_usd: 1.0,
            market_cap: 1.0e9,
            volume_24h: 5.0e7,
            percent_change_24h: 1.0,
            percent_change_1h: None,
            percent_change_7d: Some(6.3),
            listing_age_days: 800,
            date_added: None,
            cmc_rank: Some(120),
            num_market_pairs: Some(25),
            tags: vec!["DeFi".to_string(), "pow".to_string()],
            is_stablecoin: false,
        }
    }

    #[test]
    fn test_strengths_selected() {
        let swot = analyze(&token(), &RiskProfile::Low.thresholds());

        assert!(swot.strengths.iter().any(|s| s.contains("Rank #120")));
        assert!(swot.strengths.iter().any(|s| s.contains("2.2 years")));
        assert!(swot.strengths.iter().any(|s| s.contains("Clear utility: defi")));
        assert!(swot
            .opportunities
            .iter()
            .any(|s| s.contains("+6.3%")));
        assert!(swot.risks.is_empty());
    }

    #[test]
    fn test_negative_trend_is_a_risk() {
        let mut t = token();
        t.percent_change_7d = Some(-4.0);
        let swot = analyze(&t, &RiskProfile::Low.thresholds());

        assert!(swot.opportunities.is_empty());
        assert!(swot.risks.iter().any(|s| s.contains("-4.0%")));
    }

    #[test]
    fn test_thin_volume_and_no_utility_are_weaknesses() {
        let mut t = token();
        t.volume_24h = 1.0e6; // 0.1% of cap, below the low band floor
        t.tags = vec!["pow".to_string()];
        let swot = analyze(&t, &RiskProfile::Low.thresholds());

        assert!(swot
            .weaknesses
            .iter()
            .any(|s| s.contains("trading volume")));
        assert!(swot
            .weaknesses
            .iter()
            .any(|s| s.contains("utility")));
    }
}
