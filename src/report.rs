/// Report rendering and persistence
///
/// Two output targets per run: a colored console printout and a plain-text
/// report file under reports/. Rendering is pure string building so the
/// tests never touch the terminal or the filesystem.
use std::fs;

use colored::*;

use crate::arguments::is_debug_report_enabled;
use crate::filtering::{RankedResult, RiskProfile};
use crate::logger::{self, LogTag};
use crate::paths;
use crate::tokens::types::Chain;

/// Format a USD price: scientific notation for dust, fixed otherwise
pub fn format_price(price: f64) -> String {
    if price != 0.0 && price.abs() < 0.00001 {
        format!("${:.2e}", price)
    } else {
        format!("${:.8}", price)
    }
}

/// Thousands separators for large USD amounts
pub fn format_usd_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::new();

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if whole < 0 {
        format!("-${}", out)
    } else {
        format!("${}", out)
    }
}

/// Render the plain-text report written to reports/.
pub fn render_report(results: &[RankedResult], chain: Chain, risk: RiskProfile) -> String {
    let mut report = String::new();

    report.push_str(&format!(
        "TOKEN RECOMMENDATIONS - {} / {} risk\n",
        chain.as_str().to_uppercase(),
        risk.as_str()
    ));
    report.push_str(&format!(
        "Generated: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    report.push_str(&format!("{}\n\n", "=".repeat(70)));

    if results.is_empty() {
        report.push_str("No tokens matched the selected chain and risk thresholds.\n");
        report.push_str("Try a higher risk tier or re-run later when market conditions change.\n");
        return report;
    }

    for (i, result) in results.iter().enumerate() {
        let token = &result.token;

        report.push_str(&format!(
            "{}. {} ({}) - Score: {:.1}/100\n",
            i + 1,
            token.name,
            token.symbol,
            result.score
        ));
        report.push_str(&format!("   Price:      {}\n", format_price(token.price_usd)));
        report.push_str(&format!(
            "   Market Cap: {}\n",
            format_usd_amount(token.market_cap)
        ));
        report.push_str(&format!(
            "   24h Volume: {}\n",
            format_usd_amount(token.volume_24h)
        ));
        report.push_str(&format!(
            "   24h Change: {:+.2}%\n",
            token.percent_change_24h
        ));
        if let Some(change_7d) = token.percent_change_7d {
            report.push_str(&format!("   7d Change:  {:+.2}%\n", change_7d));
        }
        report.push_str(&format!("   Listed:     {} days ago\n", token.listing_age_days));
        if let Some(rank) = token.cmc_rank {
            report.push_str(&format!("   CMC Rank:   #{}\n", rank));
        }

        push_swot_section(&mut report, "Strengths", &result.analysis.strengths);
        push_swot_section(&mut report, "Weaknesses", &result.analysis.weaknesses);
        push_swot_section(&mut report, "Opportunities", &result.analysis.opportunities);
        push_swot_section(&mut report, "Risks", &result.analysis.risks);

        report.push('\n');
    }

    report.push_str(&format!("{}\n", "=".repeat(70)));
    report.push_str("Not financial advice. Screener output reflects a single snapshot.\n");

    report
}

fn push_swot_section(report: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    report.push_str(&format!("   {}:\n", title));
    for item in items {
        report.push_str(&format!("     - {}\n", item));
    }
}

/// Print the colored console version of the report.
pub fn print_results(results: &[RankedResult], chain: Chain, risk: RiskProfile) {
    println!();
    println!(
        "{}",
        format!(
            "  TOKEN RECOMMENDATIONS - {} / {} risk",
            chain.as_str().to_uppercase(),
            risk.as_str()
        )
        .bright_cyan()
        .bold()
    );
    println!("{}", "=".repeat(70).bright_blue());

    if results.is_empty() {
        println!(
            "{}",
            "No tokens matched the selected chain and risk thresholds.".yellow()
        );
        println!("Try a higher risk tier or re-run later when market conditions change.");
        return;
    }

    for (i, result) in results.iter().enumerate() {
        let token = &result.token;
        let change_colored = if token.percent_change_24h >= 0.0 {
            format!("{:+.2}%", token.percent_change_24h).green()
        } else {
            format!("{:+.2}%", token.percent_change_24h).red()
        };

        println!();
        println!(
            "{} {} ({}) {}",
            format!("{}.", i + 1).bright_white().bold(),
            token.name.bright_green().bold(),
            token.symbol.bright_yellow(),
            format!("[{:.1}/100]", result.score).bright_magenta().bold()
        );
        println!(
            "   {} {}   {} {}   {} {}",
            "Price:".dimmed(),
            format_price(token.price_usd).bright_white(),
            "Cap:".dimmed(),
            format_usd_amount(token.market_cap).bright_white(),
            "24h:".dimmed(),
            change_colored
        );

        let ratio = token
            .volume_to_mcap()
            .map(|r| format!("{:.1}%", r * 100.0))
            .unwrap_or_else(|| "n/a".to_string());
        let change_7d = token
            .percent_change_7d
            .map(|c| format!("{:+.2}%", c))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "   {} {}   {} {}   {} {}   {} {}",
            "Vol:".dimmed(),
            format_usd_amount(token.volume_24h).bright_white(),
            "Vol/Cap:".dimmed(),
            ratio.bright_white(),
            "7d:".dimmed(),
            change_7d.bright_white(),
            "Age:".dimmed(),
            format!("{}d", token.listing_age_days).bright_white()
        );

        if let Some(rank) = token.cmc_rank {
            println!("   {} #{}", "CMC Rank:".dimmed(), rank);
        }
        if !token.tags.is_empty() {
            println!("   {} {}", "Tags:".dimmed(), token.tags.join(", ").dimmed());
        }

        print_swot_line("Strengths", &result.analysis.strengths, Color::Green);
        print_swot_line("Weaknesses", &result.analysis.weaknesses, Color::Yellow);
        print_swot_line("Opportunities", &result.analysis.opportunities, Color::Cyan);
        print_swot_line("Risks", &result.analysis.risks, Color::Red);
    }

    println!();
    println!("{}", "=".repeat(70).bright_blue());
    println!("{}", "Not financial advice.".dimmed());
}

fn print_swot_line(title: &str, items: &[String], color: Color) {
    if items.is_empty() {
        return;
    }
    println!("   {}", format!("{}:", title).color(color).bold());
    for item in items {
        println!("     - {}", item);
    }
}

/// Write the plain-text report to reports/ and return the path.
pub fn write_report(
    results: &[RankedResult],
    chain: Chain,
    risk: RiskProfile,
) -> Result<String, String> {
    let path = paths::get_report_file_path();
    let path_str = path.display().to_string();
    let content = render_report(results, chain, risk);

    if is_debug_report_enabled() {
        logger::debug(
            LogTag::Report,
            &format!("Report is {} bytes, writing to {}", content.len(), path_str),
        );
    }

    fs::write(&path, &content)
        .map_err(|e| format!("Failed to write report {}: {}", path_str, e))?;

    logger::info(LogTag::Report, &format!("Report saved to {}", path_str));
    Ok(path_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SwotAnalysis;
    use crate::tokens::types::TokenRecord;

    fn result(symbol: &str, score: f64) -> RankedResult {
        RankedResult {
            token: TokenRecord {
                symbol: symbol.to_string(),
                name: format!("{} Coin", symbol),
                chain: Some(Chain::Ethereum),
                price_usd: 12.345,
                market_cap: 2_500_000_000.0,
                volume_24h: 300_000_000.0,
                percent_change_24h: -2.5,
                percent_change_1h: None,
                percent_change_7d: Some(4.0),
                listing_age_days: 500,
                date_added: None,
                cmc_rank: Some(42),
                num_market_pairs: Some(20),
                tags: vec![],
                is_stablecoin: false,
            },
            score,
            analysis: SwotAnalysis {
                strengths: vec!["Strong market position (Rank #42)".to_string()],
                weaknesses: vec![],
                opportunities: vec!["Positive 7-day trend (+4.0%)".to_string()],
                risks: vec![],
            },
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.345), "$12.34500000");
        assert_eq!(format_price(0.0), "$0.00000000");
        // Dust prices switch to scientific notation
        assert!(format_price(0.000000123).contains('e'));
    }

    #[test]
    fn test_format_usd_amount() {
        assert_eq!(format_usd_amount(2_500_000_000.0), "$2,500,000,000");
        assert_eq!(format_usd_amount(999.0), "$999");
        assert_eq!(format_usd_amount(1000.0), "$1,000");
        assert_eq!(format_usd_amount(-1234567.0), "-$1,234,567");
    }

    #[test]
    fn test_render_report_contains_tokens_in_order() {
        let results = vec![result("AAA", 80.0), result("BBB", 60.0)];
        let report = render_report(&results, Chain::Ethereum, RiskProfile::Low);

        assert!(report.contains("ETHEREUM / low risk"));
        let a = report.find("1. AAA Coin").unwrap();
        let b = report.find("2. BBB Coin").unwrap();
        assert!(a < b);
        assert!(report.contains("Score: 80.0/100"));
        assert!(report.contains("Market Cap: $2,500,000,000"));
        assert!(report.contains("Strengths:"));
        assert!(report.contains("Opportunities:"));
        // Empty SWOT sections are omitted entirely
        assert!(!report.contains("Weaknesses:"));
    }

    #[test]
    fn test_render_report_empty_results() {
        let report = render_report(&[], Chain::Solana, RiskProfile::High);
        assert!(report.contains("No tokens matched"));
        assert!(!report.contains("Score:"));
    }
}
