/// Interactive selection prompts
///
/// Used only when --chain / --risk are absent. Parsing is split from the
/// read loops so it can be tested without a terminal. Invalid input
/// re-prompts; EOF on stdin is a hard error (non-interactive run without
/// the selection flags).
use std::io::{self, BufRead, Write};

use colored::*;

use crate::filtering::RiskProfile;
use crate::tokens::types::Chain;

/// Accepts the menu number or the chain name.
pub fn parse_chain_choice(input: &str) -> Option<Chain> {
    match input.trim().to_lowercase().as_str() {
        "1" => Some(Chain::Ethereum),
        "2" => Some(Chain::Solana),
        other => Chain::from_str(other),
    }
}

/// Accepts the menu number or the tier name.
pub fn parse_risk_choice(input: &str) -> Option<RiskProfile> {
    match input.trim().to_lowercase().as_str() {
        "1" => Some(RiskProfile::Low),
        "2" => Some(RiskProfile::Medium),
        "3" => Some(RiskProfile::High),
        other => RiskProfile::from_str(other),
    }
}

/// Prompt for the blockchain until a valid choice is read.
pub fn prompt_chain() -> Result<Chain, String> {
    println!();
    println!("{}", "Select blockchain:".bright_white().bold());
    println!("  1. Ethereum");
    println!("  2. Solana");

    loop {
        let input = read_line("Choice [1-2]: ")?;
        match parse_chain_choice(&input) {
            Some(chain) => return Ok(chain),
            None => println!("{}", "Enter 1, 2, or a chain name.".yellow()),
        }
    }
}

/// Prompt for the risk tier until a valid choice is read.
pub fn prompt_risk() -> Result<RiskProfile, String> {
    println!();
    println!("{}", "Select risk tier:".bright_white().bold());
    println!("  1. Low    (established, large-cap tokens)");
    println!("  2. Medium (mid-cap tokens with some history)");
    println!("  3. High   (smaller, younger, more volatile tokens)");

    loop {
        let input = read_line("Choice [1-3]: ")?;
        match parse_risk_choice(&input) {
            Some(risk) => return Ok(risk),
            None => println!("{}", "Enter 1, 2, 3, or a tier name.".yellow()),
        }
    }
}

fn read_line(prompt_text: &str) -> Result<String, String> {
    print!("{}", prompt_text);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))?;

    let mut line = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    if bytes == 0 {
        return Err("stdin closed; use --chain and --risk for non-interactive runs".to_string());
    }

    Ok(line)
}
