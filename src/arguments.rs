/// Centralized argument handling for tokenscout
///
/// Consolidates command-line argument parsing and debug flag checking:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag accessors for all modules
/// - Selection overrides (--chain / --risk) that skip the interactive prompts
/// - Help output
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

use crate::filtering::RiskProfile;
use crate::tokens::types::Chain;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// =============================================================================

/// API calls debug mode
pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api")
}

/// Token mapping/classification debug mode
pub fn is_debug_tokens_enabled() -> bool {
    has_arg("--debug-tokens")
}

/// Filtering pipeline debug mode
pub fn is_debug_filtering_enabled() -> bool {
    has_arg("--debug-filtering")
}

/// Scoring debug mode
pub fn is_debug_scoring_enabled() -> bool {
    has_arg("--debug-scoring")
}

/// Report generation debug mode
pub fn is_debug_report_enabled() -> bool {
    has_arg("--debug-report")
}

// =============================================================================
// SELECTION OVERRIDES
// =============================================================================

/// Chain selection from --chain <ethereum|solana>, skipping the prompt
pub fn get_chain_arg() -> Option<Chain> {
    get_arg_value("--chain").and_then(|s| Chain::from_str(&s))
}

/// Risk tier selection from --risk <low|medium|high>, skipping the prompt
pub fn get_risk_arg() -> Option<RiskProfile> {
    get_arg_value("--risk").and_then(|s| RiskProfile::from_str(&s))
}

/// Number of tokens to include in the report (defaults to config). Clamped 1-50.
pub fn get_top_count() -> Option<usize> {
    get_arg_value("--top")
        .and_then(|s| s.parse::<usize>().ok())
        .map(|n| n.clamp(1, 50))
}

/// Listings page size override (--limit). Clamped 1-5000.
pub fn get_listing_limit() -> Option<usize> {
    get_arg_value("--limit")
        .and_then(|s| s.parse::<usize>().ok())
        .map(|n| n.clamp(1, 5000))
}

/// Config file path override (--config), defaults to config.json
pub fn get_config_path() -> String {
    get_arg_value("--config").unwrap_or_else(|| "config.json".to_string())
}

// =============================================================================
// HELP SYSTEM
// =============================================================================

/// Displays the help menu with all available flags and their descriptions
pub fn print_help() {
    println!("tokenscout - CoinMarketCap token screener");
    println!();
    println!("USAGE:");
    println!("    tokenscout [FLAGS]");
    println!();
    println!("Without flags, tokenscout prompts for the blockchain and risk tier.");
    println!();
    println!("SELECTION FLAGS:");
    println!("    --chain <ethereum|solana>  Skip the blockchain prompt");
    println!("    --risk <low|medium|high>   Skip the risk tier prompt");
    println!("    --top <n>                  Tokens in the report (default 10, max 50)");
    println!("    --limit <n>                Listings fetched from the API (default 5000)");
    println!("    --config <path>            Config file path (default config.json)");
    println!("    --help, -h                 Show this help message");
    println!();
    println!("OUTPUT FLAGS:");
    println!("    --quiet, -q                Errors only on the console");
    println!("    --verbose, -v              Very detailed trace output");
    println!();
    println!("DEBUG FLAGS:");
    println!("    --debug-api                API calls debug mode");
    println!("    --debug-tokens             Token mapping debug mode");
    println!("    --debug-filtering          Filtering pipeline debug mode");
    println!("    --debug-scoring            Scoring debug mode");
    println!("    --debug-report             Report generation debug mode");
    println!();
    println!("EXAMPLES:");
    println!("    tokenscout                                  # Interactive prompts");
    println!("    tokenscout --chain solana --risk high       # Non-interactive run");
    println!("    tokenscout --chain ethereum --risk low --top 5");
    println!("    tokenscout --debug-filtering --chain solana --risk medium");
}

// =============================================================================
// UTILITY FUNCTIONS
// =============================================================================

/// Checks if any debug mode is enabled
pub fn is_any_debug_enabled() -> bool {
    is_debug_api_enabled()
        || is_debug_tokens_enabled()
        || is_debug_filtering_enabled()
        || is_debug_scoring_enabled()
        || is_debug_report_enabled()
}

/// Gets a list of all enabled debug modes
pub fn get_enabled_debug_modes() -> Vec<&'static str> {
    let mut modes = Vec::new();

    if is_debug_api_enabled() {
        modes.push("api");
    }
    if is_debug_tokens_enabled() {
        modes.push("tokens");
    }
    if is_debug_filtering_enabled() {
        modes.push("filtering");
    }
    if is_debug_scoring_enabled() {
        modes.push("scoring");
    }
    if is_debug_report_enabled() {
        modes.push("report");
    }

    modes
}

/// Prints debug information about current arguments and enabled debug modes
pub fn print_debug_info() {
    if !is_any_debug_enabled() {
        return;
    }
    println!("Command-line arguments: {:?}", get_cmd_args());
    println!("Enabled debug modes: {:?}", get_enabled_debug_modes());
}

// =============================================================================
// COMMON ARGUMENT PATTERNS
// =============================================================================

/// Common argument parsing patterns
pub mod patterns {
    use super::*;

    /// Checks for help flags
    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }

    /// Checks for version flags
    pub fn is_version_requested() -> bool {
        has_arg("--version") || has_arg("-V")
    }

    /// Checks for quiet/silent mode
    pub fn is_quiet_mode() -> bool {
        has_arg("--quiet") || has_arg("-q")
    }

    /// Checks for verbose mode
    pub fn is_verbose_mode() -> bool {
        has_arg("--verbose") || has_arg("-v")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // CMD_ARGS is process-global, so tests touching it run serialized
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_and_get_args() {
        let _guard = TEST_LOCK.lock().unwrap();
        let test_args = vec![
            "tokenscout".to_string(),
            "--chain".to_string(),
            "solana".to_string(),
        ];

        set_cmd_args(test_args.clone());
        assert_eq!(get_cmd_args(), test_args);
    }

    #[test]
    fn test_has_arg_and_values() {
        let _guard = TEST_LOCK.lock().unwrap();
        set_cmd_args(vec![
            "tokenscout".to_string(),
            "--debug-filtering".to_string(),
            "--top".to_string(),
            "99".to_string(),
        ]);

        assert!(has_arg("--debug-filtering"));
        assert!(!has_arg("--debug-api"));
        assert!(is_debug_filtering_enabled());
        assert!(is_any_debug_enabled());
        assert!(get_enabled_debug_modes().contains(&"filtering"));
        // --top is clamped to the 1-50 range
        assert_eq!(get_top_count(), Some(50));
    }

    #[test]
    fn test_selection_overrides() {
        let _guard = TEST_LOCK.lock().unwrap();
        set_cmd_args(vec![
            "tokenscout".to_string(),
            "--chain".to_string(),
            "Ethereum".to_string(),
            "--risk".to_string(),
            "HIGH".to_string(),
        ]);

        assert_eq!(get_chain_arg(), Some(Chain::Ethereum));
        assert_eq!(get_risk_arg(), Some(RiskProfile::High));
        assert_eq!(get_top_count(), None);
    }

    #[test]
    fn test_patterns() {
        let _guard = TEST_LOCK.lock().unwrap();
        set_cmd_args(vec!["tokenscout".to_string(), "--help".to_string()]);

        assert!(patterns::is_help_requested());
        assert!(!patterns::is_version_requested());
    }
}
