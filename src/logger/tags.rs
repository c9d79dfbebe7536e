/// Log tags identifying the module a message originates from
///
/// Tags drive per-module debug gating: `--debug-<key>` enables Debug-level
/// output for the tag whose `to_debug_key()` matches `<key>`.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Api,
    Tokens,
    Filtering,
    Scoring,
    Report,
    Test,
    Other(String),
}

impl LogTag {
    /// Key used in --debug-<key> command-line flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Api => "api".to_string(),
            LogTag::Tokens => "tokens".to_string(),
            LogTag::Filtering => "filtering".to_string(),
            LogTag::Scoring => "scoring".to_string(),
            LogTag::Report => "report".to_string(),
            LogTag::Test => "test".to_string(),
            LogTag::Other(s) => s.to_lowercase(),
        }
    }

    /// Uncolored tag text for file output
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Api => "API".to_string(),
            LogTag::Tokens => "TOKENS".to_string(),
            LogTag::Filtering => "FILTER".to_string(),
            LogTag::Scoring => "SCORE".to_string(),
            LogTag::Report => "REPORT".to_string(),
            LogTag::Test => "TEST".to_string(),
            LogTag::Other(s) => s.to_uppercase(),
        }
    }
}
