/// Structured error handling for tokenscout
///
/// One top-level error type with category sub-enums. Network and auth
/// failures abort the run; an empty recommendation list is NOT an error
/// and never appears here.

// =============================================================================
// MAIN ERROR TYPE
// =============================================================================

#[derive(Debug, Clone)]
pub enum ScoutError {
    // Network connectivity errors
    Network(NetworkError),

    // API authentication errors
    Auth(AuthError),

    // Configuration errors
    Configuration(ConfigurationError),

    // Data parsing & validation errors
    Data(DataError),
}

impl std::fmt::Display for ScoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoutError::Network(e) => write!(f, "Network Error: {}", e),
            ScoutError::Auth(e) => write!(f, "Auth Error: {}", e),
            ScoutError::Configuration(e) => write!(f, "Configuration Error: {}", e),
            ScoutError::Data(e) => write!(f, "Data Error: {}", e),
        }
    }
}

impl std::error::Error for ScoutError {}

// =============================================================================
// NETWORK ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum NetworkError {
    ConnectionTimeout {
        endpoint: String,
        timeout_ms: u64,
    },
    HttpStatusError {
        endpoint: String,
        status: u16,
        body: Option<String>,
    },
    Generic {
        message: String,
    },
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::ConnectionTimeout {
                endpoint,
                timeout_ms,
            } => {
                write!(
                    f,
                    "Connection timeout to {} after {}ms",
                    endpoint, timeout_ms
                )
            }
            NetworkError::HttpStatusError {
                endpoint,
                status,
                body,
            } => {
                write!(
                    f,
                    "HTTP {} from {}: {}",
                    status,
                    endpoint,
                    body.as_deref().unwrap_or("No body")
                )
            }
            NetworkError::Generic { message } => write!(f, "{}", message),
        }
    }
}

// =============================================================================
// AUTH ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum AuthError {
    ApiKeyInvalid {
        provider_name: String,
    },
    ApiKeyMissing,
    AccessDenied {
        endpoint: String,
        status: u16,
    },
    Generic {
        message: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::ApiKeyInvalid { provider_name } => {
                write!(f, "API key rejected by {}", provider_name)
            }
            AuthError::ApiKeyMissing => {
                write!(
                    f,
                    "No API key configured (set it in config.json or CMC_API_KEY)"
                )
            }
            AuthError::AccessDenied { endpoint, status } => {
                write!(f, "Access denied (HTTP {}) for {}", status, endpoint)
            }
            AuthError::Generic { message } => write!(f, "{}", message),
        }
    }
}

// =============================================================================
// CONFIGURATION ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum ConfigurationError {
    InvalidConfig { field: String, reason: String },
    MissingConfig { field: String },
    FileNotFound { path: String },
    Generic { message: String },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::InvalidConfig { field, reason } => {
                write!(f, "Invalid config field '{}': {}", field, reason)
            }
            ConfigurationError::MissingConfig { field } => {
                write!(f, "Missing config field '{}'", field)
            }
            ConfigurationError::FileNotFound { path } => {
                write!(f, "Config file not found: {}", path)
            }
            ConfigurationError::Generic { message } => write!(f, "{}", message),
        }
    }
}

// =============================================================================
// DATA ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum DataError {
    ParseError {
        data_type: String,
        error: String,
    },
    InvalidFormat {
        expected: String,
        received: String,
    },
    Generic {
        message: String,
    },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::ParseError { data_type, error } => {
                write!(f, "Failed to parse {}: {}", data_type, error)
            }
            DataError::InvalidFormat { expected, received } => {
                write!(f, "Expected {}, received {}", expected, received)
            }
            DataError::Generic { message } => write!(f, "{}", message),
        }
    }
}

// =============================================================================
// CONVERSIONS FROM LIBRARY ERROR TYPES
// =============================================================================

impl From<reqwest::Error> for ScoutError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ScoutError::Network(NetworkError::ConnectionTimeout {
                endpoint: err
                    .url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                timeout_ms: 0,
            });
        }
        ScoutError::Network(NetworkError::Generic {
            message: format!("HTTP request failed: {}", err),
        })
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(err: serde_json::Error) -> Self {
        ScoutError::Data(DataError::ParseError {
            data_type: "JSON".to_string(),
            error: err.to_string(),
        })
    }
}

// =============================================================================
// STRUCTURED ERROR BUILDERS
// =============================================================================

impl ScoutError {
    /// Create a generic network error
    pub fn network_error(message: impl Into<String>) -> Self {
        ScoutError::Network(NetworkError::Generic {
            message: message.into(),
        })
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        ScoutError::Data(DataError::InvalidFormat {
            expected: "valid response".to_string(),
            received: message.into(),
        })
    }

    /// Create a configuration error
    pub fn configuration_error(message: impl Into<String>) -> Self {
        ScoutError::Configuration(ConfigurationError::Generic {
            message: message.into(),
        })
    }

    /// True when the failure is an authentication problem the user must fix
    pub fn is_auth(&self) -> bool {
        matches!(self, ScoutError::Auth(_))
    }
}
