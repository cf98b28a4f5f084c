use thiserror::Error;

#[derive(Error, Debug)]
pub enum HypeError {
    #[error("API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Page {page} returned HTTP {status}")]
    HttpStatus { page: usize, status: u16 },

    #[error("Page {page} could not be parsed: {message}")]
    Parse { page: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Filesystem,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HypeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HypeError::Network(_) | HypeError::HttpStatus { .. } => ErrorCategory::Network,
            HypeError::Parse { .. } | HypeError::Serialization(_) | HypeError::Csv(_) => {
                ErrorCategory::Data
            }
            HypeError::Io(_) => ErrorCategory::Filesystem,
            HypeError::Config { .. }
            | HypeError::ConfigValidation { .. }
            | HypeError::InvalidConfigValue { .. }
            | HypeError::MissingConfig { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 單頁失敗只會讓樣本變小
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Filesystem => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HypeError::Network(_) => "Could not reach the search API".to_string(),
            HypeError::HttpStatus { page, status } => {
                format!("The search API rejected page {} (HTTP {})", page, status)
            }
            HypeError::Parse { page, .. } => {
                format!("The search API sent an unexpected response for page {}", page)
            }
            HypeError::Io(e) => format!("Could not write output: {}", e),
            HypeError::Serialization(_) | HypeError::Csv(_) => {
                "Could not serialize the hype report".to_string()
            }
            HypeError::Config { message } => format!("Configuration problem: {}", message),
            HypeError::ConfigValidation { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            HypeError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            HypeError::MissingConfig { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the endpoint URL",
            ErrorCategory::Data => "Verify the endpoint speaks the HN Algolia search API",
            ErrorCategory::Filesystem => "Check that the output directory is writable",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, HypeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_is_data_category() {
        let err = HypeError::Parse {
            page: 3,
            message: "missing field `hits`".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("page 3"));
    }

    #[test]
    fn test_http_status_is_network_category() {
        let err = HypeError::HttpStatus {
            page: 0,
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "Page 0 returned HTTP 503");
    }
}
