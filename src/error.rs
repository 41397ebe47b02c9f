//! Error handling for gsd-forge

use thiserror::Error;

/// Main error type for gsd-forge
#[derive(Error, Debug, Clone)]
pub enum GsdForgeError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("No usable domains in {path}")]
    EmptyCorpus { path: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GsdForgeError {
    /// Create a file-not-found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an empty-corpus error
    pub fn empty_corpus(path: impl Into<String>) -> Self {
        Self::EmptyCorpus { path: path.into() }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a rate limit error
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { path } => {
                format!("✗ Error: File '{}' not found\n💡 Check the path and try again", path)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("✗ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::EmptyCorpus { path } => {
                format!("✗ No domains to process in '{}'\n💡 The input file has no non-blank lines", path)
            }
            Self::Parse { message, .. } => {
                format!("✗ Parse error: {}\n💡 This might be a temporary issue, try again", message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("✗ Network error{}: {}\n💡 Check your internet connection", status, message)
            }
            Self::RateLimit { message, retry_after } => {
                let retry = retry_after.map_or(String::new(), |s| format!(" Retry in {}s.", s));
                format!("✗ Rate limit exceeded: {}{}\n💡 Wait a while before retrying", message, retry)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("✗ Operation '{}' timed out after {}s\n💡 Try again or increase the timeout", operation, timeout_secs)
            }
            Self::Validation { message } => {
                format!("✗ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Cli { message } => {
                format!("✗ Command error: {}\n💡 Use --help for usage information", message)
            }
            Self::Internal { message } => {
                format!("✗ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for GsdForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<reqwest::Error> for GsdForgeError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", 30)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for GsdForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GsdForgeError>;
