//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so it can be grepped in logs
//! and mapped onto an HTTP status at the API boundary.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - DATA_xxx: score table load errors (fatal at startup)
//! - WALLET_xxx: lookup errors
//! - API_xxx: API errors
//! - CFG_xxx: Configuration errors

use std::fmt;

use crate::utils::constants::WALLET_NOT_FOUND_MESSAGE;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// True for the load-time failures that must stop the process
    pub fn is_load_error(&self) -> bool {
        self.code.is_fatal()
    }

    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::WalletNotFound
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Data Source Errors (1xx)
    // ============================================
    /// Score table file missing or unreadable
    DataSourceMissing,
    /// Row or field could not be parsed
    DataMalformed,
    /// Required column absent from the header
    DataMissingColumn,

    // ============================================
    // Lookup Errors (2xx)
    // ============================================
    /// No row matched the requested wallet_id
    WalletNotFound,

    // ============================================
    // API Errors (3xx)
    // ============================================
    /// Invalid request format
    ApiBadRequest,
    /// Internal server error
    ApiInternalError,

    // ============================================
    // Configuration Errors (4xx)
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataSourceMissing => "DATA_SOURCE_MISSING",
            Self::DataMalformed => "DATA_MALFORMED",
            Self::DataMissingColumn => "DATA_MISSING_COLUMN",

            Self::WalletNotFound => "WALLET_NOT_FOUND",

            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiInternalError => "API_INTERNAL_ERROR",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiBadRequest | Self::ConfigInvalidValue => 400,
            Self::WalletNotFound => 404,
            _ => 500,
        }
    }

    /// Load-time failures: the server must not start serving
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DataSourceMissing | Self::DataMalformed | Self::DataMissingColumn
        )
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Wallet lookup miss
    pub fn wallet_not_found() -> Self {
        Self::new(ErrorCode::WalletNotFound, WALLET_NOT_FOUND_MESSAGE)
    }

    /// Malformed score table
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::DataMalformed, msg)
    }

    /// Required columns absent
    pub fn missing_columns(columns: &[&str]) -> Self {
        Self::new(
            ErrorCode::DataMissingColumn,
            format!("Missing required column(s): {}", columns.join(", ")),
        )
    }

    /// Invalid configuration value
    pub fn invalid_config(key: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid value for {}: {:?}", key, value),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::with_source(ErrorCode::DataSourceMissing, "Score table not found", err)
        } else {
            Self::with_source(ErrorCode::DataSourceMissing, "IO error reading score table", err)
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        let message = match err.position() {
            Some(pos) => format!("CSV error at line {}", pos.line()),
            None => "CSV error".to_string(),
        };
        if err.is_io_error() {
            Self::with_source(ErrorCode::DataSourceMissing, message, err)
        } else {
            Self::with_source(ErrorCode::DataMalformed, message, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::wallet_not_found();
        assert_eq!(err.code, ErrorCode::WalletNotFound);
        assert_eq!(err.code_str(), "WALLET_NOT_FOUND");
        assert_eq!(err.message, "Wallet not found");
        assert!(err.is_not_found());
        assert!(!err.is_load_error());
    }

    #[test]
    fn test_fatal() {
        assert!(ErrorCode::DataSourceMissing.is_fatal());
        assert!(ErrorCode::DataMalformed.is_fatal());
        assert!(ErrorCode::DataMissingColumn.is_fatal());
        assert!(!ErrorCode::WalletNotFound.is_fatal());
    }

    #[test]
    fn test_codes_follow_category_prefixes() {
        let codes = [
            ErrorCode::DataSourceMissing,
            ErrorCode::DataMalformed,
            ErrorCode::DataMissingColumn,
            ErrorCode::WalletNotFound,
            ErrorCode::ApiBadRequest,
            ErrorCode::ApiInternalError,
            ErrorCode::ConfigInvalidValue,
        ];
        for code in codes {
            let s = code.as_str();
            assert!(
                ["DATA_", "WALLET_", "API_", "CFG_"]
                    .iter()
                    .any(|prefix| s.starts_with(prefix)),
                "{}",
                s
            );
        }
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::ApiBadRequest.http_status(), 400);
        assert_eq!(ErrorCode::WalletNotFound.http_status(), 404);
        assert_eq!(ErrorCode::DataMalformed.http_status(), 500);
    }

    #[test]
    fn test_io_not_found_maps_to_missing_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err: AppError = io.into();
        assert_eq!(err.code, ErrorCode::DataSourceMissing);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_columns_message() {
        let err = AppError::missing_columns(&["max_score", "illicit_ratio"]);
        assert_eq!(err.code, ErrorCode::DataMissingColumn);
        assert!(err.to_string().contains("max_score, illicit_ratio"));
    }
}
