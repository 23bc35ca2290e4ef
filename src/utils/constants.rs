//! Constants Module - Single Source of Truth
//!
//! Risk thresholds, explanation strings and server defaults used across
//! the application. Other modules refer to these instead of literals.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "AML Wallet Risk API";

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "AML Backend";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message returned by the root endpoint
pub const ROOT_MESSAGE: &str = "AML Backend is running";

// ============================================
// DATA SOURCE
// ============================================

/// Default location of the precomputed score table
pub const DEFAULT_DATA_PATH: &str = "data/wallet_scores.csv";

pub const COLUMN_WALLET_ID: &str = "wallet_id";
pub const COLUMN_WALLET_SCORE: &str = "wallet_score";
pub const COLUMN_ILLICIT_RATIO: &str = "illicit_ratio";
pub const COLUMN_MAX_SCORE: &str = "max_score";

/// Columns every score table must carry
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COLUMN_WALLET_ID,
    COLUMN_WALLET_SCORE,
    COLUMN_ILLICIT_RATIO,
    COLUMN_MAX_SCORE,
];

/// Field the API attaches to ranked and detailed wallets; a source column
/// with this name would collide with it
pub const COLUMN_RISK_LEVEL: &str = "risk_level";

// ============================================
// RISK CLASSIFICATION
// ============================================

/// `wallet_score >= 10` is High risk
pub const HIGH_RISK_THRESHOLD: f64 = 10.0;

/// `5 <= wallet_score < 10` is Medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 5.0;

// ============================================
// EXPLANATION RULES (strict greater-than)
// ============================================

pub const ILLICIT_RATIO_THRESHOLD: f64 = 0.3;
pub const CLUSTER_MAX_SCORE_THRESHOLD: f64 = 8.0;
pub const ELEVATED_WALLET_SCORE_THRESHOLD: f64 = 10.0;

pub const REASON_ILLICIT_EXPOSURE: &str = "High exposure to illicit transactions";
pub const REASON_RISKY_CLUSTER: &str = "Connected to high-risk transaction clusters";
pub const REASON_ELEVATED_SCORE: &str = "Overall elevated graph-based risk";
pub const REASON_NO_INDICATORS: &str = "No strong laundering indicators detected";

// ============================================
// API DEFAULTS
// ============================================

/// Default `n` for the top wallets endpoint
pub const DEFAULT_TOP_N: i64 = 5;

/// Message carried by every wallet lookup miss
pub const WALLET_NOT_FOUND_MESSAGE: &str = "Wallet not found";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 256;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
