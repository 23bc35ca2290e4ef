//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::models::errors::AppError;
use crate::models::types::{RiskLevel, WalletRecord};

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message.clone(),
            details: std::error::Error::source(err).map(|source| source.to_string()),
        }
    }
}

// ============================================
// Wallet Queries
// ============================================

/// `?n=` for the top wallets endpoint
#[derive(Debug, Default, Deserialize)]
pub struct TopWalletsQuery {
    pub n: Option<i64>,
}

/// A wallet row with its risk level attached
#[derive(Debug, Clone, Serialize)]
pub struct RankedWallet {
    #[serde(flatten)]
    pub wallet: WalletRecord,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletExplanation {
    pub wallet_id: String,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub reasons: Vec<String>,
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct RootData {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub wallets_loaded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope_omits_data() {
        let err = AppError::wallet_not_found();
        let body = serde_json::to_value(ApiResponse::error(ApiError::from(&err), 0.5)).unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], json!("WALLET_NOT_FOUND"));
        assert_eq!(body["error"]["message"], json!("Wallet not found"));
        assert!(body.get("data").is_none());
        assert!(body["error"].get("details").is_none());
    }

    #[test]
    fn test_ranked_wallet_is_flat() {
        let ranked = RankedWallet {
            wallet: WalletRecord::new("w9", 10.0, 0.2, 3.0).with_extra("chain", json!("eth")),
            risk_level: RiskLevel::High,
        };
        assert_eq!(
            serde_json::to_value(&ranked).unwrap(),
            json!({
                "wallet_id": "w9",
                "wallet_score": 10.0,
                "illicit_ratio": 0.2,
                "max_score": 3.0,
                "chain": "eth",
                "risk_level": "High"
            })
        );
    }
}
