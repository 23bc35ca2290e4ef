//! Type definitions for the wallet risk table
//! Core data structures shared by the store, the query layer and the API

use serde::Serialize;
use serde_json::{Map, Value};

/// Risk level classification for a wallet score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    /// `wallet_score < 5`
    Low,
    /// `5 <= wallet_score < 10`
    Medium,
    /// `wallet_score >= 10`
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢",
            RiskLevel::Medium => "🟠",
            RiskLevel::High => "🔴",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the precomputed score table.
///
/// The four required columns are typed fields; every other column of the
/// source is kept in `extra`, in header order, and serialized flat next to
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletRecord {
    pub wallet_id: String,
    /// Aggregate graph-based risk score (higher = riskier)
    pub wallet_score: f64,
    /// Fraction of transactions linked to illicit counterparties
    pub illicit_ratio: f64,
    /// Highest risk score among connected entities
    pub max_score: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WalletRecord {
    pub fn new(
        wallet_id: impl Into<String>,
        wallet_score: f64,
        illicit_ratio: f64,
        max_score: f64,
    ) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            wallet_score,
            illicit_ratio,
            max_score,
            extra: Map::new(),
        }
    }

    /// Attach a pass-through column
    pub fn with_extra(mut self, column: impl Into<String>, value: Value) -> Self {
        self.extra.insert(column.into(), value);
        self
    }
}

/// Bucket counts over the whole table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub total_wallets: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

impl SummaryCounts {
    /// Count one wallet into its bucket
    pub fn record(&mut self, level: RiskLevel) {
        self.total_wallets += 1;
        match level {
            RiskLevel::High => self.high_risk += 1,
            RiskLevel::Medium => self.medium_risk += 1,
            RiskLevel::Low => self.low_risk += 1,
        }
    }
}
