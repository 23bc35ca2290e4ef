//! Risk Classification
//! Maps a raw wallet score onto the Low / Medium / High buckets

use crate::models::types::RiskLevel;
use crate::utils::constants::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};

/// Classify a wallet score.
///
/// Each tier is closed at its lower bound: exactly 10 is High, exactly 5
/// is Medium. Anything that compares below 5, NaN included, is Low.
pub fn classify(score: f64) -> RiskLevel {
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
