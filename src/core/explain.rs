//! Explanation Engine
//!
//! Turns a wallet's numeric fields into the human-readable reasons shown
//! next to its score. Rules are independent and always reported in the
//! same order:
//! 1. illicit exposure (`illicit_ratio > 0.3`)
//! 2. risky cluster (`max_score > 8`)
//! 3. elevated score (`wallet_score > 10`)
//!
//! A wallet that trips none of them gets the single fallback reason.

use crate::models::types::WalletRecord;
use crate::utils::constants::{
    CLUSTER_MAX_SCORE_THRESHOLD, ELEVATED_WALLET_SCORE_THRESHOLD, ILLICIT_RATIO_THRESHOLD,
    REASON_ELEVATED_SCORE, REASON_ILLICIT_EXPOSURE, REASON_NO_INDICATORS, REASON_RISKY_CLUSTER,
};

/// Reasons explaining a wallet's risk, in priority order
pub fn explain(record: &WalletRecord) -> Vec<String> {
    let rules: [(bool, &str); 3] = [
        (
            record.illicit_ratio > ILLICIT_RATIO_THRESHOLD,
            REASON_ILLICIT_EXPOSURE,
        ),
        (
            record.max_score > CLUSTER_MAX_SCORE_THRESHOLD,
            REASON_RISKY_CLUSTER,
        ),
        (
            record.wallet_score > ELEVATED_WALLET_SCORE_THRESHOLD,
            REASON_ELEVATED_SCORE,
        ),
    ];

    let reasons: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, reason)| reason.to_string())
        .collect();

    if reasons.is_empty() {
        vec![REASON_NO_INDICATORS.to_string()]
    } else {
        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(illicit_ratio: f64, max_score: f64, wallet_score: f64) -> WalletRecord {
        WalletRecord::new("w", wallet_score, illicit_ratio, max_score)
    }

    #[test]
    fn test_all_indicators_in_order() {
        let reasons = explain(&wallet(0.5, 9.0, 11.0));
        assert_eq!(
            reasons,
            vec![
                "High exposure to illicit transactions",
                "Connected to high-risk transaction clusters",
                "Overall elevated graph-based risk",
            ]
        );
    }

    #[test]
    fn test_clean_wallet_fallback() {
        let reasons = explain(&wallet(0.1, 2.0, 1.0));
        assert_eq!(reasons, vec!["No strong laundering indicators detected"]);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let reasons = explain(&wallet(0.31, 8.0, 10.0));
        assert_eq!(reasons, vec!["High exposure to illicit transactions"]);

        let reasons = explain(&wallet(0.3, 8.0, 10.0));
        assert_eq!(reasons, vec!["No strong laundering indicators detected"]);
    }

    #[test]
    fn test_order_kept_when_first_rule_silent() {
        let reasons = explain(&wallet(0.0, 8.5, 10.5));
        assert_eq!(
            reasons,
            vec![
                "Connected to high-risk transaction clusters",
                "Overall elevated graph-based risk",
            ]
        );
    }

    #[test]
    fn test_fallback_never_mixed() {
        for reasons in [
            explain(&wallet(0.9, 0.0, 0.0)),
            explain(&wallet(0.0, 9.0, 0.0)),
            explain(&wallet(0.0, 0.0, 12.0)),
        ] {
            assert_eq!(reasons.len(), 1);
            assert!(!reasons.contains(&REASON_NO_INDICATORS.to_string()));
        }
    }
}
