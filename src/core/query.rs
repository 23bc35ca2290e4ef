//! Query Service
//!
//! Read-only queries over the shared score table: full listing, top-N by
//! score, lookup by wallet_id and bucket counts.

use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

use super::classifier::classify;
use super::store::WalletStore;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{SummaryCounts, WalletRecord};

/// Query front-end over an immutable [`WalletStore`]
#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<WalletStore>,
}

impl QueryService {
    pub fn new(store: Arc<WalletStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &WalletStore {
        &self.store
    }

    /// Every row, verbatim, in source order
    pub fn list_all(&self) -> &[WalletRecord] {
        self.store.records()
    }

    /// The `n` highest-scoring wallets, highest first.
    ///
    /// The sort is stable so equal scores keep source order and repeated
    /// calls return the same sequence. `n <= 0` yields nothing; `n` past
    /// the row count yields every row.
    pub fn top_n(&self, n: i64) -> Vec<&WalletRecord> {
        if n <= 0 {
            return Vec::new();
        }
        let limit = usize::try_from(n).unwrap_or(usize::MAX);

        let mut ranked: Vec<&WalletRecord> = self.store.records().iter().collect();
        ranked.sort_by(|a, b| {
            b.wallet_score
                .partial_cmp(&a.wallet_score)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }

    /// Exact, case-sensitive lookup; the first matching row wins
    pub fn get_by_id(&self, wallet_id: &str) -> AppResult<&WalletRecord> {
        match self.store.position(wallet_id).and_then(|row| self.store.get(row)) {
            Some(record) => Ok(record),
            None => {
                debug!(wallet_id, "Wallet lookup miss");
                Err(AppError::wallet_not_found())
            }
        }
    }

    /// Bucket counts using the same thresholds as [`classify`]
    pub fn summary_counts(&self) -> SummaryCounts {
        let mut summary = SummaryCounts::default();
        for score in self.store.wallet_scores() {
            summary.record(classify(score));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    fn service(rows: &[(&str, f64)]) -> QueryService {
        let records = rows
            .iter()
            .map(|(id, score)| WalletRecord::new(*id, *score, 0.0, 0.0))
            .collect();
        QueryService::new(Arc::new(WalletStore::from_records(records)))
    }

    fn ids(records: &[&WalletRecord]) -> Vec<String> {
        records.iter().map(|r| r.wallet_id.clone()).collect()
    }

    #[test]
    fn test_top_n_descending() {
        let svc = service(&[("a", 3.0), ("b", 12.0), ("c", 7.0), ("d", 0.5)]);
        assert_eq!(ids(&svc.top_n(2)), vec!["b", "c"]);
        let all = svc.top_n(10);
        assert_eq!(ids(&all), vec!["b", "c", "a", "d"]);
        assert!(all.windows(2).all(|w| w[0].wallet_score >= w[1].wallet_score));
    }

    #[test]
    fn test_top_n_ties_keep_source_order() {
        let svc = service(&[("a", 5.0), ("b", 9.0), ("c", 5.0), ("d", 5.0)]);
        assert_eq!(ids(&svc.top_n(4)), vec!["b", "a", "c", "d"]);
        assert_eq!(ids(&svc.top_n(4)), ids(&svc.top_n(4)));
    }

    #[test]
    fn test_top_n_non_positive_is_empty() {
        let svc = service(&[("a", 1.0)]);
        assert!(svc.top_n(0).is_empty());
        assert!(svc.top_n(-3).is_empty());
    }

    #[test]
    fn test_top_n_does_not_reorder_store() {
        let svc = service(&[("a", 1.0), ("b", 2.0)]);
        let _ = svc.top_n(2);
        let listed: Vec<&str> = svc.list_all().iter().map(|r| r.wallet_id.as_str()).collect();
        assert_eq!(listed, vec!["a", "b"]);
    }

    #[test]
    fn test_get_by_id() {
        let svc = service(&[("a", 1.0), ("b", 2.0)]);
        assert_eq!(svc.get_by_id("b").unwrap().wallet_score, 2.0);

        let err = svc.get_by_id("zzz").unwrap_err();
        assert_eq!(err.code, ErrorCode::WalletNotFound);
        assert_eq!(err.message, "Wallet not found");
    }

    #[test]
    fn test_summary_partition() {
        let svc = service(&[("a", 10.0), ("b", 9.99), ("c", 5.0), ("d", 4.99), ("e", 42.0)]);
        let summary = svc.summary_counts();
        assert_eq!(summary.total_wallets, 5);
        assert_eq!(summary.high_risk, 2);
        assert_eq!(summary.medium_risk, 2);
        assert_eq!(summary.low_risk, 1);
        assert_eq!(
            summary.high_risk + summary.medium_risk + summary.low_risk,
            summary.total_wallets
        );
    }

    #[test]
    fn test_summary_empty_table() {
        let svc = service(&[]);
        assert_eq!(svc.summary_counts(), SummaryCounts::default());
        assert!(svc.list_all().is_empty());
        assert!(svc.top_n(5).is_empty());
    }
}
