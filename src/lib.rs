//! AML Wallet API Library
//!
//! Explainable, read-only query layer over precomputed blockchain wallet
//! risk scores:
//! - Score table loaded once from CSV and shared immutably
//! - Top-N ranking, lookup by wallet_id, bucket summary
//! - Low / Medium / High risk classification
//! - Rule-based laundering indicators per wallet

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{classify, explain, QueryService, WalletStore};
pub use models::{
    AppError, AppResult, ErrorCode, RiskLevel, ServerConfig, SummaryCounts, WalletRecord,
};
