//! AML Wallet Report
//!
//! Offline console report over the score table: bucket summary plus the
//! highest-risk wallets with their explanations.
//!
//! Usage:
//!   cargo run --bin aml_wallet_report -- [n]

use aml_wallet_api::{classify, explain, QueryService, ServerConfig, WalletStore};

use eyre::{eyre, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let config = ServerConfig::from_env()?;

    let n = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| eyre!("n must be an integer, got {:?}", raw))?,
        None => config.default_top_n,
    };

    let query = QueryService::new(Arc::new(WalletStore::load(&config.data_path)?));

    let summary = query.summary_counts();
    info!("══════════════════════════════════════");
    info!("Total wallets : {}", summary.total_wallets);
    info!("High risk     : {}", summary.high_risk);
    info!("Medium risk   : {}", summary.medium_risk);
    info!("Low risk      : {}", summary.low_risk);
    info!("══════════════════════════════════════");

    for (rank, wallet) in query.top_n(n).iter().enumerate() {
        let level = classify(wallet.wallet_score);
        info!(
            "#{:<3} {} {} score={:.2} level={}",
            rank + 1,
            level.emoji(),
            wallet.wallet_id,
            wallet.wallet_score,
            level
        );
        for reason in explain(wallet) {
            info!("       - {}", reason);
        }
    }

    Ok(())
}
