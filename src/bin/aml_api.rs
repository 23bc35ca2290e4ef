//! AML Wallet API Server
//!
//! Explainable REST API over precomputed blockchain wallet risk scores
//!
//! Usage:
//!   cargo run --bin aml_api
//!
//! Environment:
//!   AML_DATA_PATH - Score table CSV (default: data/wallet_scores.csv)
//!   PORT/AML_PORT - Server port (default: 8080)
//!   AML_HOST      - Server host (default: 0.0.0.0)
//!   RUST_LOG      - Log filter (default: info)

use aml_wallet_api::api::{create_router, AppState};
use aml_wallet_api::utils::constants::APP_NAME;
use aml_wallet_api::{QueryService, ServerConfig, WalletStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    print_banner();

    let config = ServerConfig::from_env()?;

    // The table must be loaded before anything is served
    let store = match WalletStore::load(&config.data_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!(code = e.code_str(), "❌ Cannot load score table: {}", e);
            return Err(e.into());
        }
    };

    let summary = QueryService::new(store.clone()).summary_counts();
    info!(
        "📊 {} wallets ({} high / {} medium / {} low risk)",
        summary.total_wallets, summary.high_risk, summary.medium_risk, summary.low_risk
    );

    let addr: SocketAddr = config.bind_address().parse()?;

    let state = Arc::new(AppState::new(store, config));
    let app = create_router(state);

    info!("🚀 {} starting on http://{}", APP_NAME, addr);
    info!("");
    info!("Endpoints (also under /v1):");
    info!("  GET /health                      - Health check");
    info!("  GET /wallets                     - All wallets");
    info!("  GET /wallets/top?n=5             - Highest risk wallets");
    info!("  GET /wallet/:wallet_id           - Wallet details");
    info!("  GET /wallet/:wallet_id/explain   - Risk explanation");
    info!("  GET /summary                     - Risk bucket counts");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("⚠️ Failed to listen for Ctrl+C: {}", e);
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("👋 AML Wallet API shutdown complete");

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    ╔══════════════════════════════════════════════════╗
    ║                                                  ║
    ║           A M L   W A L L E T   A P I            ║
    ║      Explainable blockchain risk scoring         ║
    ║                                                  ║
    ╚══════════════════════════════════════════════════╝
    "#
    );
}
