//! API Request Handlers

use axum::{
    extract::{rejection::QueryRejection, Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

use super::types::*;
use crate::core::{classify, explain, QueryService, WalletStore};
use crate::models::config::ServerConfig;
use crate::models::errors::{AppError, ErrorCode};
use crate::models::types::{SummaryCounts, WalletRecord};
use crate::utils::constants::{APP_VERSION, ROOT_MESSAGE, SERVICE_NAME};

/// Shared application state
pub struct AppState {
    pub query: QueryService,
    pub config: ServerConfig,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<WalletStore>, config: ServerConfig) -> Self {
        Self {
            query: QueryService::new(store),
            config,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Error half of every fallible handler
pub type ApiErrorResponse = (StatusCode, Json<ApiResponse<()>>);

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn error_response(err: &AppError, start: Instant) -> ApiErrorResponse {
    let status =
        StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    // Lookup misses are normal traffic
    if err.is_not_found() {
        debug!(code = err.code_str(), "{}", err.message);
    } else if status.is_client_error() {
        warn!(code = err.code_str(), "{}", err);
    } else {
        error!(code = err.code_str(), "{}", err);
    }
    (
        status,
        Json(ApiResponse::error(ApiError::from(err), elapsed_ms(start))),
    )
}

fn rank(wallet: &WalletRecord) -> RankedWallet {
    RankedWallet {
        wallet: wallet.clone(),
        risk_level: classify(wallet.wallet_score),
    }
}

// ============================================
// Root & Health Check
// ============================================

pub async fn root() -> Json<ApiResponse<RootData>> {
    let start = Instant::now();

    let data = RootData {
        message: ROOT_MESSAGE.to_string(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
        wallets_loaded: state.query.store().len(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Wallet Listing
// ============================================

/// All wallets as loaded. No risk level is attached here.
pub async fn list_wallets(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<WalletRecord>>> {
    let start = Instant::now();

    let wallets = state.query.list_all().to_vec();

    Json(ApiResponse::success(wallets, elapsed_ms(start)))
}

pub async fn top_wallets(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TopWalletsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<RankedWallet>>>, ApiErrorResponse> {
    let start = Instant::now();

    let Query(params) = query.map_err(|rejection| {
        let err =
            AppError::with_source(ErrorCode::ApiBadRequest, "Invalid query parameters", rejection);
        error_response(&err, start)
    })?;
    let n = params.n.unwrap_or(state.config.default_top_n);

    let wallets: Vec<RankedWallet> = state.query.top_n(n).into_iter().map(rank).collect();

    Ok(Json(ApiResponse::success(wallets, elapsed_ms(start))))
}

// ============================================
// Single Wallet
// ============================================

pub async fn wallet_details(
    State(state): State<Arc<AppState>>,
    Path(wallet_id): Path<String>,
) -> Result<Json<ApiResponse<RankedWallet>>, ApiErrorResponse> {
    let start = Instant::now();

    let wallet = state
        .query
        .get_by_id(&wallet_id)
        .map_err(|e| error_response(&e, start))?;

    Ok(Json(ApiResponse::success(rank(wallet), elapsed_ms(start))))
}

pub async fn explain_wallet(
    State(state): State<Arc<AppState>>,
    Path(wallet_id): Path<String>,
) -> Result<Json<ApiResponse<WalletExplanation>>, ApiErrorResponse> {
    let start = Instant::now();

    let wallet = state
        .query
        .get_by_id(&wallet_id)
        .map_err(|e| error_response(&e, start))?;

    let data = WalletExplanation {
        wallet_id: wallet.wallet_id.clone(),
        risk_score: wallet.wallet_score,
        risk_level: classify(wallet.wallet_score),
        reasons: explain(wallet),
    };

    Ok(Json(ApiResponse::success(data, elapsed_ms(start))))
}

// ============================================
// Summary
// ============================================

pub async fn summary(State(state): State<Arc<AppState>>) -> Json<ApiResponse<SummaryCounts>> {
    let start = Instant::now();

    let counts = state.query.summary_counts();

    Json(ApiResponse::success(counts, elapsed_ms(start)))
}
