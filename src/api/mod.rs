//! AML Wallet API Module
//! Read-only REST API over the wallet risk table

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
