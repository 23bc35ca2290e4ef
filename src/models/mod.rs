//! Models Module - Data Structures & Configuration
//!
//! Single source of truth for record types, errors and runtime settings.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
