//! Utils Module - Shared Constants
//!
//! Thresholds, reason strings and defaults shared by the core and the API.

pub mod constants;

pub use constants::*;
