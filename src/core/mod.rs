//! Core Module - Score Table & Risk Logic
//!
//! The in-memory wallet store, the queries over it, and the pure
//! classification / explanation rules.

pub mod classifier;
pub mod explain;
pub mod query;
pub mod store;

pub use classifier::*;
pub use explain::*;
pub use query::*;
pub use store::*;
