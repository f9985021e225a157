//! # Staff Roster Shared
//!
//! Configuration and error types used by the outer layers.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
