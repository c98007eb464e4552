//! Error handling for symmetric cryptographic operations
//!
//! This module re-exports the unified API error system so that all
//! symmetric operations share one error taxonomy.

// Re-export the primary API error system
pub use sealant_api::error::{validate, Error, Result};
