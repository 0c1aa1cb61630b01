//! Result type alias shared across the workspace.
//!
//! Functions can return `Result<T>` and get `MarketError` as the error type.
use crate::error::MarketError;

/// Workspace-wide `Result` alias with `MarketError` as the default error.
pub type Result<T, E = MarketError> = std::result::Result<T, E>;
