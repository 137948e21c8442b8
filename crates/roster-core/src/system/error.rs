//! Roster error types

use thiserror::Error;

/// Errors raised while rendering roster output.
///
/// Store operations themselves never fail; a missing id is an [`crate::Outcome`].
#[derive(Debug, Error)]
pub enum RosterError {
    /// Writing to the output stream failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for roster output operations
pub type RosterResult<T> = Result<T, RosterError>;
