//! Price lookup error types.

use thiserror::Error;

/// Why no price could be selected for an identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceLookupError {
    /// The provider returned fewer sessions than a lookup needs.
    #[error("{identifier}: need at least {required} sessions of history, got {available}")]
    InsufficientHistory {
        identifier: String,
        required: usize,
        available: usize,
    },

    /// Every session inspected within the fallback bound was empty, or the
    /// search stepped past the start of the series.
    #[error("{identifier}: no {session} price within {inspected} session(s) of history")]
    Exhausted {
        identifier: String,
        session: &'static str,
        inspected: usize,
    },
}
