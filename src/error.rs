//! Crate error type.

use thiserror::Error;

/// Errors produced while building an [`AudioItem`](crate::AudioItem) or
/// its source URLs.
#[derive(Debug, Error)]
pub enum ItemError {
    /// Construction was attempted with no source URL at any quality tier.
    #[error("no source URL at any quality tier")]
    EmptySources,

    /// A source URL string failed to parse. Empty strings fail here too.
    #[error("invalid source URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, ItemError>;
