//! Error type shared by the pipelines, sinks and query parser.

use std::io;
use thiserror::Error;

/// Errors raised while building or driving a pipeline.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// A constructor received a value it cannot work with (`N == 0`, position 0).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A counter reached its ceiling; the sequence is too long to count.
    #[error("sequence too long to count: length reached {limit}")]
    Overflow {
        /// The ceiling that was hit.
        limit: u64,
    },

    /// The input line could not be parsed into a query.
    #[error("malformed query: {0}")]
    Query(String),

    /// The sink's writer failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use looksay_rs::Error;
    ///
    /// let err = Error::Overflow { limit: 10 };
    /// assert_eq!(err.as_label(), "overflow");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Error::InvalidArgument(_) => "invalid_argument",
            Error::Overflow { .. } => "overflow",
            Error::Query(_) => "malformed_query",
            Error::Io(_) => "io",
        }
    }
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
