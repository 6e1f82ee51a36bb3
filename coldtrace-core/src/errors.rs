//! Error types for the data-source boundary
//!
//! The transformation pipeline itself never fails: unparseable timestamps,
//! missing thresholds and empty collections all degrade to "no data" per
//! the record-handling policy. Errors only exist at the edge where a host
//! hands records in: a lookup can miss, and raw JSON can be malformed.

use thiserror::Error;

/// Result type for data-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Failures at the data-source boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// No shipment with the requested identifier.
    #[error("shipment {id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The supplied raw data could not be decoded into shipment records.
    #[error("malformed shipment data: {0}")]
    Malformed(String),
}
