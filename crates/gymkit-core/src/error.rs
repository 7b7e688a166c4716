//! Error handling for GymKit
//!
//! The session domain has no I/O and therefore no fatal failure modes:
//! invalid presentation commands are defensively ignored by the
//! orchestrator rather than surfaced as errors. The variants here exist
//! for the few APIs where a caller genuinely wants a report instead of a
//! silent no-op (the async scan driver, catalog-backed lookups).
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::data::Mode;

/// Main error type for GymKit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Referenced equipment id is not in the catalog
    #[error("Unknown equipment id: {id}")]
    UnknownEquipment {
        /// The id that missed the catalog.
        id: String,
    },

    /// The scan driver was invoked while the session is not awaiting a scan
    #[error("Scan gate not armed (session mode is {mode})")]
    ScanNotArmed {
        /// The mode the session was in.
        mode: Mode,
    },

    /// A second scan was initiated while one is still pending
    #[error("A scan is already pending")]
    ScanAlreadyPending,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
