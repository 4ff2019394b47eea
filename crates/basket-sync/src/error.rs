//! # Sync Error Types
//!
//! Error types for remote collection operations.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sync Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidUrl     │  │  Transport      │  │  Status (non-2xx)       │ │
//! │  │                 │  │  (I/O, DNS,     │  │  Decode (bad body)      │ │
//! │  │                 │  │   refused, TLS) │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant except `InvalidUrl` carries the [`Operation`] it happened
//! on, so the front-end can pick the matching notification text and the log
//! line says which round trip went wrong.

use std::fmt;

use thiserror::Error;

/// Result type alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// The four remote round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => write!(f, "list"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// Sync error type covering all remote-call failures.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - No failure is retried here; callers decide what to surface
/// - All errors are `Send + Sync` for async compatibility
#[derive(Debug, Error)]
pub enum SyncError {
    /// The collection URL could not be parsed or cannot carry record paths.
    #[error("invalid collection URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (connection refused, DNS, TLS, I/O).
    #[error("{op} request failed: {message}")]
    Transport { op: Operation, message: String },

    /// The remote answered with a non-success status.
    #[error("{op} rejected with HTTP status {status}")]
    Status { op: Operation, status: u16 },

    /// The response body could not be decoded.
    #[error("{op} response could not be decoded: {message}")]
    Decode { op: Operation, message: String },
}

impl SyncError {
    /// The operation this error happened on, when one applies.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            SyncError::InvalidUrl(_) => None,
            SyncError::Transport { op, .. }
            | SyncError::Status { op, .. }
            | SyncError::Decode { op, .. } => Some(*op),
        }
    }

    /// True when the remote was reached but rejected the request.
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, SyncError::Status { .. })
    }
}

impl From<url::ParseError> for SyncError {
    fn from(err: url::ParseError) -> Self {
        SyncError::InvalidUrl(err.to_string())
    }
}
