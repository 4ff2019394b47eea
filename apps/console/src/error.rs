//! # App Error Type
//!
//! Unified error type for intent handlers, plus the mapping from failures to
//! the user-visible notification texts.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Basket                               │
//! │                                                                         │
//! │  ValidationError (basket-core) ──┐                                      │
//! │                                  ├──► AppError ──► tracing::error! +    │
//! │  SyncError (basket-sync) ────────┘                render sink           │
//! │                                                   notification          │
//! │                                                                         │
//! │  The intent handler is the SOLE catch boundary: nothing below it        │
//! │  swallows a failure, nothing above it sees one.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::ValidationError;
use basket_sync::{Operation, SyncError};
use thiserror::Error;

/// Anything an intent handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// Submission rejected before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A remote round trip failed.
    #[error(transparent)]
    Sync(#[from] SyncError),
}

impl AppError {
    /// The blocking notification text shown for this failure.
    ///
    /// Sync failures map per operation; the fallback covers failures with no
    /// operation context (e.g. a bad collection URL).
    pub fn notification(&self) -> &'static str {
        match self {
            AppError::Validation(ValidationError::EmptyName) => "Please enter a product name.",
            AppError::Sync(err) => match err.operation() {
                Some(Operation::List) => "Failed to load products.",
                Some(Operation::Create) => "Something went wrong while saving the product.",
                Some(Operation::Update) => "Something went wrong while updating the product.",
                Some(Operation::Delete) => "Something went wrong while deleting the product.",
                None => "Something went wrong. Please try again.",
            },
        }
    }
}
