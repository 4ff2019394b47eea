//! # Error Types
//!
//! Validation errors for basket-core.
//!
//! ## Error Flow
//! ```text
//! ValidationError (here) ──► AppError (console app) ──► user notification
//! SyncError (basket-sync) ──┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. A validation failure blocks the remote call entirely

use thiserror::Error;

/// Input validation errors raised at the submission boundary.
///
/// Validation runs before any network call; a failing submission leaves the
/// edit form and the cache exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The submitted name is empty after trimming.
    #[error("product name is required")]
    EmptyName,
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "product name is required"
        );
    }
}
