//! # basket-core: Pure View/Sync Logic for Basket
//!
//! This crate is the **heart** of Basket. It contains the whole view-and-sync
//! engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Basket Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front-End (terminal shell)                      │   │
//! │  │    list view ──► form prompts ──► delete confirm ──► summary    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ intents                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Intent Handlers                              │   │
//! │  │    on_submit, on_toggle, on_delete, on_filter_change, ...       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  filter   │  │   form    │  │   error   │  │   │
//! │  │   │  Product  │  │  Filter   │  │ EditForm  │  │Validation │  │   │
//! │  │   │  Category │  │  Summary  │  │Submission │  │  errors   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TERMINAL • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 basket-sync (Remote Client)                     │   │
//! │  │          GET / POST / PUT / DELETE on the collection            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, Category, ProductDraft)
//! - [`filter`] - Category/search predicate and summary counters
//! - [`form`] - Edit-form state machine and submission building
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and terminal access are FORBIDDEN here
//! 3. **Verbatim Storage**: Unrecognized category values are preserved as-is
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod form;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use basket_core::Product` instead of
// `use basket_core::types::Product`

pub use error::ValidationError;
pub use filter::{CategoryFilter, FilterState, Summary};
pub use form::{EditForm, EditMode, FormValues, Submission, FORM_DEFAULTS};
pub use types::{Category, Product, ProductDraft, ProductId};
