//! # State Module
//!
//! Owns the application's mutable state: the product cache.
//!
//! The cache is an explicit store object constructed at startup and passed by
//! reference to the intent handlers that need it, never ambient module
//! globals. Filter and edit-form state live beside it on the app object and
//! are plain basket-core values.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     State Ownership                                     │
//! │                                                                         │
//! │   App (single logical thread)                                           │
//! │   ├── ProductCache   ◄── mutated ONLY after a confirmed remote call     │
//! │   ├── FilterState    ◄── mutated directly by filter/search intents      │
//! │   └── EditForm       ◄── mutated by edit/reset intents and submits      │
//! │                                                                         │
//! │   No Mutex, no Arc: every mutation path suspends on its one remote      │
//! │   call and resumes on the same logical thread before touching state.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod products;

pub use products::ProductCache;
