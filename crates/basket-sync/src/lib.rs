//! # basket-sync: Remote Collection Client
//!
//! The seam between the local product cache and the remote collection
//! resource: a [`RemoteStore`] trait with exactly the four operations the
//! engine needs, and an HTTP implementation of it.
//!
//! ## Synchronization Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ack-Before-Apply                                   │
//! │                                                                         │
//! │   user intent                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   RemoteStore call ────────────► remote collection                      │
//! │       │                               │                                 │
//! │       │          2xx ack              │                                 │
//! │       ◄───────────────────────────────┘                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   cache mutation (append / replace / remove)                            │
//! │                                                                         │
//! │   On ANY failure: no cache mutation, error propagates to the caller.    │
//! │   The local cache never holds state the remote has not accepted.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate performs the round trips and reports the outcome; it never
//! touches the cache itself. Applying confirmed mutations is the front-end's
//! job, which is what keeps the discipline auditable in one place.

pub mod client;
pub mod config;
pub mod error;

pub use client::{HttpRemote, RemoteStore};
pub use config::{RemoteConfig, DEFAULT_COLLECTION_URL};
pub use error::{Operation, SyncError, SyncResult};
