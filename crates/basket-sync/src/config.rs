//! # Remote Configuration
//!
//! Where the remote collection lives, plus path building for record URLs.
//!
//! The collection path is the single knob: everything else about the remote
//! (schema, ordering, id assignment) is fixed by the contract.

use basket_core::ProductId;
use url::Url;

use crate::error::{SyncError, SyncResult};

/// Default collection URL for local development.
pub const DEFAULT_COLLECTION_URL: &str = "http://127.0.0.1:5000/products";

/// Validated location of the remote collection resource.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    collection_url: Url,
}

impl RemoteConfig {
    /// Parses and validates a collection URL.
    ///
    /// Rejects URLs that cannot carry record paths (`mailto:` and friends).
    /// A trailing slash is dropped so record paths come out as `R/{id}`.
    pub fn new(collection_url: &str) -> SyncResult<RemoteConfig> {
        let url = Url::parse(collection_url.trim_end_matches('/'))?;
        if url.cannot_be_a_base() {
            return Err(SyncError::InvalidUrl(format!(
                "{collection_url} cannot carry record paths"
            )));
        }
        Ok(RemoteConfig {
            collection_url: url,
        })
    }

    /// The collection path `R` (list, create).
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    /// The record path `R/{id}` (update, delete).
    pub fn record_url(&self, id: ProductId) -> Url {
        let mut url = self.collection_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig::new(DEFAULT_COLLECTION_URL).expect("default collection URL is well-formed")
    }
}
