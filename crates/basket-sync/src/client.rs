//! # Remote Store Client
//!
//! The trait seam over the four remote operations, and its HTTP
//! implementation.
//!
//! ## Round Trips
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Remote Collection Contract                           │
//! │                                                                         │
//! │  list    ──► GET    R        ──► 2xx + JSON array of products           │
//! │  create  ──► POST   R        ──► 2xx + object containing the new id     │
//! │  update  ──► PUT    R/{id}   ──► 2xx (body ignored)                     │
//! │  delete  ──► DELETE R/{id}   ──► 2xx (body ignored)                     │
//! │                                                                         │
//! │  Anything else (non-2xx, refused connection, bad body) is a SyncError.  │
//! │  No retry, no backoff, no explicit timeout: one attempt per intent.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trust Boundary
//! Response bodies are trusted as little as possible: `create` reads only the
//! assigned id out of the response, and `update`/`delete` ignore the body
//! entirely. The caller's own payload is what lands in the cache.

use basket_core::{Product, ProductDraft, ProductId};
use serde::Deserialize;
use tracing::debug;

use crate::config::RemoteConfig;
use crate::error::{Operation, SyncError, SyncResult};

// =============================================================================
// Trait Seam
// =============================================================================

/// The four operations the engine needs from the remote collection.
///
/// Generic callers pick the implementation: `HttpRemote` in production, an
/// in-memory recording fake under test (see the console app's tests).
// Callers stay generic over the store; no Send bound is promised here.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// Fetches the full collection, in the remote's order.
    async fn list(&self) -> SyncResult<Vec<Product>>;

    /// Creates a record from `draft` and returns the id the remote assigned.
    async fn create(&self, draft: &ProductDraft) -> SyncResult<ProductId>;

    /// Overwrites the record at `product.id` with `product`.
    async fn update(&self, product: &Product) -> SyncResult<()>;

    /// Deletes the record with the given id.
    async fn delete(&self, id: ProductId) -> SyncResult<()>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// `RemoteStore` over HTTP, one request/response round trip per call.
///
/// ## Usage
/// ```rust,ignore
/// let remote = HttpRemote::new(RemoteConfig::new("http://localhost:5000/products")?);
/// let products = remote.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    config: RemoteConfig,
}

/// The only field read out of a create response.
#[derive(Debug, Deserialize)]
struct CreatedBody {
    id: ProductId,
}

impl HttpRemote {
    /// Builds a client against the configured collection URL.
    pub fn new(config: RemoteConfig) -> HttpRemote {
        HttpRemote {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client talks to.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }
}

impl RemoteStore for HttpRemote {
    async fn list(&self) -> SyncResult<Vec<Product>> {
        let op = Operation::List;
        debug!(url = %self.config.collection_url(), "GET collection");

        let response = self
            .client
            .get(self.config.collection_url().clone())
            .send()
            .await
            .map_err(|e| transport_error(op, e))?;
        let response = check_status(op, response)?;

        response.json().await.map_err(|e| decode_error(op, e))
    }

    async fn create(&self, draft: &ProductDraft) -> SyncResult<ProductId> {
        let op = Operation::Create;
        debug!(url = %self.config.collection_url(), name = %draft.name, "POST draft");

        let response = self
            .client
            .post(self.config.collection_url().clone())
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error(op, e))?;
        let response = check_status(op, response)?;

        // The remote may echo the whole record; only the id is trusted.
        let created: CreatedBody = response.json().await.map_err(|e| decode_error(op, e))?;
        Ok(created.id)
    }

    async fn update(&self, product: &Product) -> SyncResult<()> {
        let op = Operation::Update;
        let url = self.config.record_url(product.id);
        debug!(%url, id = %product.id, "PUT record");

        let response = self
            .client
            .put(url)
            .json(product)
            .send()
            .await
            .map_err(|e| transport_error(op, e))?;
        check_status(op, response)?;

        // Acknowledgement only; the body is not read back.
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> SyncResult<()> {
        let op = Operation::Delete;
        let url = self.config.record_url(id);
        debug!(%url, %id, "DELETE record");

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| transport_error(op, e))?;
        check_status(op, response)?;

        Ok(())
    }
}

// =============================================================================
// Response Handling
// =============================================================================

/// Passes 2xx responses through, turns everything else into `Status`.
fn check_status(op: Operation, response: reqwest::Response) -> SyncResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SyncError::Status {
            op,
            status: status.as_u16(),
        })
    }
}

fn transport_error(op: Operation, err: reqwest::Error) -> SyncError {
    SyncError::Transport {
        op,
        message: err.to_string(),
    }
}

fn decode_error(op: Operation, err: reqwest::Error) -> SyncError {
    SyncError::Decode {
        op,
        message: err.to_string(),
    }
}
