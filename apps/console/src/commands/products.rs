//! # Product Commands
//!
//! The remote-calling intent handlers: load, submit, toggle, delete. Each one
//! issues exactly one round trip and applies the cache mutation only after
//! the remote acknowledged it (ack-before-apply; no optimistic updates).
//!
//! ## A Note on Races
//! Nothing serializes independent intents: two toggles fired in quick
//! succession resolve in whatever order the remote answers, and the cache
//! reflects whichever write applied last. There is no per-record version
//! check or request coalescing.

use basket_core::{FormValues, Product, ProductId, Submission};
use basket_sync::RemoteStore;
use tracing::{debug, info};

use super::App;
use crate::render::RenderSink;

impl<R: RemoteStore, S: RenderSink> App<R, S> {
    /// Replaces the cache with the remote collection and redraws.
    pub async fn on_load(&mut self) {
        debug!("load intent");
        match self.remote.list().await {
            Ok(products) => {
                info!(count = products.len(), "collection loaded");
                self.cache.load(products);
                self.render();
            }
            Err(err) => self.fail(err.into()),
        }
    }

    /// Submits the form: a create in new-product mode, an update in edit
    /// mode.
    ///
    /// A validation rejection issues no network call and changes no state.
    /// On success the form resets; on remote failure it keeps its values so
    /// the user can retry.
    pub async fn on_submit(&mut self, values: FormValues) {
        debug!(name = %values.name, editing = self.form.is_editing(), "submit intent");
        self.form.set_values(values);

        let submission = match self.form.submission(self.cache.products()) {
            Ok(submission) => submission,
            Err(err) => {
                self.fail(err.into());
                return;
            }
        };

        match submission {
            Submission::Create(draft) => match self.remote.create(&draft).await {
                Ok(id) => {
                    info!(%id, name = %draft.name, "product created");
                    // Only the id is taken from the response; the cached
                    // record is the draft exactly as submitted.
                    self.cache.append(Product::from_draft(id, draft));
                    self.form.reset();
                    self.render();
                }
                Err(err) => self.fail(err.into()),
            },
            Submission::Update(updated) => match self.remote.update(&updated).await {
                Ok(()) => {
                    info!(id = %updated.id, "product updated");
                    self.cache.replace(updated);
                    self.form.reset();
                    self.render();
                }
                Err(err) => self.fail(err.into()),
            },
        }
    }

    /// Flips the purchased flag of one record.
    ///
    /// Independent of the edit form: toggling mid-edit neither reads nor
    /// clears the form state.
    pub async fn on_toggle(&mut self, id: ProductId) {
        debug!(%id, "toggle intent");
        let Some(current) = self.cache.get(id) else {
            debug!(%id, "toggle for a record not in the cache");
            return;
        };

        let toggled = current.with_purchased(!current.purchased);
        match self.remote.update(&toggled).await {
            Ok(()) => {
                self.cache.replace(toggled);
                self.render();
            }
            Err(err) => self.fail(err.into()),
        }
    }

    /// Deletes one record. The explicit user confirmation step happens
    /// before this handler is invoked.
    pub async fn on_delete(&mut self, id: ProductId) {
        debug!(%id, "delete intent");
        match self.remote.delete(id).await {
            Ok(()) => {
                info!(%id, "product deleted");
                self.cache.remove(id);
                self.render();
            }
            Err(err) => self.fail(err.into()),
        }
    }
}
