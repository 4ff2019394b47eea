//! # View & Form Commands
//!
//! The local intent handlers: filter and search changes, entering edit mode,
//! and resetting the form. None of these touch the network or the cache.

use basket_core::{CategoryFilter, FormValues, ProductId};
use basket_sync::RemoteStore;
use tracing::debug;

use super::App;
use crate::render::RenderSink;

impl<R: RemoteStore, S: RenderSink> App<R, S> {
    /// Narrows the view to one category (or back to all) and redraws.
    pub fn on_filter_change(&mut self, active: CategoryFilter) {
        debug!(?active, "filter intent");
        self.filter.active = active;
        self.render();
    }

    /// Updates the search text and redraws.
    pub fn on_search_change(&mut self, search: String) {
        debug!(%search, "search intent");
        self.filter.search = search;
        self.render();
    }

    /// Enters edit mode for the given record, seeding the form from it.
    ///
    /// Returns the seeded values for the input surface to prompt with, or
    /// `None` when the record is not in the cache.
    pub fn on_edit(&mut self, id: ProductId) -> Option<FormValues> {
        debug!(%id, "edit intent");
        let product = self.cache.get(id)?.clone();
        self.form.start_edit(&product);
        Some(self.form.values().clone())
    }

    /// Clears the form back to new-product mode with default values.
    pub fn on_reset(&mut self) {
        debug!("reset intent");
        self.form.reset();
    }
}
