//! # Intent Handlers
//!
//! The command layer: one handler per user intent, wired to the cache, the
//! filter/edit state, the remote store, and the render sink.
//!
//! ## Intent Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Intent Handling                                    │
//! │                                                                         │
//! │  Shell Input              Handler                 Effect                │
//! │  ───────────              ───────                 ──────                │
//! │                                                                         │
//! │  startup ────────────────► on_load() ───────────► list + load + redraw  │
//! │  form submit ────────────► on_submit() ─────────► create/update + apply │
//! │  row click ──────────────► on_toggle(id) ───────► update + replace      │
//! │  edit button ────────────► on_edit(id) ─────────► seed the form         │
//! │  delete (confirmed) ─────► on_delete(id) ───────► delete + remove       │
//! │  category tab ───────────► on_filter_change() ──► redraw                │
//! │  search box ─────────────► on_search_change() ──► redraw                │
//! │  reset button ───────────► on_reset() ──────────► clear the form        │
//! │                                                                         │
//! │  Every remote-calling handler follows the same shape:                   │
//! │    1. derive/validate locally (a rejection means NO network call)       │
//! │    2. await the single remote round trip                                │
//! │    3. on ack: mutate the cache, redraw                                  │
//! │    4. on failure: log + notify, touch NOTHING                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers are generic over [`RemoteStore`] and [`RenderSink`], so the
//! whole engine runs headless in tests with an in-memory remote and a
//! recording sink.

mod products;
mod view;

use basket_core::{EditForm, FilterState};
use basket_sync::RemoteStore;
use tracing::error;

use crate::error::AppError;
use crate::render::{ListView, RenderSink};
use crate::state::ProductCache;

/// The application: state plus the two seams it talks through.
pub struct App<R: RemoteStore, S: RenderSink> {
    cache: ProductCache,
    filter: FilterState,
    form: EditForm,
    remote: R,
    sink: S,
}

impl<R: RemoteStore, S: RenderSink> App<R, S> {
    /// Wires up an app with an empty cache and default filter/form state.
    pub fn new(remote: R, sink: S) -> App<R, S> {
        App {
            cache: ProductCache::new(),
            filter: FilterState::default(),
            form: EditForm::new(),
            remote,
            sink,
        }
    }

    /// Derives the current view in full.
    pub fn view(&self) -> ListView {
        ListView::derive(self.cache.products(), &self.filter)
    }

    /// Rebuilds the view and pushes it to the sink.
    pub fn render(&mut self) {
        let view = self.view();
        self.sink.render(&view);
    }

    /// The product cache (read-only).
    pub fn cache(&self) -> &ProductCache {
        &self.cache
    }

    /// The edit form (read-only).
    pub fn form(&self) -> &EditForm {
        &self.form
    }

    /// The sole catch point: log the failure, notify the user, change
    /// nothing else.
    fn fail(&mut self, err: AppError) {
        error!(%err, "intent failed");
        self.sink.notify_error(err.notification());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
