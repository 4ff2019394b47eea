//! # Filtering & Summary
//!
//! The pure view-derivation half of the engine: given the product cache and
//! the current filter state, produce the visible subsequence and the summary
//! counters.
//!
//! The derivation is recomputed in full on every render. At shopping-list
//! scale this costs nothing, so there is no memoization; that is a deliberate
//! simplicity choice, not an oversight.

use serde::Serialize;

use crate::types::{Category, Product};

// =============================================================================
// Filter State
// =============================================================================

/// Which category the view is narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every category.
    #[default]
    All,
    /// Show only products whose stored category equals this key.
    Only(Category),
}

impl CategoryFilter {
    /// Checks a raw stored category value against the filter.
    ///
    /// Comparison is on the selector key, so a product with an unrecognized
    /// raw value only appears under `All`.
    pub fn matches(&self, raw_category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => raw_category == category.key(),
        }
    }
}

/// The transient view parameters: active category plus free-text search.
///
/// Independent of cache contents; discarded when the app exits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Category the view is narrowed to. Defaults to `All`.
    pub active: CategoryFilter,
    /// Search text, compared case-insensitively as a substring of `name`.
    /// Defaults to empty (no narrowing).
    pub search: String,
}

impl FilterState {
    /// Checks one product against both predicates.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.active.matches(&product.category) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    /// Derives the visible subsequence of `products`, in original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Whole-cache counters shown in the summary footer.
///
/// Computed over the full cache, not the filtered view: narrowing the list
/// does not change how many items there are or how many were bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub purchased: usize,
}

impl Summary {
    /// Counts `products` wholesale.
    pub fn of(products: &[Product]) -> Summary {
        Summary {
            total: products.len(),
            purchased: products.iter().filter(|p| p.purchased).count(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
