//! # Product Cache
//!
//! The authoritative in-memory copy of the remote collection.
//!
//! ## Invariants
//! - At most one product per id (guaranteed upstream by the remote assigning
//!   unique ids; `append` is only called for confirmed creates).
//! - Order is the load order, with created products appended at the end and
//!   updated products replaced in place (index preserved).
//! - Mutations run only after the matching remote call succeeded
//!   (ack-before-apply). The cache never holds state the remote has not
//!   also accepted.
//!
//! ## Cache Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User Intent            Remote Call             Cache Change            │
//! │  ───────────            ───────────             ────────────            │
//! │                                                                         │
//! │  startup/reload ──────► list() ───────────────► load(products)          │
//! │                                                                         │
//! │  submit (new) ────────► create(draft) ────────► append(draft + id)      │
//! │                                                                         │
//! │  submit (edit) ───────► update(product) ──────► replace(product)        │
//! │  toggle ──────────────► update(toggled) ──────► replace(toggled)        │
//! │                                                                         │
//! │  delete (confirmed) ──► delete(id) ───────────► remove(id)              │
//! │                                                                         │
//! │  NOTE: a failed remote call reaches none of the right column.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::{Product, ProductId, Summary};

/// The ordered product cache.
#[derive(Debug, Clone, Default)]
pub struct ProductCache {
    products: Vec<Product>,
}

impl ProductCache {
    /// Creates an empty cache.
    pub fn new() -> ProductCache {
        ProductCache {
            products: Vec::new(),
        }
    }

    /// Replaces the entire cache with `products`, preserving their order.
    pub fn load(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Appends a newly created product at the end.
    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Replaces the record with a matching id in place.
    ///
    /// Silent no-op when no record matches; the index of a replaced record
    /// does not change.
    pub fn replace(&mut self, product: Product) {
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
            *slot = product;
        }
    }

    /// Removes the record with the given id. Silent no-op when absent.
    pub fn remove(&mut self, id: ProductId) {
        self.products.retain(|p| p.id != id);
    }

    /// Looks up a record by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The whole cache, in order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whole-cache counters for the summary footer.
    pub fn summary(&self) -> Summary {
        Summary::of(&self.products)
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            quantity: "1".into(),
            category: "other".into(),
            purchased: false,
        }
    }

    #[test]
    fn test_load_replaces_wholesale_in_order() {
        let mut cache = ProductCache::new();
        cache.append(product(99, "Stale"));

        cache.load(vec![product(1, "A"), product(2, "B")]);

        let ids: Vec<i64> = cache.products().iter().map(|p| p.id.raw()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_replace_keeps_the_index() {
        let mut cache = ProductCache::new();
        cache.load(vec![product(1, "A"), product(2, "B"), product(3, "C")]);

        cache.replace(product(2, "B renamed"));

        assert_eq!(cache.products()[1].name, "B renamed");
        let ids: Vec<i64> = cache.products().iter().map(|p| p.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_replace_of_unknown_id_is_a_no_op() {
        let mut cache = ProductCache::new();
        cache.load(vec![product(1, "A")]);

        cache.replace(product(9, "Ghost"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.products()[0].name, "A");
    }

    #[test]
    fn test_remove_is_precise_and_order_preserving() {
        let mut cache = ProductCache::new();
        cache.load(vec![product(1, "A"), product(2, "B"), product(3, "C")]);

        cache.remove(ProductId::new(2));

        let names: Vec<&str> = cache.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);

        // Removing an absent id changes nothing.
        cache.remove(ProductId::new(2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_summary_counts_the_whole_cache() {
        let mut cache = ProductCache::new();
        cache.load(vec![
            product(1, "A").with_purchased(true),
            product(2, "B"),
            product(3, "C").with_purchased(true),
        ]);

        let summary = cache.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.purchased, 2);
    }
}
