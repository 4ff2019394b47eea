//! # Domain Types
//!
//! Core domain types used throughout Basket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductDraft   │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (remote)    │   │  name           │   │  FruitsVeg      │       │
//! │  │  name           │   │  quantity       │   │  Bakery         │       │
//! │  │  quantity       │   │  category       │   │  Dairy          │       │
//! │  │  category (raw) │   │  purchased      │   │  Meat           │       │
//! │  │  purchased      │   │  (no id yet)    │   │  Drinks / Other │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `ProductId` is assigned only by the remote collection. Nothing in this
//! codebase generates an id; a record without one is a [`ProductDraft`].
//!
//! ## Category Handling
//! `Product.category` is a raw string preserved verbatim, even when it is not
//! one of the fixed selector keys. [`Category`] is the closed selector set
//! used for filtering keys and display labels; unrecognized raw values render
//! under the "Other" label but are never rewritten in storage or on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Product Id
// =============================================================================

/// Opaque product identifier assigned by the remote collection.
///
/// Serialized transparently, so `ProductId(3)` is `3` on the wire and in the
/// record path (`/products/3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw id received from the remote collection.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        ProductId(raw)
    }

    /// Returns the raw id for the record path.
    #[inline]
    pub const fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The fixed category selector set.
///
/// ## Closed Set, Open Storage
/// This enum covers the keys the selector can produce. Stored categories are
/// raw strings and may fall outside this set; use [`Category::label_for`] for
/// display so unrecognized values fall back to the "Other" label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FruitsVeg,
    Bakery,
    Dairy,
    Meat,
    Drinks,
    Other,
}

impl Category {
    /// Every selectable category, in display order.
    pub const ALL: [Category; 6] = [
        Category::FruitsVeg,
        Category::Bakery,
        Category::Dairy,
        Category::Meat,
        Category::Drinks,
        Category::Other,
    ];

    /// The wire/selector key for this category.
    pub const fn key(&self) -> &'static str {
        match self {
            Category::FruitsVeg => "fruits_veg",
            Category::Bakery => "bakery",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Drinks => "drinks",
            Category::Other => "other",
        }
    }

    /// The human-readable label for this category.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::FruitsVeg => "Fruits & vegetables",
            Category::Bakery => "Bakery",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat & fish",
            Category::Drinks => "Drinks",
            Category::Other => "Other",
        }
    }

    /// Parses a selector key. Returns `None` for anything outside the set.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Display label for a raw stored category value.
    ///
    /// Unrecognized values fall back to the "Other" label; the raw value
    /// itself is left untouched wherever it is stored.
    pub fn label_for(raw: &str) -> &'static str {
        Category::from_key(raw).unwrap_or(Category::Other).label()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A shopping-list record.
///
/// ## Wire Shape
/// ```json
/// { "id": 3, "name": "Milk", "quantity": "2", "category": "dairy", "purchased": false }
/// ```
///
/// Unknown response fields from the remote are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the remote collection.
    pub id: ProductId,

    /// Display name. Non-empty is enforced at submission time, not here.
    pub name: String,

    /// Free-text quantity label ("2", "500 g", ...). May be blank in
    /// storage; display falls back to "1" via [`Product::quantity_label`].
    #[serde(default)]
    pub quantity: String,

    /// Raw category value, preserved verbatim even when unrecognized.
    #[serde(default)]
    pub category: String,

    /// Whether the product has been bought already.
    #[serde(default)]
    pub purchased: bool,
}

impl Product {
    /// Builds the cached record for a confirmed create: the submitted draft
    /// plus the id the remote assigned. Only the id is taken from the
    /// response; every other field is the draft exactly as sent.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Product {
        Product {
            id,
            name: draft.name,
            quantity: draft.quantity,
            category: draft.category,
            purchased: draft.purchased,
        }
    }

    /// Copy of this product with only the `purchased` flag changed.
    pub fn with_purchased(&self, purchased: bool) -> Product {
        Product {
            purchased,
            ..self.clone()
        }
    }

    /// Quantity for display, substituting "1" for a blank label.
    pub fn quantity_label(&self) -> &str {
        if self.quantity.trim().is_empty() {
            "1"
        } else {
            &self.quantity
        }
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// The body of a create call: a product the remote has not assigned an id to
/// yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub purchased: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
