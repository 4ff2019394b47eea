//! # Edit Form State Machine
//!
//! Tracks whether the form represents a brand-new product or an in-progress
//! edit, and turns submitted field values into the payload for the matching
//! remote call.
//!
//! ## States & Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Edit Form Lifecycle                                 │
//! │                                                                         │
//! │                 start_edit(product)                                     │
//! │   ┌────────┐ ─────────────────────► ┌──────────────┐                   │
//! │   │  Idle  │                        │ Editing(id)  │                   │
//! │   │ (new)  │ ◄───────────────────── │ (seeded)     │                   │
//! │   └────────┘   reset() /            └──────────────┘                   │
//! │        │       confirmed submit            │                            │
//! │        │                                   │                            │
//! │        ▼ submission()                      ▼ submission()               │
//! │   Submission::Create(draft)          Submission::Update(product)        │
//! │                                      purchased copied from cache        │
//! │                                                                         │
//! │  NOTE: the caller resets the form only after the remote call succeeds;  │
//! │        on failure the values stay put so the user can retry.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Category, Product, ProductDraft, ProductId};

// =============================================================================
// Defaults
// =============================================================================

/// The submission-boundary defaults.
///
/// Enumerated exactly once; every blank field is filled from here, whether it
/// comes from a fresh form, a reset, or a sloppy submission.
#[derive(Debug, Clone, Copy)]
pub struct FormDefaults {
    pub quantity: &'static str,
    pub category: Category,
    pub purchased: bool,
}

pub const FORM_DEFAULTS: FormDefaults = FormDefaults {
    quantity: "1",
    category: Category::Other,
    purchased: false,
};

// =============================================================================
// Mode & Values
// =============================================================================

/// Whether the form is creating a new product or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// New-product mode.
    #[default]
    Idle,
    /// Editing the cached product with this id.
    Editing(ProductId),
}

/// Raw field values as entered. Normalization and defaulting happen in
/// [`EditForm::submission`], not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub quantity: String,
    /// Selector key ("dairy", "other", ...). Blank means "use the default".
    pub category: String,
}

/// What a valid submission resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Idle mode: create this draft, then append it under the returned id.
    Create(ProductDraft),
    /// Editing mode: update the remote record, then replace it in the cache
    /// with exactly this value.
    Update(Product),
}

// =============================================================================
// Edit Form
// =============================================================================

/// The form state: current mode plus the three field values.
///
/// ## Invariants
/// - `submission` never touches the form; state changes only through
///   `start_edit` and `reset`.
/// - A validation failure means no network call and no state change.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    mode: EditMode,
    values: FormValues,
}

impl EditForm {
    /// A fresh form in new-product mode with default field values.
    pub fn new() -> EditForm {
        EditForm {
            mode: EditMode::Idle,
            values: default_values(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// True when the form represents an in-progress edit.
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    /// Current field values (e.g. to seed interactive prompts).
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Overwrites the field values with what the user entered.
    pub fn set_values(&mut self, values: FormValues) {
        self.values = values;
    }

    /// Enters edit mode for `product`, seeding the fields from it.
    ///
    /// Blank quantity/category seed as their defaults, matching what a
    /// re-submission of the untouched form would store.
    pub fn start_edit(&mut self, product: &Product) {
        self.mode = EditMode::Editing(product.id);
        self.values = FormValues {
            name: product.name.clone(),
            quantity: non_blank_or(&product.quantity, FORM_DEFAULTS.quantity),
            category: non_blank_or(&product.category, FORM_DEFAULTS.category.key()),
        };
    }

    /// Back to new-product mode with default field values.
    pub fn reset(&mut self) {
        *self = EditForm::new();
    }

    /// Validates the current values and resolves them into a submission.
    ///
    /// In editing mode the `purchased` flag is copied from the cached record
    /// with the matching id; if that record is gone, it falls back to the
    /// default (the submission still proceeds).
    pub fn submission(&self, cache: &[Product]) -> Result<Submission, ValidationError> {
        let name = self.values.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let name = name.to_string();
        let quantity = non_blank_or(&self.values.quantity, FORM_DEFAULTS.quantity);
        let category = non_blank_or(&self.values.category, FORM_DEFAULTS.category.key());

        match self.mode {
            EditMode::Idle => Ok(Submission::Create(ProductDraft {
                name,
                quantity,
                category,
                purchased: FORM_DEFAULTS.purchased,
            })),
            EditMode::Editing(id) => {
                let purchased = cache
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.purchased)
                    .unwrap_or(FORM_DEFAULTS.purchased);
                Ok(Submission::Update(Product {
                    id,
                    name,
                    quantity,
                    category,
                    purchased,
                }))
            }
        }
    }
}

impl Default for EditForm {
    fn default() -> Self {
        EditForm::new()
    }
}

fn default_values() -> FormValues {
    FormValues {
        name: String::new(),
        quantity: FORM_DEFAULTS.quantity.to_string(),
        category: FORM_DEFAULTS.category.key().to_string(),
    }
}

/// Trims `value`, substituting `fallback` when nothing is left.
fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cached(id: i64, name: &str, purchased: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            quantity: "1".into(),
            category: "other".into(),
            purchased,
        }
    }

    #[test]
    fn test_fresh_form_is_idle_with_defaults() {
        let form = EditForm::new();
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(form.values().quantity, "1");
        assert_eq!(form.values().category, "other");
        assert!(form.values().name.is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected_without_state_change() {
        let mut form = EditForm::new();
        form.set_values(FormValues {
            name: "   ".into(),
            quantity: "2".into(),
            category: "dairy".into(),
        });
        let before = form.clone();

        assert_eq!(form.submission(&[]), Err(ValidationError::EmptyName));
        assert_eq!(form, before);
    }

    #[test]
    fn test_idle_submission_builds_a_defaulted_draft() {
        let mut form = EditForm::new();
        form.set_values(FormValues {
            name: "  Milk  ".into(),
            quantity: "  ".into(),
            category: String::new(),
        });

        let submission = form.submission(&[]).unwrap();
        assert_eq!(
            submission,
            Submission::Create(ProductDraft {
                name: "Milk".into(),
                quantity: "1".into(),
                category: "other".into(),
                purchased: false,
            })
        );
    }

    #[test]
    fn test_start_edit_seeds_fields() {
        let product = Product {
            id: ProductId::new(4),
            name: "Butter".into(),
            quantity: String::new(),
            category: String::new(),
            purchased: true,
        };
        let mut form = EditForm::new();
        form.start_edit(&product);

        assert_eq!(form.mode(), EditMode::Editing(ProductId::new(4)));
        assert_eq!(form.values().name, "Butter");
        assert_eq!(form.values().quantity, "1");
        assert_eq!(form.values().category, "other");
    }

    #[test]
    fn test_editing_submission_copies_purchased_from_cache() {
        let cache = vec![cached(4, "Butter", true)];
        let mut form = EditForm::new();
        form.start_edit(&cache[0]);
        form.set_values(FormValues {
            name: "Salted butter".into(),
            quantity: "2".into(),
            category: "dairy".into(),
        });

        let submission = form.submission(&cache).unwrap();
        assert_eq!(
            submission,
            Submission::Update(Product {
                id: ProductId::new(4),
                name: "Salted butter".into(),
                quantity: "2".into(),
                category: "dairy".into(),
                purchased: true,
            })
        );
    }

    #[test]
    fn test_editing_a_vanished_record_falls_back_to_default_purchased() {
        let product = cached(9, "Gone", true);
        let mut form = EditForm::new();
        form.start_edit(&product);

        // The record was deleted out from under the edit; submission still
        // proceeds, purchased falls back to false.
        let submission = form.submission(&[]).unwrap();
        match submission {
            Submission::Update(updated) => {
                assert_eq!(updated.id, ProductId::new(9));
                assert!(!updated.purchased);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_reset_returns_to_idle_defaults() {
        let product = cached(2, "Jam", false);
        let mut form = EditForm::new();
        form.start_edit(&product);
        form.reset();

        assert_eq!(form, EditForm::new());
    }
}
