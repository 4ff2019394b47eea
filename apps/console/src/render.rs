//! # View Derivation & Render Sink
//!
//! Turns (cache, filter state) into a fully derived view model and hands it
//! to a render sink. The sink is a trait so the whole engine runs headless
//! under test; the terminal renderer is just one implementation.
//!
//! The view is rebuilt from scratch on every invocation, with no diffing. At
//! shopping-list scale a full rebuild is instantaneous, so this is a stated
//! design simplification rather than a scalability feature.

use basket_core::{Category, FilterState, Product, ProductId, Summary};
use console::style;

// =============================================================================
// View Models
// =============================================================================

/// Badge text for a bought product.
pub const BADGE_PURCHASED: &str = "Purchased";
/// Badge text for a product still on the list.
pub const BADGE_TO_BUY: &str = "To buy";

/// One visual row of the product list.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: ProductId,
    pub name: String,
    /// `"{quantity} pcs • {label}"`; quantity falls back to "1", the label
    /// falls back to "Other" for unrecognized categories.
    pub meta: String,
    pub purchased: bool,
    pub badge: &'static str,
}

impl RowView {
    fn of(product: &Product) -> RowView {
        RowView {
            id: product.id,
            name: product.name.clone(),
            meta: format!(
                "{} pcs • {}",
                product.quantity_label(),
                Category::label_for(&product.category)
            ),
            purchased: product.purchased,
            badge: if product.purchased {
                BADGE_PURCHASED
            } else {
                BADGE_TO_BUY
            },
        }
    }
}

/// The complete derived view: filtered rows plus whole-cache summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    /// Visible rows, in filtered (cache) order.
    pub rows: Vec<RowView>,
    /// Counters over the whole cache, not just the visible rows.
    pub summary: Summary,
}

impl ListView {
    /// Derives the view in full from the cache and the current filter.
    pub fn derive(products: &[Product], filter: &FilterState) -> ListView {
        ListView {
            rows: filter.apply(products).into_iter().map(RowView::of).collect(),
            summary: Summary::of(products),
        }
    }

    /// True when the filtered sequence is empty (empty-state indicator).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Render Sink
// =============================================================================

/// Consumer of derived views and failure notifications.
///
/// Implementations redraw from scratch each call. Tests use a recording sink;
/// the real app uses [`TermRenderer`].
pub trait RenderSink {
    /// Redraws the product list from the given view.
    fn render(&mut self, view: &ListView);

    /// Shows a blocking, user-visible failure notification.
    fn notify_error(&mut self, message: &str);
}

// =============================================================================
// Terminal Renderer
// =============================================================================

/// Renders the list as styled terminal output.
#[derive(Debug, Default)]
pub struct TermRenderer;

impl TermRenderer {
    pub fn new() -> TermRenderer {
        TermRenderer
    }
}

impl RenderSink for TermRenderer {
    fn render(&mut self, view: &ListView) {
        println!();
        if view.is_empty() {
            println!("  {}", style("Nothing here. Your filters match no products.").dim());
        } else {
            for (row_number, row) in view.rows.iter().enumerate() {
                let badge = if row.purchased {
                    style(row.badge).green()
                } else {
                    style(row.badge).yellow()
                };
                let name = if row.purchased {
                    style(row.name.as_str()).dim()
                } else {
                    style(row.name.as_str()).bold()
                };
                println!("  {:>2}. {name}  [{badge}]", row_number + 1);
                println!("      {}", style(row.meta.as_str()).dim());
            }
        }
        println!(
            "  {}",
            style(format!(
                "{} items · {} purchased",
                view.summary.total, view.summary.purchased
            ))
            .cyan()
        );
        println!();
    }

    fn notify_error(&mut self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), style(message).red());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::CategoryFilter;

    fn product(id: i64, name: &str, quantity: &str, category: &str, purchased: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            quantity: quantity.into(),
            category: category.into(),
            purchased,
        }
    }

    #[test]
    fn test_row_meta_and_badge() {
        let row = RowView::of(&product(1, "Milk", "2", "dairy", false));
        assert_eq!(row.meta, "2 pcs • Dairy");
        assert_eq!(row.badge, BADGE_TO_BUY);

        let row = RowView::of(&product(2, "Bread", "", "bakery", true));
        assert_eq!(row.meta, "1 pcs • Bakery");
        assert_eq!(row.badge, BADGE_PURCHASED);
    }

    #[test]
    fn test_unrecognized_category_renders_under_other() {
        let row = RowView::of(&product(3, "Ice", "1", "frozen", false));
        assert_eq!(row.meta, "1 pcs • Other");
    }

    #[test]
    fn test_derive_filters_rows_but_counts_everything() {
        let products = vec![
            product(1, "Milk", "1", "dairy", true),
            product(2, "Bread", "1", "bakery", false),
        ];
        let filter = FilterState {
            active: CategoryFilter::Only(Category::Bakery),
            search: String::new(),
        };

        let view = ListView::derive(&products, &filter);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "Bread");
        // Summary stays whole-cache.
        assert_eq!(view.summary, Summary { total: 2, purchased: 1 });
    }

    #[test]
    fn test_empty_view_signals_empty_state() {
        let view = ListView::derive(&[], &FilterState::default());
        assert!(view.is_empty());
        assert_eq!(view.summary.total, 0);
    }
}
