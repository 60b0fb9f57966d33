use serde::{Deserialize, Serialize};

use ordermill_catalog::ProductCatalog;
use ordermill_core::{ProductId, WorkflowResult};
use ordermill_journal::{Journal, traced};

use crate::discount::DiscountStore;

/// One accumulated product entry within an order.
///
/// Immutable once appended; `line_total` is fixed at `unit_price × quantity`
/// when the item is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Accumulator of line items built by repeated catalog lookups.
///
/// Collaborators are injected at construction: the catalog resolves
/// identifiers, the journal records every action, and the discount store is
/// shared across all orders in the workflow.
#[derive(Debug, Clone)]
pub struct Order {
    items: Vec<LineItem>,
    catalog: ProductCatalog,
    journal: Journal,
    discount: DiscountStore,
}

impl Order {
    /// Create an empty order wired to its collaborators.
    pub fn new(catalog: ProductCatalog, journal: Journal, discount: DiscountStore) -> Self {
        Self {
            items: Vec::new(),
            catalog,
            journal,
            discount,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up `product_id` in the catalog and append a line item for it.
    ///
    /// An unmatched identifier is not an error: the lookup journals the
    /// attempt and the order is left untouched. On a match the item-detail
    /// record follows the lookup's output, and the execution-trace record
    /// always closes the invocation.
    pub fn add_item_by_id(&mut self, product_id: ProductId, quantity: u32) -> WorkflowResult<()> {
        let journal = self.journal.clone();
        traced(&journal, "add_item_by_id", || {
            let Some(product) = self.catalog.is_valid_and_lookup(product_id)? else {
                return Ok(());
            };

            let line_total = product.price * f64::from(quantity);
            self.journal.append(&format!(
                "Added item: {} (x{quantity}) - Total: {line_total}",
                product.name
            ))?;
            self.items.push(LineItem {
                name: product.name,
                unit_price: product.price,
                quantity,
                line_total,
            });
            Ok(())
        })
    }

    /// Sum the accumulated line totals and apply the shared discount rate.
    ///
    /// The rate is read from the store at call time, so a discount set after
    /// this order was created still applies. An empty order totals 0.
    pub fn calculate_total(&self) -> WorkflowResult<f64> {
        traced(&self.journal, "calculate_total", || {
            let subtotal: f64 = self.items.iter().map(|item| item.line_total).sum();
            let total = subtotal * (1.0 - self.discount.rate());
            self.journal
                .append(&format!("Calculated total with discount: {total:.2}"))?;
            Ok(total)
        })
    }

    /// Overwrite the discount rate shared by every order in the workflow.
    ///
    /// `rate` is a fraction in `[0, 1)`; the journal records it as a whole
    /// percentage.
    pub fn set_discount(&self, rate: f64) -> WorkflowResult<()> {
        traced(&self.journal, "set_discount", || {
            self.discount.set(rate);
            self.journal
                .append(&format!("Discount set to {:.0}%", rate * 100.0))
        })
    }
}
