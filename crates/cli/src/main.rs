//! Fixed order-processing walkthrough.
//!
//! Builds the catalog and journal from files in the working directory, runs
//! one order through the workflow and prints the discounted total.

use anyhow::Result;

use ordermill_catalog::ProductCatalog;
use ordermill_core::ProductId;
use ordermill_journal::Journal;
use ordermill_orders::{DiscountStore, Order};

const CATALOG_FILE: &str = "products.csv";
const JOURNAL_FILE: &str = "log.txt";

fn main() -> Result<()> {
    ordermill_observability::init();
    tracing::info!(catalog = CATALOG_FILE, journal = JOURNAL_FILE, "starting order walkthrough");

    let journal = Journal::new(JOURNAL_FILE);
    let catalog = ProductCatalog::new(CATALOG_FILE, journal.clone());
    let discount = DiscountStore::new();

    let mut order = Order::new(catalog, journal, discount);

    order.add_item_by_id(ProductId::new(1), 2)?;
    order.add_item_by_id(ProductId::new(4), 3)?;

    // Identifier 99 is not in the catalog; the attempt is journaled and skipped.
    order.add_item_by_id(ProductId::new(99), 1)?;

    order.set_discount(0.10)?;

    let final_total = order.calculate_total()?;

    println!("Final total after discount: {final_total}");
    println!("Check {JOURNAL_FILE} for detailed actions.");

    Ok(())
}
