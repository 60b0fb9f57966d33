//! `ordermill-orders` — order accumulation, discount, totals.
//!
//! An [`Order`] is built by repeated catalog lookups, shares the
//! workflow-wide [`DiscountStore`] with every other order, and journals each
//! mutating operation.

pub mod discount;
pub mod order;

pub use discount::DiscountStore;
pub use order::{LineItem, Order};
