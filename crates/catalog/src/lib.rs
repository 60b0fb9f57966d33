//! `ordermill-catalog` — read-only product lookup.
//!
//! Resolves product identifiers against the tabular catalog file. The file is
//! reloaded on every lookup; nothing is cached between calls.

pub mod catalog;

pub use catalog::{Product, ProductCatalog};
