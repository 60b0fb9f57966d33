//! Shared discount configuration.

use std::cell::Cell;
use std::rc::Rc;

/// Single-field store for the workflow-wide discount rate.
///
/// Every order receives a clone of the same store at construction, so a rate
/// change is observed by all existing and future orders on their next total
/// calculation. The rate is a fraction in `[0, 1)`, not a percentage, and
/// starts at 0 (no discount).
///
/// The workflow is single-threaded, so the shared cell takes no lock and the
/// type is `!Send`.
#[derive(Debug, Clone, Default)]
pub struct DiscountStore {
    rate: Rc<Cell<f64>>,
}

impl DiscountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rate currently in force.
    pub fn rate(&self) -> f64 {
        self.rate.get()
    }

    /// Overwrite the rate for every holder of this store.
    pub fn set(&self, rate: f64) {
        self.rate.set(rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(DiscountStore::new().rate(), 0.0);
    }

    #[test]
    fn clones_observe_the_latest_set() {
        let store = DiscountStore::new();
        let before = store.clone();

        store.set(0.10);
        store.set(0.25);
        let after = store.clone();

        assert_eq!(before.rate(), 0.25);
        assert_eq!(after.rate(), 0.25);
    }
}
