//! Derived statistics.

use std::collections::HashSet;

use serde::Serialize;

use crate::store::ProductStore;

/// Point-in-time statistics snapshot.
///
/// Always recomputed from current store state; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_products: usize,
    /// Distinct product names. Case-SENSITIVE distinctness: "Nail" and
    /// "nail" count as two names even though they would collide for
    /// pair-uniqueness purposes.
    pub unique_names: usize,
    /// `total_products / max(unique_names, 1)`, rendered to two decimals.
    pub avg_products_per_name: String,
    pub add_count: u64,
    pub update_count: u64,
    pub delete_count: u64,
}

impl Statistics {
    pub fn compute(store: &ProductStore) -> Self {
        let total_products = store.len();
        let unique_names = store
            .products()
            .iter()
            .map(|p| p.name.as_str())
            .collect::<HashSet<_>>()
            .len();
        let avg = total_products as f64 / unique_names.max(1) as f64;
        let counters = store.counters();

        Self {
            total_products,
            unique_names,
            avg_products_per_name: format!("{avg:.2}"),
            add_count: counters.add_count,
            update_count: counters.update_count,
            delete_count: counters.delete_count,
        }
    }
}
