use serde::{Deserialize, Serialize};

use stockroom_inventory::Product;

/// Current filter settings. All active criteria must hold (logical AND).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Quantity floor; products below it are hidden.
    pub min_quantity: i64,
    /// When false, zero-quantity products are hidden even if they clear the
    /// floor.
    pub show_zero_quantity: bool,
    /// Case-insensitive name substring. A blank (empty or whitespace-only)
    /// value matches everything; a non-blank value is matched as-is,
    /// untrimmed.
    pub search_text: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_quantity: 0,
            show_zero_quantity: true,
            search_text: String::new(),
        }
    }
}

/// Holds the current criteria and derives filtered views on demand.
///
/// Criteria are transient: they are never persisted, and changing them does
/// not touch the store.
#[derive(Debug, Default, Clone)]
pub struct FilterEngine {
    criteria: FilterCriteria,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn set_min_quantity(&mut self, min_quantity: i64) {
        self.criteria.min_quantity = min_quantity;
    }

    pub fn set_show_zero_quantity(&mut self, show_zero_quantity: bool) {
        self.criteria.show_zero_quantity = show_zero_quantity;
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.criteria.search_text = search_text.into();
    }

    /// The subset of `products` passing every active criterion, in input
    /// order (stable, no reordering). Borrows; never copies product data.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let needle = if self.criteria.search_text.trim().is_empty() {
            None
        } else {
            Some(self.criteria.search_text.to_lowercase())
        };

        products
            .iter()
            .filter(|p| self.matches(p, needle.as_deref()))
            .collect()
    }

    fn matches(&self, product: &Product, needle: Option<&str>) -> bool {
        if product.quantity < self.criteria.min_quantity {
            return false;
        }
        if !self.criteria.show_zero_quantity && product.quantity == 0 {
            return false;
        }
        match needle {
            Some(needle) => product.name.to_lowercase().contains(needle),
            None => true,
        }
    }
}
