use serde::{Deserialize, Serialize};

use stockroom_inventory::Product;

/// Available orderings for the presented view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortCriterion {
    /// Ascending by store-assigned id (insertion chronology).
    #[default]
    ById,
    /// Ascending lexicographic by name.
    ByName,
    /// Ascending lexicographic by brand.
    ByBrand,
    /// Descending by quantity.
    ByQuantityDesc,
    /// Descending by price.
    ByPriceDesc,
}

/// Holds the current criterion and orders a borrowed view deterministically.
///
/// All orderings are stable: ties keep their relative input order, so
/// re-sorting an unchanged set is idempotent.
#[derive(Debug, Default, Clone)]
pub struct SortEngine {
    criterion: SortCriterion,
}

impl SortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criterion(&self) -> SortCriterion {
        self.criterion
    }

    pub fn set_criterion(&mut self, criterion: SortCriterion) {
        self.criterion = criterion;
    }

    pub fn apply<'a>(&self, mut products: Vec<&'a Product>) -> Vec<&'a Product> {
        match self.criterion {
            SortCriterion::ById => products.sort_by(|a, b| a.id().cmp(&b.id())),
            SortCriterion::ByName => products.sort_by(|a, b| a.name.cmp(&b.name)),
            SortCriterion::ByBrand => products.sort_by(|a, b| a.brand.cmp(&b.brand)),
            SortCriterion::ByQuantityDesc => products.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
            SortCriterion::ByPriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ProductId;
    use stockroom_inventory::ProductFields;

    fn product(id: u32, name: &str, brand: &str, price: f64, quantity: i64) -> Product {
        Product::new(
            ProductId::new(id),
            ProductFields::new(name, brand, price, quantity, 0),
        )
    }

    fn ids(view: &[&Product]) -> Vec<u32> {
        view.iter().map(|p| p.id().get()).collect()
    }

    fn engine(criterion: SortCriterion) -> SortEngine {
        let mut engine = SortEngine::new();
        engine.set_criterion(criterion);
        engine
    }

    #[test]
    fn by_id_is_ascending() {
        let products = [
            product(3, "C", "X", 1.0, 1),
            product(1, "A", "X", 1.0, 1),
            product(2, "B", "X", 1.0, 1),
        ];
        let view = engine(SortCriterion::ById).apply(products.iter().collect());
        assert_eq!(ids(&view), [1, 2, 3]);
    }

    #[test]
    fn by_name_is_ascending_lexicographic() {
        let products = [
            product(1, "Nail", "X", 1.0, 1),
            product(2, "Bolt", "X", 1.0, 1),
        ];
        let view = engine(SortCriterion::ByName).apply(products.iter().collect());
        assert_eq!(ids(&view), [2, 1]);
    }

    #[test]
    fn by_name_ties_preserve_input_order() {
        let products = [
            product(2, "A", "X", 1.0, 1),
            product(1, "A", "X", 1.0, 1),
        ];
        let view = engine(SortCriterion::ByName).apply(products.iter().collect());
        assert_eq!(ids(&view), [2, 1]);
    }

    #[test]
    fn by_brand_is_ascending_lexicographic() {
        let products = [
            product(1, "A", "Globex", 1.0, 1),
            product(2, "B", "Acme", 1.0, 1),
        ];
        let view = engine(SortCriterion::ByBrand).apply(products.iter().collect());
        assert_eq!(ids(&view), [2, 1]);
    }

    #[test]
    fn by_quantity_is_descending() {
        let products = [
            product(1, "A", "X", 1.0, 5),
            product(2, "B", "X", 1.0, 20),
            product(3, "C", "X", 1.0, 0),
        ];
        let view = engine(SortCriterion::ByQuantityDesc).apply(products.iter().collect());
        assert_eq!(ids(&view), [2, 1, 3]);
    }

    #[test]
    fn by_price_is_descending() {
        let products = [
            product(1, "A", "X", 9.5, 1),
            product(2, "B", "X", 100.0, 1),
            product(3, "C", "X", 0.0, 1),
        ];
        let view = engine(SortCriterion::ByPriceDesc).apply(products.iter().collect());
        assert_eq!(ids(&view), [2, 1, 3]);
    }

    #[test]
    fn resorting_an_unchanged_set_is_idempotent() {
        let products = [
            product(2, "A", "X", 1.0, 7),
            product(1, "A", "X", 1.0, 7),
            product(3, "B", "X", 1.0, 7),
        ];
        let engine = engine(SortCriterion::ByQuantityDesc);
        let once = engine.apply(products.iter().collect());
        let twice = engine.apply(once.clone());
        assert_eq!(ids(&once), ids(&twice));
    }
}
