use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

/// A single stock item.
///
/// Identity is the store-assigned `id`; business uniqueness is the
/// case-insensitive (`name`, `brand`) pair, enforced by [`crate::ProductStore`].
/// Fields other than the id are mutated in place through the store's update
/// path only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    pub name: String,
    pub brand: String,
    /// Unit price. Never negative.
    pub price: f64,
    /// Units on hand. Never negative.
    pub quantity: i64,
    /// Reference baseline used to classify stock health; not a computed
    /// running average.
    pub average_quantity: i64,
}

impl Product {
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            brand: fields.brand,
            price: fields.price,
            quantity: fields.quantity,
            average_quantity: fields.average_quantity,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Case-insensitive match on the business-uniqueness pair.
    pub fn matches_pair(&self, name: &str, brand: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.brand.to_lowercase() == brand.to_lowercase()
    }

    /// Render the transitions between the current state and `new`, changed
    /// fields only, in fixed field order, as `field: old -> new` joined by
    /// commas. Empty when nothing changed.
    pub fn diff(&self, new: &ProductFields) -> String {
        let mut changes: Vec<String> = Vec::new();
        if self.name != new.name {
            changes.push(format!("name: {} -> {}", self.name, new.name));
        }
        if self.brand != new.brand {
            changes.push(format!("brand: {} -> {}", self.brand, new.brand));
        }
        // Exact float inequality: a price that changed in representation only
        // still shows up as a transition. Known sharp edge, kept for
        // compatibility with saved data produced by earlier versions.
        #[allow(clippy::float_cmp)]
        if self.price != new.price {
            changes.push(format!("price: {} -> {}", self.price, new.price));
        }
        if self.quantity != new.quantity {
            changes.push(format!("quantity: {} -> {}", self.quantity, new.quantity));
        }
        if self.average_quantity != new.average_quantity {
            changes.push(format!(
                "avg quantity: {} -> {}",
                self.average_quantity, new.average_quantity
            ));
        }
        changes.join(", ")
    }

    pub(crate) fn apply_fields(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.brand = fields.brand;
        self.price = fields.price;
        self.quantity = fields.quantity;
        self.average_quantity = fields.average_quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The caller-supplied portion of a product: everything except the id.
///
/// Used by create, update and the bulk-load path alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub quantity: i64,
    pub average_quantity: i64,
}

impl ProductFields {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
        quantity: i64,
        average_quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            price,
            quantity,
            average_quantity,
        }
    }

    /// Non-negativity check (invariant I2). The store runs this after the
    /// uniqueness check, never before.
    pub fn ensure_non_negative(&self) -> DomainResult<()> {
        if self.price < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if self.average_quantity < 0 {
            return Err(DomainError::validation(
                "average quantity cannot be negative",
            ));
        }
        Ok(())
    }
}
