//! The authoritative product store.
//!
//! Owns the single canonical, insertion-ordered collection of products and
//! everything that observes it: the change history and the operation
//! counters. Filtering/sorting layers borrow from `products()`; nothing
//! keeps a second copy of product data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ProductId};
use stockroom_events::Event;

use crate::history::{ChangeEntry, ChangeHistory, ChangeKind};
use crate::product::{Product, ProductFields};

/// Notification emitted for every accepted mutation.
///
/// The store returns these instead of publishing directly; the session owns
/// the bus and decides where notifications go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreEvent {
    ProductCreated {
        id: ProductId,
        name: String,
        occurred_at: DateTime<Utc>,
    },
    ProductUpdated {
        id: ProductId,
        name: String,
        /// Field-transition text, empty when the update changed nothing.
        detail: String,
        occurred_at: DateTime<Utc>,
    },
    ProductDeleted {
        id: ProductId,
        name: String,
        occurred_at: DateTime<Utc>,
    },
}

impl StoreEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            StoreEvent::ProductCreated { id, .. }
            | StoreEvent::ProductUpdated { id, .. }
            | StoreEvent::ProductDeleted { id, .. } => *id,
        }
    }

    pub fn product_name(&self) -> &str {
        match self {
            StoreEvent::ProductCreated { name, .. }
            | StoreEvent::ProductUpdated { name, .. }
            | StoreEvent::ProductDeleted { name, .. } => name,
        }
    }
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::ProductCreated { .. } => "inventory.product.created",
            StoreEvent::ProductUpdated { .. } => "inventory.product.updated",
            StoreEvent::ProductDeleted { .. } => "inventory.product.deleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StoreEvent::ProductCreated { occurred_at, .. }
            | StoreEvent::ProductUpdated { occurred_at, .. }
            | StoreEvent::ProductDeleted { occurred_at, .. } => *occurred_at,
        }
    }
}

/// Mutation counters, incremented exactly once per accepted operation.
/// Monotonically non-decreasing for the process lifetime; a bulk reload
/// keeps counting (loaded rows count as adds).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct OperationCounters {
    pub add_count: u64,
    pub update_count: u64,
    pub delete_count: u64,
}

/// Canonical in-memory product collection.
///
/// Enforces three invariants across every mutation path:
/// - no two products share a case-insensitive (name, brand) pair
/// - price/quantity/average quantity are never negative
/// - the next assigned id is strictly greater than every id ever seen
///
/// Every mutation returns `DomainResult<StoreEvent>`; `Err` is the rejection
/// signal and leaves the store byte-for-byte unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: ProductId,
    history: ChangeHistory,
    counters: OperationCounters,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: ProductId::new(1),
            history: ChangeHistory::new(),
            counters: OperationCounters::default(),
        }
    }

    /// Create a product with a freshly assigned id.
    ///
    /// Rejection order matters: the uniqueness check runs against all current
    /// products BEFORE any numeric validation.
    pub fn create(&mut self, fields: ProductFields) -> DomainResult<StoreEvent> {
        self.ensure_pair_unique(&fields.name, &fields.brand, None)?;
        fields.ensure_non_negative()?;

        let id = self.next_id;
        self.next_id = id.next();
        Ok(self.admit(id, fields))
    }

    /// Mutate the product with `id` in place (the id itself never changes).
    pub fn update(&mut self, id: ProductId, fields: ProductFields) -> DomainResult<StoreEvent> {
        let index = self.index_of(id).ok_or(DomainError::NotFound)?;
        self.ensure_pair_unique(&fields.name, &fields.brand, Some(id))?;
        fields.ensure_non_negative()?;

        let detail = self.products[index].diff(&fields);
        self.products[index].apply_fields(fields);
        let name = self.products[index].name.clone();

        self.history.record(ChangeEntry::now(
            ChangeKind::Updated,
            name.clone(),
            Some(detail.clone()),
        ));
        self.counters.update_count += 1;

        Ok(StoreEvent::ProductUpdated {
            id,
            name,
            detail,
            occurred_at: Utc::now(),
        })
    }

    /// Remove the product with `id`. Its id is retired permanently, even if
    /// it was the highest-numbered item.
    pub fn remove(&mut self, id: ProductId) -> DomainResult<StoreEvent> {
        let index = self.index_of(id).ok_or(DomainError::NotFound)?;
        let product = self.products.remove(index);

        self.history.record(ChangeEntry::now(
            ChangeKind::Deleted,
            product.name.clone(),
            None,
        ));
        self.counters.delete_count += 1;

        Ok(StoreEvent::ProductDeleted {
            id,
            name: product.name,
            occurred_at: Utc::now(),
        })
    }

    /// First product whose name matches case-insensitively, in collection
    /// order. Brand is not part of this lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let wanted = name.to_lowercase();
        self.products
            .iter()
            .find(|p| p.name.to_lowercase() == wanted)
    }

    /// Admit a product with a caller-supplied id (bulk-load path, used by the
    /// CSV decoder). Acceptance rules and their order match `create`; the id
    /// counter only ever moves forward.
    pub fn load_from_bulk(
        &mut self,
        id: ProductId,
        fields: ProductFields,
    ) -> DomainResult<StoreEvent> {
        self.ensure_pair_unique(&fields.name, &fields.brand, None)?;
        fields.ensure_non_negative()?;

        if id >= self.next_id {
            self.next_id = id.next();
        }
        Ok(self.admit(id, fields))
    }

    /// Empty the product collection only. History, counters and the id
    /// counter survive; a reload therefore keeps appending to the same log.
    pub fn clear_products(&mut self) {
        self.products.clear();
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn history(&self) -> &ChangeHistory {
        &self.history
    }

    pub fn counters(&self) -> OperationCounters {
        self.counters
    }

    pub fn next_id(&self) -> ProductId {
        self.next_id
    }

    fn index_of(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    fn ensure_pair_unique(
        &self,
        name: &str,
        brand: &str,
        exclude: Option<ProductId>,
    ) -> DomainResult<()> {
        let clash = self
            .products
            .iter()
            .any(|p| Some(p.id()) != exclude && p.matches_pair(name, brand));
        if clash {
            return Err(DomainError::conflict(format!(
                "product '{name}' by '{brand}' already exists"
            )));
        }
        Ok(())
    }

    fn admit(&mut self, id: ProductId, fields: ProductFields) -> StoreEvent {
        let product = Product::new(id, fields);
        let name = product.name.clone();
        self.products.push(product);

        self.history
            .record(ChangeEntry::now(ChangeKind::Created, name.clone(), None));
        self.counters.add_count += 1;

        StoreEvent::ProductCreated {
            id,
            name,
            occurred_at: Utc::now(),
        }
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
