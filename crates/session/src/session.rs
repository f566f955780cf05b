use std::sync::Arc;

use stockroom_codec::LoadReport;
use stockroom_core::{DomainResult, ProductId};
use stockroom_events::{EventBus, InMemoryEventBus, Subscription};
use stockroom_inventory::{Product, ProductFields, ProductStore, Statistics, StoreEvent};
use stockroom_query::{FilterCriteria, FilterEngine, SortCriterion, SortEngine};

/// One operator's working session over a single product store.
///
/// Owns the canonical store plus the transient view settings, and publishes
/// a [`StoreEvent`] for every accepted interactive mutation so presentation
/// can refresh without polling. Rejections come back as typed errors and
/// publish nothing.
pub struct InventorySession {
    store: ProductStore,
    filter: FilterEngine,
    sort: SortEngine,
    bus: Arc<InMemoryEventBus<StoreEvent>>,
}

impl InventorySession {
    pub fn new() -> Self {
        Self {
            store: ProductStore::new(),
            filter: FilterEngine::new(),
            sort: SortEngine::new(),
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    /// Subscribe to mutation notifications (broadcast; one copy per
    /// subscriber).
    pub fn subscribe(&self) -> Subscription<StoreEvent> {
        self.bus.subscribe()
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    // ---- mutations -------------------------------------------------------

    pub fn create(&mut self, fields: ProductFields) -> DomainResult<ProductId> {
        let event = self.store.create(fields)?;
        let id = event.product_id();
        tracing::info!(%id, name = event.product_name(), "product created");
        self.publish(event);
        Ok(id)
    }

    pub fn update(&mut self, id: ProductId, fields: ProductFields) -> DomainResult<()> {
        let event = self.store.update(id, fields)?;
        tracing::info!(%id, name = event.product_name(), "product updated");
        self.publish(event);
        Ok(())
    }

    pub fn remove(&mut self, id: ProductId) -> DomainResult<()> {
        let event = self.store.remove(id)?;
        tracing::info!(%id, name = event.product_name(), "product removed");
        self.publish(event);
        Ok(())
    }

    // ---- queries ---------------------------------------------------------

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.store.find_by_name(name)
    }

    /// The presentable view: filter, then sort, recomputed on every call
    /// over the store's single copy of the data.
    pub fn current_view(&self) -> Vec<&Product> {
        self.sort.apply(self.filter.apply(self.store.products()))
    }

    /// Fresh statistics snapshot; nothing is cached between calls.
    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.store)
    }

    /// The full change log rendered as text.
    pub fn history_text(&self) -> String {
        self.store.history().render()
    }

    // ---- view settings ---------------------------------------------------

    pub fn filter_criteria(&self) -> &FilterCriteria {
        self.filter.criteria()
    }

    pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) {
        self.filter.set_criteria(criteria);
    }

    pub fn set_min_quantity(&mut self, min_quantity: i64) {
        self.filter.set_min_quantity(min_quantity);
    }

    pub fn set_show_zero_quantity(&mut self, show_zero_quantity: bool) {
        self.filter.set_show_zero_quantity(show_zero_quantity);
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.filter.set_search_text(search_text);
    }

    pub fn sort_criterion(&self) -> SortCriterion {
        self.sort.criterion()
    }

    pub fn set_sort_criterion(&mut self, criterion: SortCriterion) {
        self.sort.set_criterion(criterion);
    }

    // ---- persistence glue ------------------------------------------------

    /// Serialize the store for an external save collaborator. No file IO
    /// happens here.
    pub fn export_csv(&self) -> String {
        stockroom_codec::encode(self.store.products())
    }

    /// Replace the store's contents with the rows decoded from `text`.
    ///
    /// The product collection is cleared first; the change history and the
    /// operation counters are not, so a reload keeps appending to the same
    /// log and counts its rows as adds. No per-row notifications are
    /// published; the report is the reload's outcome signal.
    pub fn import_csv(&mut self, text: &str) -> LoadReport {
        self.store.clear_products();
        let report = stockroom_codec::decode(text, &mut self.store);
        tracing::info!(loaded = report.loaded, errors = report.errors, "import finished");
        report
    }

    fn publish(&self, event: StoreEvent) {
        if let Err(err) = self.bus.publish(event) {
            // The store already holds the state; a lost notification only
            // costs presentation a refresh.
            tracing::warn!(?err, "failed to publish store event");
        }
    }
}

impl Default for InventorySession {
    fn default() -> Self {
        Self::new()
    }
}
