//! Inventory domain module.
//!
//! This crate contains the authoritative product store and everything that
//! observes it (change history, statistics), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod history;
pub mod product;
pub mod stats;
pub mod store;

pub use history::{ChangeEntry, ChangeHistory, ChangeKind};
pub use product::{Product, ProductFields};
pub use stats::Statistics;
pub use store::{OperationCounters, ProductStore, StoreEvent};
