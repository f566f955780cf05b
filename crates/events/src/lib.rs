//! `stockroom-events` — mutation notification plumbing.
//!
//! The store itself stays pure; after an accepted mutation the session
//! publishes one notification here, and presentation code subscribes instead
//! of attaching per-field listeners to products.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
