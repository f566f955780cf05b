//! `stockroom-session` — the single-operator session facade.
//!
//! Wires the store, the filter/sort engines, the codec and the notification
//! bus into the one surface presentation code talks to. Everything here runs
//! synchronously on the calling thread; there is no background work.

pub mod session;

pub use session::InventorySession;
