//! Filter/sort pipeline.
//!
//! Pure functions over borrowed products: the store stays the single copy of
//! the data, and presentation recomputes its view on demand (filter first,
//! then sort) after any mutation notification.

pub mod filter;
pub mod sort;

pub use filter::{FilterCriteria, FilterEngine};
pub use sort::{SortCriterion, SortEngine};
