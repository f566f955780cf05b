//! Delimited-text persistence codec.
//!
//! The core never touches the filesystem; callers hand raw text in and get
//! raw text out, and whatever opens/saves files lives outside this crate.

pub mod csv;

pub use csv::{CSV_HEADER, LoadReport, RowError, decode, encode};
