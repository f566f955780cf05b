//! Append-only change log.
//!
//! Every accepted mutation appends one entry. Entries live for the whole
//! process: a bulk reload clears the product collection but NOT this log, so
//! the log reads as "everything the operator saw happen this session".

use chrono::{DateTime, Local};
use serde::Serialize;

/// What kind of mutation an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

impl ChangeKind {
    /// Fixed rendering phrase per kind.
    pub fn verb(self) -> &'static str {
        match self {
            ChangeKind::Created => "created product",
            ChangeKind::Updated => "updated product",
            ChangeKind::Deleted => "deleted product",
        }
    }
}

/// One recorded mutation.
///
/// `detail` is present only for updates; it holds the field-transition text
/// (possibly empty when an update changed nothing).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeEntry {
    pub timestamp: DateTime<Local>,
    pub kind: ChangeKind,
    pub product_name: String,
    pub detail: Option<String>,
}

impl ChangeEntry {
    /// Entry stamped with the current wall-clock time.
    pub fn now(kind: ChangeKind, product_name: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            product_name: product_name.into(),
            detail,
        }
    }

    /// `HH:MM <verb> <name>[: <detail>]`
    fn render_line(&self) -> String {
        let ts = self.timestamp.format("%H:%M");
        match &self.detail {
            Some(detail) => format!("{ts} {} {}: {detail}", self.kind.verb(), self.product_name),
            None => format!("{ts} {} {}", self.kind.verb(), self.product_name),
        }
    }
}

/// Time-ordered log of accepted mutations.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ChangeHistory {
    entries: Vec<ChangeEntry>,
}

impl ChangeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Entries are never mutated or removed afterwards.
    pub fn record(&mut self, entry: ChangeEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the full chronological log, one `\n`-terminated line per entry.
    /// Read-only snapshot: rendering never mutates state.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| {
                let mut line = e.render_line();
                line.push('\n');
                line
            })
            .collect()
    }
}
