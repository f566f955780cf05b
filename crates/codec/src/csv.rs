//! Comma-delimited product serialization.
//!
//! The format is intentionally plain: no quoting or escaping, so a name or
//! brand containing a comma corrupts its row on reload. Known limitation of
//! the format itself; decode treats such rows like any other malformed row.

use serde::Serialize;
use thiserror::Error;

use stockroom_core::ProductId;
use stockroom_inventory::{Product, ProductFields, ProductStore};

/// First line of every encoded document.
pub const CSV_HEADER: &str = "ID,Name,Brand,Price,Quantity,AverageQuantity";

/// Per-row failure during decode. Counted and skipped, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected at least 6 fields, got {0}")]
    FieldCount(usize),

    #[error("unparsable {field}: {value:?}")]
    Number { field: &'static str, value: String },
}

/// Outcome of a bulk decode: how many rows were admitted into the store and
/// how many were skipped (malformed or rejected by the store).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub errors: usize,
}

/// Serialize products in store order.
///
/// Prices render with two decimals, with a whole-number `.00` tail stripped:
/// `100` rather than `100.00`, but `99.50` stays as-is.
pub fn encode(products: &[Product]) -> String {
    let mut out = String::with_capacity(64 * (products.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for product in products {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            product.id(),
            product.name,
            product.brand,
            format_price(product.price),
            product.quantity,
            product.average_quantity,
        ));
    }
    out
}

/// Parse `text` and feed each well-formed row through the store's bulk-load
/// path. The first line is skipped unconditionally as the header.
///
/// Replacement semantics are the caller's job: clear the store before
/// calling; decode itself only appends. Every malformed or store-rejected
/// row increments `errors` and is skipped; the decode never aborts.
pub fn decode(text: &str, store: &mut ProductStore) -> LoadReport {
    let mut report = LoadReport::default();

    for line in text.lines().skip(1) {
        match parse_row(line) {
            Ok((id, fields)) => match store.load_from_bulk(id, fields) {
                Ok(_) => report.loaded += 1,
                Err(err) => {
                    tracing::warn!(%err, line, "row rejected by store, skipping");
                    report.errors += 1;
                }
            },
            Err(err) => {
                tracing::warn!(%err, line, "malformed row, skipping");
                report.errors += 1;
            }
        }
    }

    report
}

fn format_price(price: f64) -> String {
    let rendered = format!("{price:.2}");
    match rendered.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => rendered,
    }
}

fn parse_row(line: &str) -> Result<(ProductId, ProductFields), RowError> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 6 {
        return Err(RowError::FieldCount(parts.len()));
    }

    let id = parse_number::<u32>("id", parts[0])?;
    let name = parts[1].trim().to_string();
    let brand = parts[2].trim().to_string();
    // Decimal commas are normalized to points before parsing.
    let price_text = parts[3].trim().replace(',', ".");
    let price = parse_number::<f64>("price", &price_text)?;
    let quantity = parse_number::<i64>("quantity", parts[4])?;
    let average_quantity = parse_number::<i64>("average quantity", parts[5])?;

    Ok((
        ProductId::new(id),
        ProductFields::new(name, brand, price, quantity, average_quantity),
    ))
}

fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, RowError> {
    raw.trim().parse::<T>().map_err(|_| RowError::Number {
        field,
        value: raw.trim().to_string(),
    })
}
