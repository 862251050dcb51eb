//! FILENAME: core/ingest/src/loader.rs
//! CSV table loading and schema reconciliation.
//!
//! Two sources, loaded once at startup: the orders table and the
//! products table. Orders have a fixed required schema; products go
//! through a one-time header reconciliation before the category column
//! is read. Malformed rows are skipped and counted, unparseable
//! timestamps become nulls on retained rows, and a missing required
//! column aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{info, warn};
use records::{OrderRecord, OrderTable, ProductRecord, ProductTable};

use crate::csv::parse_line;
use crate::error::LoadError;

// ============================================================================
// COLUMN NAMES AND FORMATS
// ============================================================================

/// Required order columns; load fails if any is absent.
const ORDER_ID: &str = "order_id";
const ORDER_STATUS: &str = "order_status";
const PURCHASE_TS: &str = "order_purchase_timestamp";
const CUSTOMER_STATE: &str = "customer_state";

/// Optional order column: orders without it simply have no delivery data.
const DELIVERED_TS: &str = "order_delivered_customer_date";

/// Canonical products category column. When absent, every product header
/// is lower-cased and trimmed once before re-checking.
const CATEGORY_COLUMN: &str = "product_category_name_english";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// LOADING
// ============================================================================

/// Loads both tables from CSV files.
pub fn load_tables(
    orders_path: impl AsRef<Path>,
    products_path: impl AsRef<Path>,
) -> Result<(OrderTable, ProductTable), LoadError> {
    let orders = load_orders(File::open(orders_path)?)?;
    let products = load_products(File::open(products_path)?)?;
    Ok((orders, products))
}

/// Loads the orders table from any CSV byte source.
///
/// Rows with a blank order id or the wrong field count are skipped (and
/// counted in the load summary); rows whose timestamps fail to parse are
/// kept with null timestamps.
pub fn load_orders<R: Read>(source: R) -> Result<OrderTable, LoadError> {
    let mut lines = BufReader::new(source).lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(LoadError::EmptyTable("orders")),
    };
    let headers = parse_line(header_line.trim_end_matches('\r'));

    let id_col = require_column(&headers, "orders", ORDER_ID)?;
    let status_col = require_column(&headers, "orders", ORDER_STATUS)?;
    let purchase_col = require_column(&headers, "orders", PURCHASE_TS)?;
    let state_col = require_column(&headers, "orders", CUSTOMER_STATE)?;
    let delivered_col = find_column(&headers, DELIVERED_TS);

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let fields = parse_line(line);
        if fields.len() != headers.len() {
            warn!(
                "orders row {}: {} fields, expected {}; skipping",
                idx + 2,
                fields.len(),
                headers.len()
            );
            skipped += 1;
            continue;
        }

        let order_id = fields[id_col].trim();
        if order_id.is_empty() {
            warn!("orders row {}: blank order id; skipping", idx + 2);
            skipped += 1;
            continue;
        }

        rows.push(OrderRecord {
            order_id: order_id.to_string(),
            status: fields[status_col].trim().to_string(),
            customer_state: optional_field(&fields[state_col]),
            purchased: parse_timestamp(&fields[purchase_col]),
            delivered: delivered_col.and_then(|col| parse_timestamp(&fields[col])),
            order_month: None,
            delivery_time: None,
        });
    }

    info!("orders: loaded {} rows, skipped {}", rows.len(), skipped);
    Ok(OrderTable::new(rows))
}

/// Loads the products table from any CSV byte source.
///
/// The category is always read from the first column. The canonical
/// category header only decides whether the one-time header
/// normalization runs.
pub fn load_products<R: Read>(source: R) -> Result<ProductTable, LoadError> {
    let mut lines = BufReader::new(source).lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(LoadError::EmptyTable("products")),
    };
    let mut headers = parse_line(header_line.trim_end_matches('\r'));

    if !headers.iter().any(|h| h == CATEGORY_COLUMN) {
        for header in headers.iter_mut() {
            *header = header.trim().to_lowercase();
        }
        if !headers.iter().any(|h| h == CATEGORY_COLUMN) {
            warn!(
                "products: no '{}' column after normalization; grouping by first column '{}'",
                CATEGORY_COLUMN, headers[0]
            );
        }
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let fields = parse_line(line);
        if fields.len() != headers.len() {
            warn!(
                "products row {}: {} fields, expected {}; skipping",
                idx + 2,
                fields.len(),
                headers.len()
            );
            skipped += 1;
            continue;
        }

        rows.push(ProductRecord {
            category: optional_field(&fields[0]),
        });
    }

    info!("products: loaded {} rows, skipped {}", rows.len(), skipped);
    Ok(ProductTable::new(headers, rows))
}

// ============================================================================
// FIELD HELPERS
// ============================================================================

fn require_column(
    headers: &[String],
    table: &'static str,
    column: &str,
) -> Result<usize, LoadError> {
    find_column(headers, column).ok_or_else(|| LoadError::MissingColumn {
        table,
        column: column.to_string(),
    })
}

fn find_column(headers: &[String], column: &str) -> Option<usize> {
    headers.iter().position(|h| h == column)
}

fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a source timestamp: full date-time first, bare date as a
/// fallback. Anything else is a null the caller keeps.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
