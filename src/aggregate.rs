//! Order-item aggregation.
//!
//! Candidate line items come from independent random draws, so the same
//! (order_id, product_id) pair can appear more than once. The schema has a
//! uniqueness constraint on that pair; this merge must run before the rows
//! reach the batch insert engine.

use ahash::AHashMap;

use crate::value::{Row, SqlValue};

/// Merge candidate (order_id, product_id, quantity) rows so each distinct
/// (order, product) pair appears once, with quantities summed.
///
/// First-seen order is preserved. Rows that do not match the expected
/// shape are passed through untouched so the database can reject them.
pub fn merge_order_items(rows: Vec<Row>) -> Vec<Row> {
    let mut merged: Vec<Row> = Vec::with_capacity(rows.len());
    let mut index: AHashMap<(i64, i64), usize> = AHashMap::new();

    for row in rows {
        let key = match (row.first().and_then(SqlValue::as_int), row.get(1).and_then(SqlValue::as_int)) {
            (Some(order_id), Some(product_id)) if row.len() == 3 => (order_id, product_id),
            _ => {
                merged.push(row);
                continue;
            }
        };
        match index.get(&key) {
            Some(&at) => {
                let extra = row[2].as_int().unwrap_or(0);
                if let SqlValue::Int(qty) = &mut merged[at][2] {
                    *qty += extra;
                }
            }
            None => {
                index.insert(key, merged.len());
                merged.push(row);
            }
        }
    }
    merged
}
