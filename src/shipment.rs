//! Shipment derivation.
//!
//! Shipments are not synthesized from a requested count; they are derived
//! from the persisted state of orders. Only orders already shipped or
//! delivered get a shipment row.

use chrono::Duration;

use crate::faker::{pick, FakeSource};
use crate::value::{Row, SqlValue};

/// Carriers for the shipping_method column.
const CARRIERS: &[&str] = &["UPS", "FedEx", "USPS", "DHL"];

/// Derive shipment rows from (order_id, order_date, status) rows.
///
/// "delivered" orders yield a delivered shipment, "shipped" orders an
/// in-transit one (status match is case-insensitive); any other status
/// yields nothing. Shipped date is the order date plus 1-3 days, delivery
/// a further 1-7 days out. Rows of the wrong shape are skipped.
pub fn derive<F: FakeSource>(src: &mut F, order_rows: &[Row]) -> Vec<Row> {
    let mut shipments = Vec::new();
    for row in order_rows {
        if row.len() != 3 {
            continue;
        }
        let (order_id, order_date, status) = match (
            row[0].as_int(),
            row[1].as_datetime(),
            row[2].as_text(),
        ) {
            (Some(id), Some(date), Some(status)) => (id, date, status),
            _ => continue,
        };
        let shipment_status = match status.to_lowercase().as_str() {
            "delivered" => "delivered",
            "shipped" => "in_transit",
            _ => continue,
        };
        let shipped_date = order_date + Duration::days(src.int_range(1, 3));
        let delivery_date = shipped_date + Duration::days(src.int_range(1, 7));
        shipments.push(vec![
            SqlValue::Int(order_id),
            SqlValue::DateTime(shipped_date),
            SqlValue::DateTime(delivery_date),
            SqlValue::Text(pick(src, CARRIERS).to_string()),
            SqlValue::Text(shipment_status.to_string()),
        ]);
    }
    shipments
}

/// Derive, then truncate to at most `cap` rows, preserving input order.
/// The cap applies after status filtering.
pub fn derive_capped<F: FakeSource>(src: &mut F, order_rows: &[Row], cap: Option<usize>) -> Vec<Row> {
    let mut shipments = derive(src, order_rows);
    if let Some(cap) = cap {
        shipments.truncate(cap);
    }
    shipments
}
