//! Entity synthesizers.
//!
//! Pure row builders: each takes a requested count (and parent identifier
//! pools where the entity has foreign keys) and returns in-memory rows
//! ready for the batch insert engine. Nothing here talks to the database.

use chrono::{Duration, NaiveDateTime, Utc};

use crate::error::{Result, SeedError};
use crate::faker::{pick, FakeSource};
use crate::value::{Row, SqlValue};

/// Product categories with their [min, max] price bands.
const CATEGORIES: &[(&str, f64, f64)] = &[
    ("Electronics", 50.0, 2000.0),
    ("Home", 10.0, 500.0),
    ("Clothing", 5.0, 150.0),
    ("Books", 5.0, 50.0),
    ("Toys", 5.0, 100.0),
    ("Sports", 10.0, 300.0),
    ("Beauty", 5.0, 100.0),
];

/// Order lifecycle statuses.
pub const ORDER_STATUSES: &[&str] = &[
    "pending",
    "processing",
    "shipped",
    "delivered",
    "cancelled",
    "returned",
];

/// Sentiment openers for review comments.
const SENTIMENTS: &[&str] = &[
    "great",
    "terrible",
    "excellent",
    "poor",
    "decent",
    "fantastic",
    "awful",
    "amazing",
];

/// Maximum candidate line items drawn per order.
const MAX_ITEMS_PER_ORDER: i64 = 4;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Trailing window start: `days` days before now.
fn window_start(days: i64) -> NaiveDateTime {
    now() - Duration::days(days)
}

/// Synthesize `n` customer rows: (first_name, last_name, email, created_at).
///
/// Emails are unique within the process. On a uniqueness collision the
/// source's tracker is cleared and the draw retried once; a second
/// collision aborts the stage.
pub fn customers<F: FakeSource>(src: &mut F, n: usize) -> Result<Vec<Row>> {
    let (start, end) = (window_start(730), now());
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let first = src.first_name();
        let last = src.last_name();
        let email = match src.unique_email(&first, &last) {
            Some(email) => email,
            None => {
                src.clear_unique();
                src.unique_email(&first, &last)
                    .ok_or(SeedError::UniquenessRetryExhausted)?
            }
        };
        rows.push(vec![
            SqlValue::Text(first),
            SqlValue::Text(last),
            SqlValue::Text(email),
            SqlValue::DateTime(src.datetime_between(start, end)),
        ]);
    }
    Ok(rows)
}

/// Synthesize `n` product rows: (name, category, price, created_at).
///
/// Category is uniform; price is uniform within the category's band,
/// rounded to 2 decimal places.
pub fn products<F: FakeSource>(src: &mut F, n: usize) -> Vec<Row> {
    let (start, end) = (window_start(730), now());
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let &(category, min, max) = pick(src, CATEGORIES);
        let mut word = src.word();
        if let Some(head) = word.get_mut(0..1) {
            head.make_ascii_uppercase();
        }
        let name = format!("{} {}", src.company(), word);
        rows.push(vec![
            SqlValue::Text(name),
            SqlValue::Text(category.to_string()),
            SqlValue::Float(src.price(min, max)),
            SqlValue::DateTime(src.datetime_between(start, end)),
        ]);
    }
    rows
}

/// Synthesize `n` order rows: (customer_id, order_date, status).
pub fn orders<F: FakeSource>(src: &mut F, customer_ids: &[i64], n: usize) -> Result<Vec<Row>> {
    if customer_ids.is_empty() {
        return Err(SeedError::MissingDependency(
            "no customers available".to_string(),
        ));
    }
    let (start, end) = (window_start(365), now());
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        rows.push(vec![
            SqlValue::Int(*pick(src, customer_ids)),
            SqlValue::DateTime(src.datetime_between(start, end)),
            SqlValue::Text(pick(src, ORDER_STATUSES).to_string()),
        ]);
    }
    Ok(rows)
}

/// Synthesize candidate order-item rows: (order_id, product_id, quantity).
///
/// Each order gets 1-4 independent draws with quantity 1-5; the same
/// (order, product) pair may repeat and must be merged by
/// [`crate::aggregate::merge_order_items`] before insertion.
pub fn order_items<F: FakeSource>(
    src: &mut F,
    order_ids: &[i64],
    product_ids: &[i64],
) -> Result<Vec<Row>> {
    if product_ids.is_empty() {
        return Err(SeedError::MissingDependency(
            "no products available".to_string(),
        ));
    }
    let mut rows = Vec::new();
    for &order_id in order_ids {
        let count = src.int_range(1, MAX_ITEMS_PER_ORDER);
        for _ in 0..count {
            rows.push(vec![
                SqlValue::Int(order_id),
                SqlValue::Int(*pick(src, product_ids)),
                SqlValue::Int(src.int_range(1, 5)),
            ]);
        }
    }
    Ok(rows)
}

/// Synthesize `n` review rows:
/// (customer_id, product_id, rating, comment, review_date).
pub fn reviews<F: FakeSource>(
    src: &mut F,
    customer_ids: &[i64],
    product_ids: &[i64],
    n: usize,
) -> Result<Vec<Row>> {
    if customer_ids.is_empty() {
        return Err(SeedError::MissingDependency(
            "no customers available".to_string(),
        ));
    }
    if product_ids.is_empty() {
        return Err(SeedError::MissingDependency(
            "no products available".to_string(),
        ));
    }
    let (start, end) = (window_start(365), now());
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let comment = format!(
            "This product is {}. {}",
            pick(src, SENTIMENTS),
            src.sentence(8)
        );
        rows.push(vec![
            SqlValue::Int(*pick(src, customer_ids)),
            SqlValue::Int(*pick(src, product_ids)),
            SqlValue::Int(src.int_range(1, 5)),
            SqlValue::Text(comment),
            SqlValue::DateTime(src.datetime_between(start, end)),
        ]);
    }
    Ok(rows)
}
