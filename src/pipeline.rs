//! Pipeline orchestration.
//!
//! Runs the entity stages in foreign-key dependency order:
//! Customers -> Products -> Orders (+Order_Items) -> Reviews -> Shipments.
//! Each stage is independently skippable; ids generated in-run are cached
//! and handed to later stages so they never re-query the database.

use crate::aggregate::merge_order_items;
use crate::error::{Result, SeedError};
use crate::executor::Executor;
use crate::faker::FakeSource;
use crate::insert::{insert_batch, DEFAULT_CHUNK_SIZE};
use crate::report::Report;
use crate::resolver::resolve_pool;
use crate::schema::Table;
use crate::shipment;
use crate::synth;
use crate::value::{Row, SqlValue};

/// What a run should generate.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub reviews: usize,
    pub shipments: bool,
    /// Upper bound on shipment rows, applied after status filtering.
    pub shipment_cap: Option<usize>,
    pub chunk_size: usize,
    /// Verify pre-existing parent rows for stages whose parents are not
    /// part of this run, before any write.
    pub sanity_check: bool,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            customers: 0,
            products: 0,
            orders: 0,
            reviews: 0,
            shipments: false,
            shipment_cap: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            sanity_check: false,
        }
    }
}

/// Orders stage output: the generated order ids plus the
/// (order_id, order_date, status) metadata shipment derivation consumes.
pub struct OrdersStage {
    pub order_ids: Vec<i64>,
    pub order_info: Vec<Row>,
}

/// Synthesize and insert `n` customers, returning their generated ids.
pub fn generate_customers<E: Executor, F: FakeSource>(
    exec: &mut E,
    src: &mut F,
    n: usize,
    chunk_size: usize,
    report: Option<&mut Report>,
) -> Result<Vec<i64>> {
    let rows = synth::customers(src, n)?;
    Ok(insert_batch(exec, Table::Customers, &rows, chunk_size, report)?.into_ids())
}

/// Synthesize and insert `n` products, returning their generated ids.
pub fn generate_products<E: Executor, F: FakeSource>(
    exec: &mut E,
    src: &mut F,
    n: usize,
    chunk_size: usize,
    report: Option<&mut Report>,
) -> Result<Vec<i64>> {
    let rows = synth::products(src, n);
    Ok(insert_batch(exec, Table::Products, &rows, chunk_size, report)?.into_ids())
}

/// Synthesize and insert `n` orders plus their line items.
///
/// Line items are built only once the order ids are known, merged per
/// (order, product) pair, then inserted.
pub fn generate_orders<E: Executor, F: FakeSource>(
    exec: &mut E,
    src: &mut F,
    customer_ids: &[i64],
    product_ids: &[i64],
    n: usize,
    chunk_size: usize,
    mut report: Option<&mut Report>,
) -> Result<OrdersStage> {
    // Both pools are checked before any write so a failure here leaves
    // nothing half-inserted.
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
    let rows = synth::orders(src, customer_ids, n)?;
    let order_ids =
        insert_batch(exec, Table::Orders, &rows, chunk_size, report.as_deref_mut())?.into_ids();

    if !order_ids.is_empty() {
        let items = merge_order_items(synth::order_items(src, &order_ids, product_ids)?);
        insert_batch(exec, Table::OrderItems, &items, chunk_size, report)?;
    }

    let order_info = order_ids
        .iter()
        .zip(rows.iter())
        .map(|(&id, row)| {
            vec![
                SqlValue::Int(id),
                row[1].clone(),
                row[2].clone(),
            ]
        })
        .collect();

    Ok(OrdersStage {
        order_ids,
        order_info,
    })
}

/// Synthesize and insert `n` reviews.
pub fn generate_reviews<E: Executor, F: FakeSource>(
    exec: &mut E,
    src: &mut F,
    customer_ids: &[i64],
    product_ids: &[i64],
    n: usize,
    chunk_size: usize,
    report: Option<&mut Report>,
) -> Result<()> {
    let rows = synth::reviews(src, customer_ids, product_ids, n)?;
    insert_batch(exec, Table::Reviews, &rows, chunk_size, report)?;
    Ok(())
}

/// Derive and insert shipments for qualifying orders.
///
/// `order_info` rows are (order_id, order_date, status); when absent they
/// are fetched from the Orders table. Returns the number of shipment rows
/// written.
pub fn generate_shipments<E: Executor, F: FakeSource>(
    exec: &mut E,
    src: &mut F,
    order_info: Option<Vec<Row>>,
    cap: Option<usize>,
    chunk_size: usize,
    report: Option<&mut Report>,
) -> Result<usize> {
    let order_info = match order_info {
        Some(info) => info,
        None => exec.select_order_info()?,
    };
    if order_info.is_empty() {
        return Err(SeedError::MissingDependency(
            "no orders available".to_string(),
        ));
    }
    let rows = shipment::derive_capped(src, &order_info, cap);
    let outcome = insert_batch(exec, Table::Shipments, &rows, chunk_size, report)?;
    Ok(outcome.rows_written)
}

/// Run the full plan against `exec`.
pub fn run<E: Executor, F: FakeSource>(
    exec: &mut E,
    src: &mut F,
    plan: &SeedPlan,
    mut report: Option<&mut Report>,
) -> Result<()> {
    if plan.sanity_check {
        check_dependencies(exec, plan)?;
    }

    let chunk = plan.chunk_size;

    let customer_ids = if plan.customers > 0 {
        generate_customers(exec, src, plan.customers, chunk, report.as_deref_mut())?
    } else {
        Vec::new()
    };
    let product_ids = if plan.products > 0 {
        generate_products(exec, src, plan.products, chunk, report.as_deref_mut())?
    } else {
        Vec::new()
    };

    let mut order_info: Option<Vec<Row>> = None;
    if plan.orders > 0 {
        let customers = resolve_pool(
            exec,
            Table::Customers,
            Some(&customer_ids),
            plan.customers as u64,
        );
        let products = resolve_pool(
            exec,
            Table::Products,
            Some(&product_ids),
            plan.products as u64,
        );
        let stage = generate_orders(
            exec,
            src,
            &customers,
            &products,
            plan.orders,
            chunk,
            report.as_deref_mut(),
        )?;
        order_info = Some(stage.order_info);
    }

    if plan.reviews > 0 {
        let customers = resolve_pool(
            exec,
            Table::Customers,
            Some(&customer_ids),
            plan.customers as u64,
        );
        let products = resolve_pool(
            exec,
            Table::Products,
            Some(&product_ids),
            plan.products as u64,
        );
        generate_reviews(
            exec,
            src,
            &customers,
            &products,
            plan.reviews,
            chunk,
            report.as_deref_mut(),
        )?;
    }

    if plan.shipments {
        generate_shipments(
            exec,
            src,
            order_info,
            plan.shipment_cap,
            chunk,
            report.as_deref_mut(),
        )?;
    }

    Ok(())
}

/// Pre-flight check: every stage that will run with a parent stage that
/// will not must find at least one pre-existing parent row. All violations
/// are collected before aborting, and nothing is written on failure.
fn check_dependencies<E: Executor>(exec: &mut E, plan: &SeedPlan) -> Result<()> {
    let mut deps: Vec<(&str, Table, bool)> = Vec::new();
    if plan.orders > 0 {
        deps.push(("orders", Table::Customers, plan.customers > 0));
        deps.push(("orders", Table::Products, plan.products > 0));
    }
    if plan.reviews > 0 {
        deps.push(("reviews", Table::Customers, plan.customers > 0));
        deps.push(("reviews", Table::Products, plan.products > 0));
    }
    if plan.shipments {
        deps.push(("shipments", Table::Orders, plan.orders > 0));
    }

    let mut violations = Vec::new();
    for (dependent, parent, parent_runs) in deps {
        if parent_runs {
            continue;
        }
        // An unreadable table counts as empty.
        let existing = exec.count(parent).unwrap_or(0);
        if existing == 0 {
            violations.push(format!(
                "{} need {} but table {} is empty",
                dependent,
                parent.name().to_lowercase(),
                parent.name()
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SeedError::SanityCheck(violations))
    }
}
