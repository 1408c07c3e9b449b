//! Database boundary.
//!
//! The pipeline only ever talks to an [`Executor`]: one batched write per
//! call, plus the two SELECT shapes identifier resolution and shipment
//! derivation need. Connection and transaction lifecycle belong to the
//! caller.

use ahash::AHashMap;

use crate::error::{Result, SeedError};
use crate::schema::Table;
use crate::value::{Row, SqlValue};

/// Synchronous cursor over the target database.
pub trait Executor {
    /// Persist one chunk of rows with a single batched INSERT.
    fn insert(&mut self, table: Table, rows: &[Row]) -> Result<()>;

    /// Persist one chunk and echo the generated identifiers, in the order
    /// the rows were submitted.
    fn insert_returning(&mut self, table: Table, rows: &[Row]) -> Result<Vec<i64>>;

    /// Fetch all primary-key ids currently in `table`.
    fn select_ids(&mut self, table: Table) -> Result<Vec<i64>>;

    /// Fetch (order_id, order_date, status) rows for all orders.
    fn select_order_info(&mut self) -> Result<Vec<Row>>;

    /// Count rows currently in `table`.
    fn count(&mut self, table: Table) -> Result<u64>;
}

#[derive(Default)]
struct TableStore {
    next_id: i64,
    ids: Vec<i64>,
    rows: Vec<Row>,
}

/// In-memory [`Executor`] with sequential id assignment.
///
/// Backs dry runs and tests; behaves like a real database for everything
/// the pipeline observes (id echo order, row counts, order metadata).
#[derive(Default)]
pub struct MemoryDb {
    tables: AHashMap<Table, TableStore>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows stored for `table`, in insertion order.
    pub fn rows(&self, table: Table) -> &[Row] {
        self.tables.get(&table).map(|t| t.rows.as_slice()).unwrap_or(&[])
    }

    /// Ids assigned for `table`, in insertion order.
    pub fn ids(&self, table: Table) -> &[i64] {
        self.tables.get(&table).map(|t| t.ids.as_slice()).unwrap_or(&[])
    }

    fn store(&mut self, table: Table) -> &mut TableStore {
        self.tables.entry(table).or_default()
    }
}

impl Executor for MemoryDb {
    fn insert(&mut self, table: Table, rows: &[Row]) -> Result<()> {
        self.store(table).rows.extend(rows.iter().cloned());
        Ok(())
    }

    fn insert_returning(&mut self, table: Table, rows: &[Row]) -> Result<Vec<i64>> {
        let store = self.store(table);
        let mut assigned = Vec::with_capacity(rows.len());
        for row in rows {
            store.next_id += 1;
            store.ids.push(store.next_id);
            store.rows.push(row.clone());
            assigned.push(store.next_id);
        }
        Ok(assigned)
    }

    fn select_ids(&mut self, table: Table) -> Result<Vec<i64>> {
        Ok(self.tables.get(&table).map(|t| t.ids.clone()).unwrap_or_default())
    }

    fn select_order_info(&mut self) -> Result<Vec<Row>> {
        let store = match self.tables.get(&Table::Orders) {
            Some(store) => store,
            None => return Ok(Vec::new()),
        };
        // Orders rows are (customer_id, order_date, status); re-shape to
        // (order_id, order_date, status) the way the SELECT projects them.
        Ok(store
            .ids
            .iter()
            .zip(store.rows.iter())
            .map(|(&id, row)| {
                vec![
                    SqlValue::Int(id),
                    row.get(1).cloned().unwrap_or(SqlValue::Null),
                    row.get(2).cloned().unwrap_or(SqlValue::Null),
                ]
            })
            .collect())
    }

    fn count(&mut self, table: Table) -> Result<u64> {
        Ok(self.tables.get(&table).map(|t| t.rows.len() as u64).unwrap_or(0))
    }
}

/// Helper for executors that cannot serve reads (e.g. write-only dump
/// targets): a uniform "unsupported" error the resolver absorbs.
pub(crate) fn unsupported(what: &str) -> SeedError {
    SeedError::Database(format!("{what} is not supported by this executor"))
}
