//! Per-table row count accumulation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::schema::Table;

/// Rows written per table over a run.
///
/// Single writer: only the batch insert engine adds to it.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Report {
    counts: BTreeMap<String, u64>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `rows` written to `table`.
    pub fn add(&mut self, table: Table, rows: u64) {
        if rows > 0 {
            *self.counts.entry(table.name().to_string()).or_insert(0) += rows;
        }
    }

    /// Rows recorded for `table` so far.
    pub fn rows(&self, table: Table) -> u64 {
        self.counts.get(table.name()).copied().unwrap_or(0)
    }

    /// Total rows written across all tables.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in Table::ALL {
            let rows = self.rows(table);
            if rows > 0 {
                writeln!(f, "  {:<12} {:>8} rows", table.name(), rows)?;
            }
        }
        write!(f, "  {:<12} {:>8} rows", "total", self.total())
    }
}
