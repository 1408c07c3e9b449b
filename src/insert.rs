//! Batch insert engine.
//!
//! Splits row sequences into bounded chunks, one batched write per chunk,
//! and collects generated identifiers in submission order for the tables
//! whose ids feed later stages.

use crate::error::Result;
use crate::executor::Executor;
use crate::report::Report;
use crate::schema::Table;
use crate::value::Row;

/// Default rows per batched write.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Result of a batched insert.
#[derive(Debug, Default)]
pub struct InsertOutcome {
    /// Rows actually written.
    pub rows_written: usize,
    /// Generated identifiers, in submission order; `None` for tables whose
    /// inserts do not echo ids.
    pub ids: Option<Vec<i64>>,
}

impl InsertOutcome {
    /// The id list, or empty when the table returns none.
    pub fn into_ids(self) -> Vec<i64> {
        self.ids.unwrap_or_default()
    }
}

/// Insert `rows` into `table` in chunks of at most `chunk_size`.
///
/// Empty input is a no-op: no write is issued and the outcome carries an
/// empty id list for id-returning tables. The optional report is bumped by
/// rows written, not by chunk count. A `chunk_size` of 0 is treated as the
/// default.
pub fn insert_batch<E: Executor>(
    exec: &mut E,
    table: Table,
    rows: &[Row],
    chunk_size: usize,
    mut report: Option<&mut Report>,
) -> Result<InsertOutcome> {
    let collect_ids = table.returns_ids();
    if rows.is_empty() {
        return Ok(InsertOutcome {
            rows_written: 0,
            ids: collect_ids.then(Vec::new),
        });
    }

    let chunk_size = if chunk_size == 0 { DEFAULT_CHUNK_SIZE } else { chunk_size };
    let mut ids = collect_ids.then(|| Vec::with_capacity(rows.len()));

    for chunk in rows.chunks(chunk_size) {
        match ids.as_mut() {
            Some(ids) => ids.extend(exec.insert_returning(table, chunk)?),
            None => exec.insert(table, chunk)?,
        }
    }

    if let Some(report) = report.as_deref_mut() {
        report.add(table, rows.len() as u64);
    }

    Ok(InsertOutcome {
        rows_written: rows.len(),
        ids,
    })
}
