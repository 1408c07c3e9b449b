//! SQL dump target.
//!
//! Renders the same batched writes a live cursor would issue as multi-row
//! INSERT statements, so a run can be captured to a file and replayed with
//! `psql`. Generated identifiers are simulated with per-table serial
//! counters, matching what a fresh database would assign.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ahash::AHashMap;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{Result, SeedError};
use crate::executor::{unsupported, Executor};
use crate::schema::Table;
use crate::value::Row;

/// Write-only [`Executor`] rendering INSERT statements to `out`.
///
/// SELECTs are unsupported; identifier resolution against a dump target
/// falls back to its synthetic range.
pub struct DumpWriter<W: Write> {
    out: W,
    next_ids: AHashMap<Table, i64>,
}

impl<W: Write> DumpWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_ids: AHashMap::new(),
        }
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_insert(&mut self, table: Table, rows: &[Row]) -> Result<()> {
        let values: Vec<String> = rows
            .iter()
            .map(|row| {
                let cols: Vec<String> = row.iter().map(|v| v.to_sql()).collect();
                format!("({})", cols.join(", "))
            })
            .collect();
        writeln!(
            self.out,
            "{}{}{};",
            table.insert_prefix(),
            values.join(", "),
            table.insert_suffix()
        )
        .map_err(|e| SeedError::Database(e.to_string()))
    }
}

impl<W: Write> Executor for DumpWriter<W> {
    fn insert(&mut self, table: Table, rows: &[Row]) -> Result<()> {
        self.write_insert(table, rows)
    }

    fn insert_returning(&mut self, table: Table, rows: &[Row]) -> Result<Vec<i64>> {
        self.write_insert(table, rows)?;
        let next = self.next_ids.entry(table).or_insert(0);
        let ids = (*next + 1..=*next + rows.len() as i64).collect();
        *next += rows.len() as i64;
        Ok(ids)
    }

    fn select_ids(&mut self, _table: Table) -> Result<Vec<i64>> {
        Err(unsupported("SELECT"))
    }

    fn select_order_info(&mut self) -> Result<Vec<Row>> {
        Err(unsupported("SELECT"))
    }

    fn count(&mut self, _table: Table) -> Result<u64> {
        Err(unsupported("COUNT"))
    }
}

/// Open the dump output: `None` means stdout, a `.gz` suffix gzips.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
        Some(path) => {
            let file = File::create(path)?;
            if path.extension().is_some_and(|ext| ext == "gz") {
                Ok(Box::new(BufWriter::new(GzEncoder::new(
                    file,
                    Compression::default(),
                ))))
            } else {
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}
