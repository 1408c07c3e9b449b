//! SQL value representation for generated rows.
//!
//! Rows are flat tuples of loosely-typed values; the database is the
//! durable store, so nothing here carries identity beyond the row itself.

use chrono::NaiveDateTime;

/// A single column value in a generated row.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl SqlValue {
    /// Render as a PostgreSQL literal for multi-row VALUES lists.
    pub fn to_sql(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Float(n) => format!("{:.2}", n),
            SqlValue::Text(s) => format!("'{}'", escape_sql_string(s)),
            SqlValue::DateTime(dt) => format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }

    /// Extract an integer, if this value holds one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SqlValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract a datetime, if this value holds one.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Extract text, if this value holds some.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// A generated row, column order matching the table's column list.
pub type Row = Vec<SqlValue>;
