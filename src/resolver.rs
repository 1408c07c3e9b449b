//! Parent identifier resolution.
//!
//! Child synthesizers need pools of valid parent ids. Resolution tries, in
//! order: ids the caller already holds from an earlier stage, a live
//! SELECT against the parent table, then a deterministic synthetic range.
//! Failures here never abort a run; an empty final pool is only an error
//! at the synthesizer that requires it.

use crate::executor::Executor;
use crate::schema::Table;

/// Resolve the identifier pool for `table`.
///
/// A non-empty `explicit` list wins outright. Otherwise ids are fetched
/// from the table; if the fetch fails (table absent, write-only target) or
/// comes back empty, the fallback range `[1, fallback_count]` is used.
/// `fallback_count` of 0 yields an empty pool.
pub fn resolve_pool<E: Executor>(
    exec: &mut E,
    table: Table,
    explicit: Option<&[i64]>,
    fallback_count: u64,
) -> Vec<i64> {
    if let Some(ids) = explicit {
        if !ids.is_empty() {
            return ids.to_vec();
        }
    }
    match exec.select_ids(table) {
        Ok(ids) if !ids.is_empty() => ids,
        // Absent table or unsupported read: recovered locally, never surfaced.
        Ok(_) | Err(_) => (1..=fallback_count as i64).collect(),
    }
}
