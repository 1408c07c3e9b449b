//! Unit tests for identifier pool resolution.

use shop_seeder::dump::DumpWriter;
use shop_seeder::executor::{Executor, MemoryDb};
use shop_seeder::resolver::resolve_pool;
use shop_seeder::schema::Table;
use shop_seeder::value::SqlValue;

#[test]
fn test_live_fetch_wins_over_fallback() {
    let mut db = MemoryDb::new();
    let rows: Vec<_> = (0..4).map(|i| vec![SqlValue::Int(i)]).collect();
    db.insert_returning(Table::Customers, &rows).unwrap();

    let pool = resolve_pool(&mut db, Table::Customers, None, 99);
    assert_eq!(pool, vec![1, 2, 3, 4]);
}

#[test]
fn test_explicit_beats_live_fetch() {
    let mut db = MemoryDb::new();
    let rows: Vec<_> = (0..4).map(|i| vec![SqlValue::Int(i)]).collect();
    db.insert_returning(Table::Customers, &rows).unwrap();

    let pool = resolve_pool(&mut db, Table::Customers, Some(&[7]), 99);
    assert_eq!(pool, vec![7]);
}

#[test]
fn test_empty_explicit_falls_through() {
    let mut db = MemoryDb::new();
    let pool = resolve_pool(&mut db, Table::Products, Some(&[]), 2);
    assert_eq!(pool, vec![1, 2]);
}

#[test]
fn test_failed_fetch_is_absorbed_by_fallback() {
    // The dump target cannot serve SELECTs; resolution must not error.
    let mut writer = DumpWriter::new(Vec::new());
    let pool = resolve_pool(&mut writer, Table::Customers, None, 5);
    assert_eq!(pool, vec![1, 2, 3, 4, 5]);
}
