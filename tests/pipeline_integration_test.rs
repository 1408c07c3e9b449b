//! End-to-end pipeline tests against the in-memory executor.

use shop_seeder::error::SeedError;
use shop_seeder::executor::{Executor, MemoryDb};
use shop_seeder::faker::FakerSource;
use shop_seeder::pipeline::{self, SeedPlan};
use shop_seeder::report::Report;
use shop_seeder::schema::Table;
use shop_seeder::value::SqlValue;

#[test]
fn test_full_run_is_fk_consistent() {
    let mut db = MemoryDb::new();
    let mut src = FakerSource::new(42);
    let mut report = Report::new();
    let plan = SeedPlan {
        customers: 5,
        products: 3,
        orders: 4,
        reviews: 6,
        shipments: true,
        ..Default::default()
    };

    pipeline::run(&mut db, &mut src, &plan, Some(&mut report)).unwrap();

    let customer_ids = db.ids(Table::Customers).to_vec();
    let product_ids = db.ids(Table::Products).to_vec();
    let order_ids = db.ids(Table::Orders).to_vec();
    assert_eq!(customer_ids.len(), 5);
    assert_eq!(product_ids.len(), 3);
    assert_eq!(order_ids.len(), 4);

    // Orders reference only the five generated customers.
    for row in db.rows(Table::Orders) {
        assert!(customer_ids.contains(&row[0].as_int().unwrap()));
    }

    // Items reference only the four returned order ids and three product
    // ids, with no duplicate (order, product) pair.
    let mut pairs = std::collections::HashSet::new();
    for row in db.rows(Table::OrderItems) {
        let order_id = row[0].as_int().unwrap();
        let product_id = row[1].as_int().unwrap();
        assert!(order_ids.contains(&order_id));
        assert!(product_ids.contains(&product_id));
        assert!(pairs.insert((order_id, product_id)), "duplicate pair");
        let qty = row[2].as_int().unwrap();
        assert!(qty >= 1);
    }

    // Reviews reference the generated pools.
    assert_eq!(db.rows(Table::Reviews).len(), 6);
    for row in db.rows(Table::Reviews) {
        assert!(customer_ids.contains(&row[0].as_int().unwrap()));
        assert!(product_ids.contains(&row[1].as_int().unwrap()));
    }

    // Shipments exist only for shipped/delivered orders.
    let qualifying: Vec<i64> = db
        .ids(Table::Orders)
        .iter()
        .zip(db.rows(Table::Orders).iter())
        .filter(|(_, row)| {
            matches!(row[2].as_text(), Some("shipped") | Some("delivered"))
        })
        .map(|(&id, _)| id)
        .collect();
    let shipments = db.rows(Table::Shipments);
    assert!(shipments.len() <= 4);
    assert_eq!(shipments.len(), qualifying.len());
    for row in shipments {
        assert!(qualifying.contains(&row[0].as_int().unwrap()));
    }

    assert_eq!(report.rows(Table::Customers), 5);
    assert_eq!(report.rows(Table::Products), 3);
    assert_eq!(report.rows(Table::Orders), 4);
}

#[test]
fn test_sanity_check_names_every_missing_parent() {
    let mut db = MemoryDb::new();
    let mut src = FakerSource::new(1);
    let plan = SeedPlan {
        orders: 3,
        sanity_check: true,
        ..Default::default()
    };

    match pipeline::run(&mut db, &mut src, &plan, None) {
        Err(SeedError::SanityCheck(violations)) => {
            assert_eq!(violations.len(), 2);
            assert!(violations.iter().any(|v| v.contains("Customers")));
            assert!(violations.iter().any(|v| v.contains("Products")));
        }
        other => panic!("expected SanityCheck failure, got {other:?}"),
    }

    // Nothing was written before the abort.
    for table in Table::ALL {
        assert!(db.rows(table).is_empty());
    }
}

#[test]
fn test_sanity_check_passes_with_preexisting_parents() {
    let mut db = MemoryDb::new();
    let mut src = FakerSource::new(2);

    // Seed parents in a first run.
    let first = SeedPlan {
        customers: 4,
        products: 2,
        ..Default::default()
    };
    pipeline::run(&mut db, &mut src, &first, None).unwrap();

    // Orders-only second run, resolving parents from the live tables.
    let second = SeedPlan {
        orders: 3,
        sanity_check: true,
        ..Default::default()
    };
    pipeline::run(&mut db, &mut src, &second, None).unwrap();

    assert_eq!(db.rows(Table::Orders).len(), 3);
    let customer_ids = db.ids(Table::Customers);
    for row in db.rows(Table::Orders) {
        assert!(customer_ids.contains(&row[0].as_int().unwrap()));
    }
}

#[test]
fn test_stages_are_skippable() {
    let mut db = MemoryDb::new();
    let mut src = FakerSource::new(3);
    let plan = SeedPlan {
        customers: 2,
        ..Default::default()
    };
    pipeline::run(&mut db, &mut src, &plan, None).unwrap();
    assert_eq!(db.rows(Table::Customers).len(), 2);
    assert!(db.rows(Table::Products).is_empty());
    assert!(db.rows(Table::Orders).is_empty());
}

#[test]
fn test_shipment_cap_limits_rows() {
    let mut db = MemoryDb::new();
    let mut src = FakerSource::new(4);
    let plan = SeedPlan {
        customers: 3,
        products: 3,
        orders: 60,
        shipments: true,
        shipment_cap: Some(2),
        ..Default::default()
    };
    pipeline::run(&mut db, &mut src, &plan, None).unwrap();
    assert!(db.rows(Table::Shipments).len() <= 2);
}

#[test]
fn test_shipments_without_orders_fail() {
    let mut db = MemoryDb::new();
    let mut src = FakerSource::new(5);
    let plan = SeedPlan {
        shipments: true,
        ..Default::default()
    };
    match pipeline::run(&mut db, &mut src, &plan, None) {
        Err(SeedError::MissingDependency(msg)) => assert!(msg.contains("orders")),
        other => panic!("expected MissingDependency, got {other:?}"),
    }
}

#[test]
fn test_shipments_fetch_order_info_when_orders_skipped() {
    let mut db = MemoryDb::new();
    let mut src = FakerSource::new(6);

    let first = SeedPlan {
        customers: 3,
        products: 2,
        orders: 40,
        ..Default::default()
    };
    pipeline::run(&mut db, &mut src, &first, None).unwrap();

    let second = SeedPlan {
        shipments: true,
        ..Default::default()
    };
    pipeline::run(&mut db, &mut src, &second, None).unwrap();

    // Shipment statuses map from the persisted order statuses.
    let shipped: Vec<SqlValue> = db
        .rows(Table::Orders)
        .iter()
        .filter_map(|row| match row[2].as_text() {
            Some("shipped") => Some(SqlValue::Text("in_transit".to_string())),
            Some("delivered") => Some(SqlValue::Text("delivered".to_string())),
            _ => None,
        })
        .collect();
    let statuses: Vec<SqlValue> = db
        .rows(Table::Shipments)
        .iter()
        .map(|row| row[4].clone())
        .collect();
    assert_eq!(statuses, shipped);
}

#[test]
fn test_generate_orders_entry_point_returns_ids() {
    let mut db = MemoryDb::new();
    let mut src = FakerSource::new(7);
    let stage =
        pipeline::generate_orders(&mut db, &mut src, &[1, 2], &[10, 20], 5, 100, None).unwrap();
    assert_eq!(stage.order_ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(stage.order_info.len(), 5);
    let count = db.count(Table::Orders).unwrap();
    assert_eq!(count, 5);
}
