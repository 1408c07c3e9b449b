//! Seed an e-commerce database with realistic fake data.
//!
//! The pipeline synthesizes customers, products, orders, order line items,
//! reviews, and shipments, and persists them through chunked multi-row
//! INSERTs in foreign-key dependency order.
//!
//! # Example
//!
//! ```rust
//! use shop_seeder::executor::MemoryDb;
//! use shop_seeder::faker::FakerSource;
//! use shop_seeder::pipeline::{run, SeedPlan};
//! use shop_seeder::report::Report;
//!
//! let mut db = MemoryDb::new();
//! let mut src = FakerSource::new(42);
//! let plan = SeedPlan {
//!     customers: 5,
//!     products: 3,
//!     orders: 4,
//!     shipments: true,
//!     ..Default::default()
//! };
//! let mut report = Report::new();
//! run(&mut db, &mut src, &plan, Some(&mut report)).unwrap();
//! assert_eq!(report.rows(shop_seeder::schema::Table::Orders), 4);
//! ```

pub mod aggregate;
pub mod cmd;
pub mod config;
pub mod dump;
pub mod error;
pub mod executor;
pub mod faker;
pub mod insert;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod schema;
pub mod shipment;
pub mod synth;
pub mod value;

pub use error::{Result, SeedError};
pub use pipeline::SeedPlan;
pub use schema::Table;
pub use value::{Row, SqlValue};
