//! Table registry for the e-commerce schema.
//!
//! All SQL statement templates (INSERT/SELECT) are centralized here so the
//! rest of the crate never concatenates table or column names ad hoc.

use std::fmt;

/// The tables this seeder writes, in foreign-key dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Customers,
    Products,
    Orders,
    OrderItems,
    Reviews,
    Shipments,
}

impl Table {
    /// All tables, parents before children.
    pub const ALL: [Table; 6] = [
        Table::Customers,
        Table::Products,
        Table::Orders,
        Table::OrderItems,
        Table::Reviews,
        Table::Shipments,
    ];

    /// SQL table name.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Customers => "Customers",
            Table::Products => "Products",
            Table::Orders => "Orders",
            Table::OrderItems => "Order_Items",
            Table::Reviews => "Reviews",
            Table::Shipments => "Shipments",
        }
    }

    /// Column list, in the order synthesizers emit row values.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Customers => &["first_name", "last_name", "email", "created_at"],
            Table::Products => &["name", "category", "price", "created_at"],
            Table::Orders => &["customer_id", "order_date", "status"],
            Table::OrderItems => &["order_id", "product_id", "quantity"],
            Table::Reviews => &["customer_id", "product_id", "rating", "comment", "review_date"],
            Table::Shipments => &[
                "order_id",
                "shipped_date",
                "delivery_date",
                "shipping_method",
                "status",
            ],
        }
    }

    /// Serial primary key column, for tables that have one.
    pub fn id_column(&self) -> Option<&'static str> {
        match self {
            Table::Customers => Some("customer_id"),
            Table::Products => Some("product_id"),
            Table::Orders => Some("order_id"),
            Table::OrderItems | Table::Reviews | Table::Shipments => None,
        }
    }

    /// Whether inserts into this table yield generated identifiers that
    /// later stages reference.
    pub fn returns_ids(&self) -> bool {
        self.id_column().is_some()
    }

    /// INSERT statement prefix, up to (but not including) the VALUES rows.
    pub fn insert_prefix(&self) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES ",
            self.name(),
            self.columns().join(", ")
        )
    }

    /// Suffix appended after the VALUES rows (RETURNING clause where the
    /// generated identifiers are needed downstream).
    pub fn insert_suffix(&self) -> &'static str {
        match self.id_column() {
            Some("customer_id") => " RETURNING customer_id",
            Some("product_id") => " RETURNING product_id",
            Some("order_id") => " RETURNING order_id",
            _ => "",
        }
    }

    /// SELECT statement fetching all ids for this table.
    pub fn select_ids_sql(&self) -> Option<String> {
        self.id_column()
            .map(|id| format!("SELECT {} FROM {}", id, self.name()))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// SELECT fetching order metadata needed by shipment derivation.
pub const SELECT_ORDER_INFO: &str = "SELECT order_id, order_date, status FROM Orders";
