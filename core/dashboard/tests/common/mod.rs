//! FILENAME: tests/common/mod.rs
//! Shared fixtures for dashboard integration tests.

use dashboard::Dashboard;
use ingest::{load_orders, load_products};
use records::{derive, OrderTable, ProductTable};

// ============================================================================
// FIXTURE DATA
// ============================================================================

/// Seven orders spanning three months. Covers every edge the panels have to
/// handle: a missing delivery date (o02), a delivery logged before the
/// purchase (o03), a blank customer state (o04) and an unparseable purchase
/// timestamp (o07).
pub const ORDERS_CSV: &str = "\
order_id,order_status,order_purchase_timestamp,order_delivered_customer_date,customer_state
o01,delivered,2017-01-02 10:15:00,2017-01-06 08:00:00,SP
o02,shipped,2017-01-15 09:00:00,,RJ
o03,canceled,2017-02-03 18:30:00,2017-02-01 07:00:00,SP
o04,delivered,2017-02-10 11:00:00,2017-02-20 16:45:00,
o05,delivered,2017-02-11 14:20:00,2017-02-14 10:00:00,MG
o06,delivered,2017-03-01 08:05:00,2017-03-08 12:30:00,SP
o07,invoiced,not-a-date,,RJ
";

/// Seven products across three categories, one with no category at all.
pub const PRODUCTS_CSV: &str = "\
product_category_name_english,product_id
bed_bath_table,p01
health_beauty,p02
toys,p03
toys,p04
bed_bath_table,p05
,p06
toys,p07
";

// ============================================================================
// FIXTURE BUILDERS
// ============================================================================

/// Parse the fixture CSVs into derived tables, the same way the binary
/// pipeline would before handing them to a `Dashboard`.
pub fn sample_tables() -> (OrderTable, ProductTable) {
    let orders = load_orders(ORDERS_CSV.as_bytes()).unwrap();
    let products = load_products(PRODUCTS_CSV.as_bytes()).unwrap();
    (derive(orders), products)
}

/// Build a dashboard over the fixture tables with the default panel config.
pub fn sample_dashboard() -> (Dashboard, OrderTable, ProductTable) {
    let (orders, products) = sample_tables();
    let dashboard = Dashboard::new(&orders, &products).unwrap();
    (dashboard, orders, products)
}
