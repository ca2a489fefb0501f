use stockroom_app::{ReportFormat, Shell, ShellConfig, Stockroom};
use stockroom_core::{Money, ProductId};

fn run_session(config: ShellConfig, script: &str) -> (Stockroom, String) {
    let stockroom = Stockroom::seeded().expect("demo data loads");
    let mut shell = Shell::new(stockroom, config, script.as_bytes(), Vec::new());
    shell.run().expect("session runs to completion");
    let (stockroom, out) = shell.into_parts();
    (stockroom, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn full_order_lifecycle_session() {
    let script = [
        "2", "USB Hub", "Accessories", "19.99", "25", // add product
        "4", "201", "20", // queued
        "4", "201", "20", // queued: routing does not reserve stock
        "4", "102", "500", // backordered
        "5", // load first chair order
        "5", // second chair order is now short
        "8", "201", "10", // restock promotes it
        "9", // queue report
        "6", // dispatch
        "3", // ledger
        "0",
    ]
    .join("\n")
        + "\n";

    let (stockroom, out) = run_session(ShellConfig::batch(), &script);

    assert!(out.contains("Successfully added 'USB Hub' with Product ID: 902"));
    assert_eq!(out.matches("placed in the processing queue").count(), 2);
    assert_eq!(out.matches("placed in the backorder queue").count(), 1);
    assert!(out.contains("loaded onto the truck"));
    assert!(out.contains("ran short"));
    assert!(out.contains("Product 201 now has 20 in stock."));
    assert!(out.contains("moved to the processing queue."));
    assert!(out.contains("Processing queue (1)"));
    assert!(out.contains("Backorders (1)"));
    assert!(out.contains("On truck (1)"));
    assert!(out.contains("1 order(s) dispatched."));
    assert!(out.contains("order fulfilled      -20"));
    assert!(out.contains("restock              +10"));
    assert!(out.contains("Exiting the system. Goodbye!"));

    assert_eq!(stockroom.catalog().len(), 7);
    assert_eq!(
        stockroom.find_product(ProductId::new(201)).unwrap().stock_quantity(),
        20
    );
    // 6 seeded + USB Hub + one fulfillment + one restock
    assert_eq!(stockroom.ledger().len(), 9);
    assert!(stockroom.truck().is_empty());
    assert_eq!(stockroom.router().queue().len(), 1);
    assert_eq!(stockroom.router().backorders().len(), 1);
}

#[test]
fn errors_are_reported_and_the_menu_continues() {
    let script = "4\nabc\n8\n404\n7\n101\n0\n";
    let (stockroom, out) = run_session(ShellConfig::batch(), script);

    assert!(out.contains("Error: invalid numeric input for product id: \"abc\""));
    assert!(out.contains("Error: product 404 not found"));
    assert!(out.contains("Calculated cost: $75.50"));
    assert_eq!(stockroom.total_value().unwrap(), Money::new(26_515, 0));
}

#[test]
fn queue_report_can_be_json() {
    let config = ShellConfig {
        report_format: ReportFormat::Json,
        ..ShellConfig::batch()
    };
    let (_, out) = run_session(config, "4\n103\n5\n9\n0\n");

    let start = out.find('{').expect("json object in output");
    let end = out.rfind('}').expect("json object end");
    let value: serde_json::Value = serde_json::from_str(&out[start..=end]).unwrap();
    assert_eq!(value["queued"][0]["product_id"], 103);
    assert_eq!(value["queued"][0]["quantity"], 5);
    assert!(value["on_truck"].as_array().unwrap().is_empty());
}
