//! Text and JSON rendering for the shell. Nothing here mutates state.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use stockroom_core::Money;
use stockroom_inventory::TransactionLedger;
use stockroom_products::Catalog;
use stockroom_sales::Order;

use crate::stockroom::QueueSnapshot;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn inventory_report(out: &mut impl Write, catalog: &Catalog, total: Money) -> io::Result<()> {
    writeln!(out, "--- Current Inventory Report ---")?;
    let header = format!(
        "{:<5} {:<25} {:<15} {:>10} {:>10}",
        "ID", "Product Name", "Category", "Price", "Stock"
    );
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.len()))?;

    for product in catalog.products() {
        writeln!(
            out,
            "{:<5} {:<25} {:<15} {:>10} {:>10}",
            product.id_typed(),
            product.name(),
            product.category(),
            product.unit_price(),
            product.stock_quantity()
        )?;
    }

    writeln!(out, "{}", "-".repeat(header.len()))?;
    writeln!(out, "Total inventory value: ${}", total.grouped())
}

pub fn ledger_report(out: &mut impl Write, ledger: &TransactionLedger) -> io::Result<()> {
    writeln!(out, "--- Transaction Ledger ---")?;
    if ledger.is_empty() {
        return writeln!(out, "No transactions recorded yet.");
    }

    let header = format!(
        "{:<26} {:<12} {:<20} {}",
        "Timestamp", "Product ID", "Description", "Quantity Change"
    );
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.len()))?;

    for record in ledger.all() {
        let ts = record.timestamp().format("%Y-%m-%d %H:%M:%S").to_string();
        writeln!(
            out,
            "{:<26} {:<12} {:<20} {:+}",
            ts,
            record.product_id(),
            record.description(),
            record.quantity_delta()
        )?;
    }
    Ok(())
}

pub fn queue_report(
    out: &mut impl Write,
    snapshot: &QueueSnapshot,
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, snapshot)?;
            writeln!(out)
        }
        ReportFormat::Text => {
            writeln!(out, "--- Order Queues ---")?;
            order_section(out, "Processing queue", &snapshot.queued)?;
            order_section(out, "Backorders", &snapshot.backordered)?;
            order_section(out, "On truck", &snapshot.on_truck)
        }
    }
}

fn order_section(out: &mut impl Write, title: &str, orders: &[Order]) -> io::Result<()> {
    writeln!(out, "\n{title} ({})", orders.len())?;
    if orders.is_empty() {
        return writeln!(out, "  (empty)");
    }
    writeln!(out, "  {:<12} {:<12} {:>8}", "Order ID", "Product ID", "Quantity")?;
    for order in orders {
        writeln!(
            out,
            "  {:<12} {:<12} {:>8}",
            order.order_id, order.product_id, order.quantity
        )?;
    }
    Ok(())
}
