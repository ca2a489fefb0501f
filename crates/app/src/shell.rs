//! Interactive menu loop.
//!
//! Generic over its reader and writer so sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use stockroom_core::{InventoryError, parse_money, parse_product_id, parse_quantity, parse_stock};
use stockroom_products::NewProduct;
use stockroom_sales::{FulfillmentOutcome, Placement};

use crate::config::ShellConfig;
use crate::report;
use crate::stockroom::Stockroom;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Error)]
pub enum ShellError {
    /// Recoverable: reported to the user, then the menu is shown again.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// End of input; ends the session like choosing Exit.
    #[error("input closed")]
    InputClosed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MenuChoice {
    InventoryReport,
    AddProduct,
    Ledger,
    PlaceOrder,
    ProcessNextOrder,
    DispatchTruck,
    CompositeCost,
    Restock,
    Queues,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().to_ascii_lowercase().as_str() {
            "1" => MenuChoice::InventoryReport,
            "2" => MenuChoice::AddProduct,
            "3" => MenuChoice::Ledger,
            "4" => MenuChoice::PlaceOrder,
            "5" => MenuChoice::ProcessNextOrder,
            "6" => MenuChoice::DispatchTruck,
            "7" => MenuChoice::CompositeCost,
            "8" => MenuChoice::Restock,
            "9" => MenuChoice::Queues,
            "0" | "q" | "quit" | "exit" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

pub struct Shell<R, W> {
    stockroom: Stockroom,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(stockroom: Stockroom, config: ShellConfig, input: R, output: W) -> Self {
        Self {
            stockroom,
            config,
            input,
            output,
        }
    }

    pub fn stockroom(&self) -> &Stockroom {
        &self.stockroom
    }

    pub fn into_parts(self) -> (Stockroom, W) {
        (self.stockroom, self.output)
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            if self.config.clear_screen {
                write!(self.output, "{CLEAR_SCREEN}")?;
            }
            self.print_menu()?;

            let line = match self.prompt("Enter your choice: ") {
                Err(ShellError::InputClosed) => break,
                other => other?,
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                match self.pause() {
                    Err(ShellError::InputClosed) => break,
                    other => other?,
                }
                continue;
            };
            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting the system. Goodbye!")?;
                break;
            }

            match self.perform(choice) {
                Ok(()) => {}
                Err(ShellError::Inventory(err)) => {
                    tracing::warn!(error = %err, ?choice, "action rejected");
                    writeln!(self.output, "Error: {err}")?;
                }
                Err(ShellError::InputClosed) => break,
                Err(err) => return Err(err),
            }
            match self.pause() {
                Err(ShellError::InputClosed) => break,
                other => other?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "===== Simple Inventory Management System =====")?;
        writeln!(out, "\n[INVENTORY]")?;
        writeln!(out, "1. Generate Inventory Report")?;
        writeln!(out, "2. Add New Product")?;
        writeln!(out, "3. View Transaction Ledger")?;
        writeln!(out, "\n[ORDERS & DELIVERY]")?;
        writeln!(out, "4. Place Customer Order")?;
        writeln!(out, "5. Process Next Order & Load Truck")?;
        writeln!(out, "6. Dispatch Truck")?;
        writeln!(out, "\n[OTHER]")?;
        writeln!(out, "7. Calculate Composite Product Cost")?;
        writeln!(out, "8. Restock Product")?;
        writeln!(out, "9. View Order Queues")?;
        writeln!(out, "0. Exit")?;
        writeln!(out, "============================================")
    }

    fn perform(&mut self, choice: MenuChoice) -> Result<(), ShellError> {
        match choice {
            MenuChoice::InventoryReport => {
                let total = self.stockroom.total_value()?;
                report::inventory_report(&mut self.output, self.stockroom.catalog(), total)?
            }
            MenuChoice::AddProduct => self.add_product()?,
            MenuChoice::Ledger => report::ledger_report(&mut self.output, self.stockroom.ledger())?,
            MenuChoice::PlaceOrder => self.place_order()?,
            MenuChoice::ProcessNextOrder => self.process_next_order()?,
            MenuChoice::DispatchTruck => self.dispatch_truck()?,
            MenuChoice::CompositeCost => self.composite_cost()?,
            MenuChoice::Restock => self.restock()?,
            MenuChoice::Queues => report::queue_report(
                &mut self.output,
                &self.stockroom.queue_snapshot(),
                self.config.report_format,
            )?,
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn add_product(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "--- Add New Product ---")?;
        let name = self.prompt("Enter product name: ")?;
        let category = self.prompt("Enter product category: ")?;
        let unit_price = parse_money(&self.prompt("Enter price: ")?)?;
        let stock_quantity = parse_stock(&self.prompt("Enter initial stock level: ")?)?;

        let id = self.stockroom.add_product(NewProduct {
            name: name.clone(),
            category,
            unit_price,
            stock_quantity,
        })?;
        writeln!(self.output, "\nSuccessfully added '{name}' with Product ID: {id}")?;
        Ok(())
    }

    fn place_order(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "--- Place New Customer Order ---")?;
        let product_id = parse_product_id(&self.prompt("Enter product ID to order: ")?)?;
        let name = self
            .stockroom
            .find_product(product_id)
            .ok_or(InventoryError::ProductNotFound(product_id))?
            .name()
            .to_string();
        let quantity = parse_quantity(&self.prompt(&format!("Enter quantity for '{name}': "))?)?;

        match self.stockroom.submit_order(product_id, quantity)? {
            Placement::Queued(order) => writeln!(
                self.output,
                "Sufficient stock. Order {} placed in the processing queue.",
                order.order_id
            )?,
            Placement::Backordered(order) => writeln!(
                self.output,
                "Insufficient stock. Order {} placed in the backorder queue.",
                order.order_id
            )?,
        }
        Ok(())
    }

    fn process_next_order(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\nProcessing next order...")?;
        match self.stockroom.process_next_order()? {
            FulfillmentOutcome::Loaded(order) => writeln!(
                self.output,
                "Order {} ({} x product {}) loaded onto the truck.",
                order.order_id, order.quantity, order.product_id
            )?,
            FulfillmentOutcome::Backordered(order) => writeln!(
                self.output,
                "Stock for product {} ran short; order {} moved to the backorder queue.",
                order.product_id, order.order_id
            )?,
            FulfillmentOutcome::Idle => writeln!(self.output, "No orders waiting.")?,
        }
        Ok(())
    }

    fn dispatch_truck(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\nDispatching truck...")?;
        let unloaded = self.stockroom.dispatch_truck();
        if unloaded.is_empty() {
            writeln!(self.output, "Truck is empty.")?;
            return Ok(());
        }
        for order in &unloaded {
            writeln!(
                self.output,
                "Delivered order {} ({} x product {})",
                order.order_id, order.quantity, order.product_id
            )?;
        }
        writeln!(self.output, "{} order(s) dispatched.", unloaded.len())?;
        Ok(())
    }

    fn composite_cost(&mut self) -> Result<(), ShellError> {
        let product_id = parse_product_id(&self.prompt("Enter composite product ID: ")?)?;
        let cost = self.stockroom.composite_cost(product_id)?;
        writeln!(self.output, "Calculated cost: ${cost}")?;
        Ok(())
    }

    fn restock(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "--- Restock Product ---")?;
        let product_id = parse_product_id(&self.prompt("Enter product ID to restock: ")?)?;
        if self.stockroom.find_product(product_id).is_none() {
            return Err(InventoryError::ProductNotFound(product_id).into());
        }
        let quantity = parse_quantity(&self.prompt("Enter quantity received: ")?)?;

        let promoted = self.stockroom.restock(product_id, quantity)?;
        let on_hand = self
            .stockroom
            .find_product(product_id)
            .map_or(0, |p| p.stock_quantity());
        writeln!(self.output, "Product {product_id} now has {on_hand} in stock.")?;
        for order in &promoted {
            writeln!(
                self.output,
                "Backorder {} moved to the processing queue.",
                order.order_id
            )?;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), ShellError> {
        if self.config.pause_after_action {
            self.prompt("\nPress Enter to continue...")?;
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, ShellError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
