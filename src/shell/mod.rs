//! # Interactive Shell
//!
//! The numbered text menu that drives the records service. Each field is
//! prompted for on its own line.
//!
//! The shell is generic over its input and output so it can run against
//! stdin/stdout in the binary and against in-memory buffers in tests:
//!
//! ```rust,ignore
//! let service = RecordsService::start(CompanySystem::default(), DEFAULT_BUFFER_SIZE);
//! let input = tokio::io::BufReader::new(tokio::io::stdin());
//! Shell::new(&service, input, tokio::io::stdout()).run().await?;
//! ```

pub mod error;

pub use error::*;

use crate::clients::{EmployeeClient, InventoryClient, OrderClient, ProcessingClient};
use crate::employee_store::EmployeeError;
use crate::lifecycle::RecordsService;
use crate::model::{EmployeeCreate, EmployeeId, EmployeeUpdate, ItemCreate, ItemId, OrderCreate, OrderId};
use crate::order_processing::ProcessingError;
use crate::order_store::OrderError;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

const MENU: &str = "
1. Add employee
2. Edit employee
3. List all employees
4. Salary cost
5. Add order
6. Change order status
7. List active orders
8. Add inventory item
9. Remove stock
10. List all items
11. Check low stock
12. Fulfill order
0. Exit
";

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    employees: EmployeeClient,
    orders: OrderClient,
    inventory: InventoryClient,
    processing: ProcessingClient,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Builds a shell that talks to `service` through cloned clients.
    pub fn new(service: &RecordsService, input: R, output: W) -> Self {
        Self {
            input,
            output,
            employees: service.employee_client.clone(),
            orders: service.order_client.clone(),
            inventory: service.inventory_client.clone(),
            processing: service.processing_client.clone(),
        }
    }

    /// Runs the menu loop until the user exits or the input ends.
    pub async fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.write(MENU).await?;
            let choice = match self.prompt("Choice: ").await {
                Ok(choice) => choice,
                Err(ShellError::EndOfInput) => return Ok(()),
                Err(e) => return Err(e),
            };

            match self.dispatch(choice.trim()).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.write_line("Goodbye.").await?;
                    return Ok(());
                }
                Err(ShellError::InvalidNumber(raw)) => {
                    debug!(%raw, "Rejected numeric input");
                    self.write_line("Invalid number.").await?;
                }
                Err(ShellError::EndOfInput) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    async fn dispatch(&mut self, choice: &str) -> Result<Flow, ShellError> {
        match choice {
            "1" => self.add_employee().await?,
            "2" => self.edit_employee().await?,
            "3" => self.list_employees().await?,
            "4" => {
                let total = self.employees.total_salary_cost().await?;
                self.write_line(&format!("Total salary cost: {total}")).await?;
            }
            "5" => self.add_order().await?,
            "6" => self.update_order_status().await?,
            "7" => self.list_active_orders().await?,
            "8" => self.add_item().await?,
            "9" => self.remove_stock().await?,
            "10" => self.list_items().await?,
            "11" => self.list_low_stock().await?,
            "12" => self.fulfill().await?,
            "0" => return Ok(Flow::Exit),
            _ => self.write_line("Invalid choice.").await?,
        }
        Ok(Flow::Continue)
    }

    // --- employees ---

    async fn add_employee(&mut self) -> Result<(), ShellError> {
        let first_name = self.prompt("First name: ").await?;
        let last_name = self.prompt("Last name: ").await?;
        let id: i32 = self.prompt_number("ID: ").await?;
        let position = self.prompt("Position: ").await?;
        let salary: f64 = self.prompt_number("Salary: ").await?;

        self.employees
            .add_employee(EmployeeCreate::new(first_name, last_name, id, position, salary))
            .await?;
        self.write_line("Employee added.").await
    }

    async fn edit_employee(&mut self) -> Result<(), ShellError> {
        let id: i32 = self.prompt_number("Employee ID: ").await?;
        let position = self.prompt("New position: ").await?;
        let salary: f64 = self.prompt_number("New salary: ").await?;

        match self
            .employees
            .edit_employee(EmployeeId(id), EmployeeUpdate::new(position, salary))
            .await
        {
            Ok(()) => self.write_line("Employee updated.").await,
            Err(EmployeeError::NotFound(_)) => self.write_line("No employee with this ID.").await,
            Err(e) => Err(e.into()),
        }
    }

    async fn list_employees(&mut self) -> Result<(), ShellError> {
        let employees = self.employees.list_employees().await?;
        if employees.is_empty() {
            return self.write_line("No employees.").await;
        }
        for employee in employees {
            self.write_line(&employee.to_string()).await?;
        }
        Ok(())
    }

    // --- orders ---

    async fn add_order(&mut self) -> Result<(), ShellError> {
        let id: i32 = self.prompt_number("ID: ").await?;
        let title = self.prompt("Title: ").await?;
        let description = self.prompt("Description: ").await?;
        let status = self.prompt("Status: ").await?;
        let received_date = self.prompt("Received date: ").await?;
        let due_date = self.prompt("Due date: ").await?;

        self.orders
            .add_order(OrderCreate::new(id, title, description, status, received_date, due_date))
            .await?;
        self.write_line("Order added.").await
    }

    async fn update_order_status(&mut self) -> Result<(), ShellError> {
        let id: i32 = self.prompt_number("Order ID: ").await?;
        let status = self.prompt("New status: ").await?;

        match self.orders.update_status(OrderId(id), status).await {
            Ok(()) => self.write_line("Order status changed.").await,
            Err(OrderError::NotFound(_)) => self.write_line("No order with this ID.").await,
            Err(e) => Err(e.into()),
        }
    }

    async fn list_active_orders(&mut self) -> Result<(), ShellError> {
        let orders = self.orders.list_active().await?;
        if orders.is_empty() {
            return self.write_line("No active orders.").await;
        }
        for order in orders {
            self.write_line(&order.to_string()).await?;
        }
        Ok(())
    }

    // --- inventory ---

    async fn add_item(&mut self) -> Result<(), ShellError> {
        let id: i32 = self.prompt_number("ID: ").await?;
        let name = self.prompt("Name: ").await?;
        let quantity: i64 = self.prompt_number("Quantity: ").await?;
        let minimum_stock: i64 = self.prompt_number("Minimum: ").await?;

        self.inventory
            .add_item(ItemCreate::new(id, name, quantity, minimum_stock))
            .await?;
        self.write_line("Item saved.").await
    }

    async fn remove_stock(&mut self) -> Result<(), ShellError> {
        let id: i32 = self.prompt_number("Item ID: ").await?;
        let amount: i64 = self.prompt_number("Amount to remove: ").await?;
        let delta = amount
            .checked_neg()
            .ok_or_else(|| ShellError::InvalidNumber(amount.to_string()))?;

        match self.inventory.adjust_quantity(ItemId(id), delta).await? {
            Some(quantity) => self.write_line(&format!("Stock updated, new quantity: {quantity}")).await,
            None => self.write_line("No item with this ID.").await,
        }
    }

    async fn list_items(&mut self) -> Result<(), ShellError> {
        let mut items = self.inventory.list_items().await?;
        if items.is_empty() {
            return self.write_line("No items.").await;
        }
        items.sort_by_key(|item| item.id);
        for item in items {
            self.write_line(&item.to_string()).await?;
        }
        Ok(())
    }

    async fn list_low_stock(&mut self) -> Result<(), ShellError> {
        let mut items = self.inventory.list_low_stock().await?;
        items.sort_by_key(|item| item.id);
        self.write_line("Items below minimum:").await?;
        for item in items {
            self.write_line(&item.to_string()).await?;
        }
        Ok(())
    }

    // --- processing ---

    async fn fulfill(&mut self) -> Result<(), ShellError> {
        let id: i32 = self.prompt_number("Item ID: ").await?;
        let quantity: i64 = self.prompt_number("Quantity: ").await?;

        match self.processing.fulfill(ItemId(id), quantity).await {
            Ok(remaining) => {
                self.write_line(&format!("Order fulfilled. Remaining stock: {remaining}"))
                    .await
            }
            Err(ProcessingError::InsufficientStock { .. }) => {
                self.write_line("Cannot fulfill order: insufficient stock.").await
            }
            Err(e) => Err(e.into()),
        }
    }

    // --- I/O helpers ---

    async fn prompt(&mut self, label: &str) -> Result<String, ShellError> {
        self.write(label).await?;
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Err(ShellError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    async fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<T, ShellError> {
        let raw = self.prompt(label).await?;
        raw.trim()
            .parse()
            .map_err(|_| ShellError::InvalidNumber(raw))
    }

    async fn write(&mut self, text: &str) -> Result<(), ShellError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> Result<(), ShellError> {
        self.write(text).await?;
        self.write("\n").await
    }
}
