//! # Company Records
//!
//! Interactive entry point: starts the records service and runs the menu
//! shell on stdin/stdout until the user exits or input ends.

use company_records::lifecycle::{setup_tracing, CompanySystem, RecordsService, DEFAULT_BUFFER_SIZE};
use company_records::shell::Shell;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting company records");

    let service = RecordsService::start(CompanySystem::default(), DEFAULT_BUFFER_SIZE);

    let input = BufReader::new(tokio::io::stdin());
    let result = Shell::new(&service, input, tokio::io::stdout()).run().await;

    let system = service.shutdown().await?;
    info!(
        employees = system.employees.len(),
        orders = system.orders.len(),
        items = system.inventory.len(),
        "Application completed"
    );

    result.map_err(|e| e.to_string())
}
