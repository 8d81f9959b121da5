use super::CompanySystem;
use crate::clients::{EmployeeClient, InventoryClient, OrderClient, ProcessingClient};
use crate::framework::ResourceActor;
use tracing::{error, info};

/// Channel capacity used when no other value is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// The runtime wrapper that gives async callers shared access to one [`CompanySystem`].
///
/// `RecordsService` is responsible for:
/// - **Lifecycle Management**: Spawning the records actor and stopping it again
/// - **Client Wiring**: Handing out one typed client per store, all backed by the same actor
///
/// Every client talks to the same actor, so requests from all of them are
/// applied one at a time in arrival order.
///
/// # Example
///
/// ```ignore
/// let service = RecordsService::start(CompanySystem::default(), DEFAULT_BUFFER_SIZE);
///
/// service.inventory_client.add_item(ItemCreate::new(1, "Widget", 5, 10)).await?;
/// let remaining = service.processing_client.fulfill(ItemId(1), 3).await?;
///
/// // Gracefully shut down when done
/// let system = service.shutdown().await?;
/// ```
pub struct RecordsService {
    /// Client for employee operations
    pub employee_client: EmployeeClient,

    /// Client for work-order operations
    pub order_client: OrderClient,

    /// Client for inventory operations
    pub inventory_client: InventoryClient,

    /// Client for the fulfillment workflow
    pub processing_client: ProcessingClient,

    /// Task handle of the records actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<CompanySystem>,
}

impl RecordsService {
    /// Moves `system` into a newly spawned actor and returns the wired clients.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(system: CompanySystem, buffer_size: usize) -> Self {
        let (actor, client) = ResourceActor::new(system, buffer_size);
        let handle = tokio::spawn(actor.run());

        Self {
            employee_client: EmployeeClient::new(client.clone()),
            order_client: OrderClient::new(client.clone()),
            inventory_client: InventoryClient::new(client.clone()),
            processing_client: ProcessingClient::new(client),
            handle,
        }
    }

    /// Gracefully shuts down the service and returns the final state.
    ///
    /// Dropping the clients closes the channel once every clone held elsewhere
    /// is gone too; the actor then drains its queue and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(system)` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<CompanySystem, String> {
        info!("Shutting down records service...");

        drop(self.employee_client);
        drop(self.order_client);
        drop(self.inventory_client);
        drop(self.processing_client);

        match self.handle.await {
            Ok(system) => {
                info!("Records service shutdown complete.");
                Ok(system)
            }
            Err(e) => {
                error!("Records actor failed: {:?}", e);
                Err(format!("Records actor failed: {:?}", e))
            }
        }
    }
}
