use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::lifecycle::{Command, CompanySystem, Reply};
use crate::model::ItemId;
use crate::order_processing::ProcessingError;
use tracing::{info, instrument};

/// Client for the fulfillment workflow.
///
/// The availability check and the deduction run inside one actor request,
/// so no other caller can change the stock in between.
#[derive(Clone)]
pub struct ProcessingClient {
    inner: ResourceClient<CompanySystem>,
}

impl ProcessingClient {
    pub fn new(inner: ResourceClient<CompanySystem>) -> Self {
        Self { inner }
    }

    /// Returns the remaining quantity on success.
    #[instrument(skip(self))]
    pub async fn fulfill(&self, item_id: ItemId, quantity: i64) -> Result<i64, ProcessingError> {
        info!("Sending fulfill to actor");
        match self.send(Command::Fulfill { item_id, quantity }).await? {
            Reply::Fulfilled(result) => result,
            other => unreachable!("Fulfill must reply Fulfilled, got {other:?}"),
        }
    }
}

impl ActorClient<CompanySystem> for ProcessingClient {
    type Error = ProcessingError;

    fn inner(&self) -> &ResourceClient<CompanySystem> {
        &self.inner
    }
}
