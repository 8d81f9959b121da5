use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::lifecycle::{Command, CompanySystem, Reply};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_store::OrderError;
use tracing::instrument;

/// Client for work-order operations.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<CompanySystem>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<CompanySystem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn add_order(&self, params: OrderCreate) -> Result<(), OrderError> {
        match self.send(Command::AddOrder(params)).await? {
            Reply::Done => Ok(()),
            other => unreachable!("AddOrder must reply Done, got {other:?}"),
        }
    }

    #[instrument(skip(self, status))]
    pub async fn update_status(&self, id: OrderId, status: impl Into<String>) -> Result<(), OrderError> {
        let status = status.into();
        match self.send(Command::UpdateOrderStatus { id, status }).await? {
            Reply::StatusUpdated(result) => result,
            other => unreachable!("UpdateOrderStatus must reply StatusUpdated, got {other:?}"),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Order>, OrderError> {
        match self.send(Command::ListActiveOrders).await? {
            Reply::Orders(orders) => Ok(orders),
            other => unreachable!("ListActiveOrders must reply Orders, got {other:?}"),
        }
    }
}

impl ActorClient<CompanySystem> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<CompanySystem> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::OrderCreate;

    #[tokio::test]
    async fn test_order_client_with_queued_replies() {
        let mock = MockClient::<CompanySystem>::new();
        let active = vec![Order::from(OrderCreate::new(2, "Fence", "", "New", "", ""))];
        mock.push_reply(Reply::Done);
        mock.push_reply(Reply::StatusUpdated(Err(OrderError::NotFound(OrderId(9)))));
        mock.push_reply(Reply::Orders(active.clone()));

        let client = OrderClient::new(mock.client());
        client
            .add_order(OrderCreate::new(2, "Fence", "", "New", "", ""))
            .await
            .unwrap();
        assert_eq!(
            client.update_status(OrderId(9), "Done").await,
            Err(OrderError::NotFound(OrderId(9)))
        );
        assert_eq!(client.list_active().await.unwrap(), active);

        let requests = mock.take_requests();
        assert!(matches!(requests[0], Command::AddOrder(_)));
        assert!(matches!(
            &requests[1],
            Command::UpdateOrderStatus { id: OrderId(9), status } if status == "Done"
        ));
        assert!(matches!(requests[2], Command::ListActiveOrders));
        mock.verify();
    }
}
