use crate::framework::{ActorState, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for store-specific clients to share request plumbing.
///
/// Implementors only say how to reach the actor and how to turn a transport
/// failure into their own error type; `send` is provided.
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The store-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<S>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error {
        Self::Error::from(e.to_string())
    }

    /// Send one request and wait for its reply.
    #[tracing::instrument(skip(self))]
    async fn send(&self, request: S::Request) -> Result<S::Reply, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().request(request).await.map_err(Self::map_error)
    }
}
