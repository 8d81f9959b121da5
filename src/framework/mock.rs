//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then
//! [`expect_request`] to take the next request and answer it by hand.
//! For scripted replies, [`MockClient`] answers requests from a queue.

use crate::framework::{ActorState, Envelope, ResourceClient};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A mock client that answers every request with the next queued reply.
///
/// Received requests are kept so the test can inspect them afterwards.
///
/// # Example
/// ```ignore
/// let mock = MockClient::<CompanySystem>::new();
/// mock.push_reply(Reply::Available(true));
///
/// let client = InventoryClient::new(mock.client());
/// assert!(client.is_available(ItemId(1), 3).await?);
/// mock.verify(); // Ensures all replies were consumed
/// ```
pub struct MockClient<S: ActorState> {
    client: ResourceClient<S>,
    replies: Arc<Mutex<VecDeque<S::Reply>>>,
    received: Arc<Mutex<Vec<S::Request>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> MockClient<S> {
    /// Creates a new mock client with no queued replies.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<Envelope<S>>(100);
        let replies = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let replies_clone = replies.clone();
        let received_clone = received.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(Envelope { request, respond_to }) = receiver.recv().await {
                let reply = replies_clone.lock().unwrap().pop_front();
                received_clone.lock().unwrap().push(request);

                match reply {
                    Some(reply) => {
                        let _ = respond_to.send(reply);
                    }
                    // Dropping the responder surfaces as `FrameworkError::ActorDropped`.
                    None => drop(respond_to),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            replies,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<S> {
        self.client.clone()
    }

    /// Queues the reply for the next request.
    pub fn push_reply(&self, reply: S::Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Takes every request received so far.
    pub fn take_requests(&self) -> Vec<S::Request> {
        std::mem::take(&mut *self.received.lock().unwrap())
    }

    /// Verifies that all queued replies were consumed.
    pub fn verify(&self) {
        let replies = self.replies.lock().unwrap();
        if !replies.is_empty() {
            panic!("Not all replies were consumed. {} remaining", replies.len());
        }
    }
}

impl<S: ActorState> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Typed clients only translate calls into requests and replies into results.
/// Here the test plays the actor: it reads the request off `receiver`, checks
/// it, and sends whatever reply the scenario needs.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
) -> (ResourceClient<S>, mpsc::Receiver<Envelope<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to take the next request and its responder.
pub async fn expect_request<S: ActorState>(
    receiver: &mut mpsc::Receiver<Envelope<S>>,
) -> Option<(S::Request, oneshot::Sender<S::Reply>)> {
    receiver
        .recv()
        .await
        .map(|envelope| (envelope.request, envelope.respond_to))
}
