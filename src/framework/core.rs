//! # Core Actor Framework
//!
//! This module defines the generic building blocks for sharing one piece of
//! mutable state between many async callers.
//!
//! ## Key Types
//!
//! - [`ActorState`]: The trait that owned state must implement to be driven by an actor.
//! - [`ResourceActor`]: The generic actor that owns the state and processes requests.
//! - [`ResourceClient`]: The generic, cloneable client for sending requests.
//! - [`FrameworkError`]: Transport errors (the actor is gone or dropped the reply).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// State that can be owned by a [`ResourceActor`].
///
/// # Architecture Note
/// The state itself stays plain synchronous Rust. The actor gives it exclusive
/// ownership inside one task and feeds it one request at a time, so `handle`
/// never needs a lock and never observes interleaved requests.
///
/// Business outcomes (not found, insufficient stock, ...) belong in `Reply`.
/// [`FrameworkError`] is reserved for transport failures.
pub trait ActorState: Send + 'static {
    /// The request message (usually an enum of commands).
    type Request: Send + Debug + 'static;

    /// The reply message sent back to the caller.
    type Reply: Send + Debug + 'static;

    /// Apply one request to the state.
    fn handle(&mut self, request: Self::Request) -> Self::Reply;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<T>;

/// A request paired with the channel its reply goes to.
#[derive(Debug)]
pub struct Envelope<S: ActorState> {
    pub request: S::Request,
    pub respond_to: Response<S::Reply>,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns an [`ActorState`].
///
/// **Concurrency Model**:
/// Requests from every clone of the client are queued on one channel and
/// processed *sequentially* in [`ResourceActor::run`]. The state is moved into
/// the actor task, so no `Mutex` or `RwLock` is needed around it.
pub struct ResourceActor<S: ActorState> {
    receiver: mpsc::Receiver<Envelope<S>>,
    state: S,
}

impl<S: ActorState> ResourceActor<S> {
    /// Creates the actor around `state` and returns it with its client.
    ///
    /// `buffer_size` is the channel capacity; senders wait when it is full.
    pub fn new(state: S, buffer_size: usize) -> (Self, ResourceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client is dropped, then hands back the state.
    pub async fn run(mut self) -> S {
        // Extract just the type name (e.g., "CompanySystem" instead of the full path)
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(Envelope { request, respond_to }) = self.receiver.recv().await {
            debug!(state_type, ?request, "Request");
            let reply = self.state.handle(request);
            handled += 1;
            if respond_to.send(reply).is_err() {
                debug!(state_type, "Caller went away before the reply");
            }
        }

        info!(state_type, handled, "Shutdown");
        self.state
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Cheap to clone: it only holds the channel sender.
pub struct ResourceClient<S: ActorState> {
    sender: mpsc::Sender<Envelope<S>>,
}

impl<S: ActorState> Clone for ResourceClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> ResourceClient<S> {
    pub fn new(sender: mpsc::Sender<Envelope<S>>) -> Self {
        Self { sender }
    }

    /// Sends `request` and waits for the reply.
    pub async fn request(&self, request: S::Request) -> Result<S::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Envelope { request, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
