//! Generic actor framework for shared access to owned state.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait for state that an actor owns and mutates
//! - [`ResourceActor`] - Generic actor that processes requests one at a time
//! - [`ResourceClient`] - Cloneable async client
//! - [`FrameworkError`] - Transport errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning a real actor.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
