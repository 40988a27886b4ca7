//! Generic actor framework for resource management.
//!
//! This module provides the building blocks every library actor is made of: a trait for the
//! managed records, one generic actor loop, and a typed client that talks to it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a store and processes requests in order
//! - [`ResourceClient`] - Typed, cloneable handle to a running actor
//! - [`ActorClient`] - Shared `get`/`get_all`/`delete` for resource-specific clients
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, Store};
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
