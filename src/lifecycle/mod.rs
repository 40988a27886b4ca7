//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the three library actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are constructed without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for User {
//!     type Context = ();
//! }
//!
//! impl ActorEntity for Order {
//!     type Context = (UserClient, BookClient);
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - process remaining messages, log final state
//! 4. **Await completion** - wait for all actor tasks to finish
//!
//! The Order actor's context holds client clones, which is fine because the dependency
//! graph (Order → User, Order → Book) is acyclic. The User and Book channels close once the
//! Order actor has exited and dropped its context.
//!
//! ## Cascades
//!
//! Books and users own their orders. [`LibrarySystem::delete_book`] and
//! [`LibrarySystem::delete_user`] purge the dependent orders through the Order actor so that
//! no actor ever has to call back into the Order actor.

pub mod library_system;
pub mod tracing;

pub use self::library_system::*;
pub use self::tracing::*;
