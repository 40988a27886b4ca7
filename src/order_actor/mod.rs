//! # Order Actor
//!
//! Manages loans. This actor depends on the User and Book actors, which are injected as its
//! context when it starts:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run((user_client.clone(), book_client.clone())));
//! ```
//!
//! ## Inventory Check
//!
//! An order may only be created while fewer orders for the same book are outstanding than
//! the book has copies. The check and the insert happen in one step of this actor's loop,
//! so concurrent creations for the last copy cannot both succeed. Setting `returned_at`
//! through an update frees the copy again.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
///
/// Dependencies are not passed here; they are injected at runtime via `actor.run(context)`.
pub fn new(capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, OrderClient::new(generic_client))
}
