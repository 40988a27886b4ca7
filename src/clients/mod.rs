//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](crate::framework::ActorClient) for `get`, `get_all`
//! and `delete`, and adds the operations specific to its resource.

pub mod book_client;
pub mod order_client;
pub mod user_client;

pub use book_client::*;
pub use order_client::*;
pub use user_client::*;
