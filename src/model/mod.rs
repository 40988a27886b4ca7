//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod book;
pub mod order;
pub mod user;

pub use book::*;
pub use order::*;
pub use user::*;
