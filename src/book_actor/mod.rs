//! # Book Actor
//!
//! Manages the catalog: book titles, their copy counts and author associations.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`] type for type-safe error handling
//! - [`actions`] - [`BookAction`] and [`BookActionResult`] for author associations
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! let added = book_client.add_authors(book_id, vec![AuthorId(1), AuthorId(2)]).await?;
//! let removed = book_client.remove_authors(book_id, vec![AuthorId(2)]).await?;
//! ```
//!
//! The copy count is read by the Order actor when it checks inventory.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::BookClient;
use crate::framework::ResourceActor;
use crate::model::Book;

/// Creates a new Book actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Book>, BookClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, BookClient::new(generic_client))
}
