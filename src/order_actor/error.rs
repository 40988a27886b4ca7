//! Error types for the Order actor.

use crate::book_actor::BookError;
use crate::framework::FrameworkError;
use crate::model::BookId;
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The user specified in the order does not exist.
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    /// The book specified in the order does not exist.
    #[error("Invalid book: {0}")]
    InvalidBook(String),

    /// Every copy of the book is already out.
    #[error("No copies left of {book}: {outstanding} outstanding, {copies} owned")]
    InventoryExhausted {
        book: BookId,
        outstanding: usize,
        copies: u32,
    },

    /// Looking up the borrower failed.
    #[error("User lookup failed: {0}")]
    UserLookup(#[from] UserError),

    /// Looking up the book failed.
    #[error("Book lookup failed: {0}")]
    BookLookup(#[from] BookError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
