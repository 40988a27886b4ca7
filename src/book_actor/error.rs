//! Error types for the Book actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The requested book was not found.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The book data provided is invalid.
    #[error("Book validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for BookError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<BookError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => BookError::NotFound(id),
            Err(other) => BookError::ActorCommunicationError(other.to_string()),
        }
    }
}
