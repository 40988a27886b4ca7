//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, shared by every actor and client.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A hook rejected the request. The box holds the entity's own `ActorEntity::Error`,
    /// which clients downcast back to the concrete type.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete entity error, or hands back the framework error unchanged.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(concrete) => Ok(*concrete),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("shelf is full")]
    struct ShelfFull;

    #[test]
    fn entity_error_downcasts_to_concrete_type() {
        let err = FrameworkError::EntityError(Box::new(ShelfFull));
        assert_eq!(err.into_entity_error::<ShelfFull>().unwrap(), ShelfFull);
    }

    #[test]
    fn other_variants_pass_through() {
        let err = FrameworkError::NotFound("book_9".into());
        match err.into_entity_error::<ShelfFull>() {
            Err(FrameworkError::NotFound(id)) => assert_eq!(id, "book_9"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn foreign_entity_error_stays_boxed() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.into_entity_error::<ShelfFull>().unwrap_err();
        assert!(back.to_string().contains("disk"));
    }
}
