//! # ActorClient Trait
//!
//! Common interface for the library's resource-specific clients. Implementors supply the inner
//! `ResourceClient` and an error mapping; `get`, `get_all`, `create_and_get` and `delete`
//! come for free.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID. An unknown id is `Ok(None)`, never an error.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every entity, ordered by id.
    #[tracing::instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(None).await.map_err(Self::map_error)
    }

    /// Create an entity and return the stored record.
    ///
    /// The record is fetched with a second request, so a delete that lands in between
    /// surfaces as the entity's `NotFound`.
    #[tracing::instrument(skip(self))]
    async fn create_and_get(&self, params: T::Create) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        let id = self.inner().create(params).await.map_err(Self::map_error)?;
        match self.inner().get(id.clone()).await.map_err(Self::map_error)? {
            Some(entity) => Ok(entity),
            None => Err(Self::map_error(FrameworkError::NotFound(id.to_string()))),
        }
    }

    /// Delete an entity by ID.
    ///
    /// Returns `true` if the entity existed and was removed, `false` if the id is unknown,
    /// so repeated deletes of the same id report `true` once.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().delete(id).await {
            Ok(()) => Ok(true),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
