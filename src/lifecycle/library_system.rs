use crate::book_actor::{self, BookError};
use crate::clients::{BookClient, OrderClient, UserClient};
use crate::config::{ConfigError, LibraryConfig};
use crate::framework::ActorClient;
use crate::model::{BookId, UserId};
use crate::order_actor::{self, OrderError};
use crate::user_actor::{self, UserError};
use thiserror::Error;
use tracing::{error, info};

/// Errors surfaced by the orchestrator.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Book(#[from] BookError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}

/// The runtime orchestrator for the library actors.
///
/// `LibrarySystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the User, Book and Order actors
/// - **Dependency Wiring**: handing the Order actor its `(UserClient, BookClient)` context
/// - **Cascading Deletes**: removing a book's or user's orders along with it
///
/// # Example
///
/// ```ignore
/// let system = LibrarySystem::new();
///
/// let user_id = system.user_client.create_user(user_data).await?;
/// let book_id = system.book_client.create_book(book_data).await?;
/// let order_id = system.order_client.create_order(order_data).await?;
///
/// system.shutdown().await?;
/// ```
pub struct LibrarySystem {
    pub user_client: UserClient,
    pub book_client: BookClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl LibrarySystem {
    /// Starts all actors with the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&LibraryConfig::default())
    }

    pub fn with_config(config: &LibraryConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = user_actor::new(config.channel_capacity);
        let (book_actor, book_client) = book_actor::new(config.channel_capacity);
        let (order_actor, order_client) = order_actor::new(config.channel_capacity);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let book_handle = tokio::spawn(book_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run((user_client.clone(), book_client.clone())));

        info!(capacity = config.channel_capacity, "Library system started");

        Self {
            user_client,
            book_client,
            order_client,
            handles: vec![user_handle, book_handle, order_handle],
        }
    }

    /// Deletes a book together with all of its orders.
    ///
    /// The book goes first, so any order creation that reaches the Order actor after the
    /// purge fails with `InvalidBook` instead of leaving a dangling loan.
    pub async fn delete_book(&self, id: BookId) -> Result<bool, LibraryError> {
        let existed = self.book_client.delete(id).await?;
        let purged = self.order_client.purge_for_book(id).await?;
        info!(book = %id, existed, orders = purged.len(), "Book deleted");
        Ok(existed)
    }

    /// Deletes a user together with all of their orders.
    pub async fn delete_user(&self, id: UserId) -> Result<bool, LibraryError> {
        let existed = self.user_client.delete(id).await?;
        let purged = self.order_client.purge_for_user(id).await?;
        info!(user = %id, existed, orders = purged.len(), "User deleted");
        Ok(existed)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor drains its queue and exits.
    /// The Order actor holds clones of the User and Book clients, so those two stop only
    /// after it does. Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), LibraryError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.user_client);
        drop(self.book_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(LibraryError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for LibrarySystem {
    fn default() -> Self {
        Self::new()
    }
}
