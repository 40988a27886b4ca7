//! Entity trait implementation for the Order domain type.
//!
//! `on_create` validates the borrower and the book through the injected clients, then runs
//! the inventory check against the orders already in the store.

use super::error::OrderError;
use crate::clients::{BookClient, UserClient};
use crate::framework::{ActorClient, ActorEntity, Store};
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = (UserClient, BookClient);
    type Error = OrderError;

    /// Creates a new, outstanding Order stamped with the current time.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            book: params.book,
            user: params.user,
            created_at: Utc::now(),
            planned_return_at: params.planned_return_at,
            returned_at: None,
        })
    }

    /// Rejects the order if the user or book is unknown, or if every copy is already out.
    ///
    /// The copy count is read from the Book actor at this point; `store` holds every other
    /// order, and no other order can be inserted until this hook returns.
    async fn on_create(
        &mut self,
        store: &Store<Self>,
        ctx: &(UserClient, BookClient),
    ) -> Result<(), OrderError> {
        let (user_client, book_client) = ctx;

        if let Some(user) = self.user {
            if user_client.get(user).await?.is_none() {
                return Err(OrderError::InvalidUser(user.to_string()));
            }
        }

        let book = book_client
            .get(self.book)
            .await?
            .ok_or_else(|| OrderError::InvalidBook(self.book.to_string()))?;

        let outstanding = store
            .values()
            .filter(|o| o.book == self.book && o.is_outstanding())
            .count();
        debug!(book = %self.book, outstanding, copies = book.count, "Inventory check");

        if outstanding >= book.count as usize {
            return Err(OrderError::InventoryExhausted {
                book: self.book,
                outstanding,
                copies: book.count,
            });
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &(UserClient, BookClient),
    ) -> Result<(), OrderError> {
        if let Some(at) = update.planned_return_at {
            self.planned_return_at = at;
        }
        if let Some(at) = update.returned_at {
            self.returned_at = Some(at);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &(UserClient, BookClient),
    ) -> Result<(), OrderError> {
        Ok(())
    }
}
