//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; user/book validation and the inventory check happen
//! inside the actor's `on_create` hook, not here.
use crate::framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use crate::model::{BookId, Order, OrderCreate, OrderId, OrderUpdate, UserId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Opens a loan.
    ///
    /// Fails with `InvalidUser`/`InvalidBook` for unknown references and with
    /// `InventoryExhausted` when every copy is already out. Returns the new id; use
    /// [`ActorClient::create_and_get`] for the stored record.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(OrderError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(OrderError::from)
    }

    /// Marks the loan returned now, freeing the copy.
    #[instrument(skip(self))]
    pub async fn return_book(&self, id: OrderId) -> Result<Order, OrderError> {
        self.update_order(id, OrderUpdate::default().returned_at(Utc::now()))
            .await
    }

    /// Every order, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.get_all().await
    }

    /// Orders whose book has not come back yet, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_outstanding_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .list(Some(Filter::new(Order::is_outstanding)))
            .await
            .map_err(OrderError::from)
    }

    /// Number of outstanding orders for one book.
    #[instrument(skip(self))]
    pub async fn outstanding_for_book(&self, book: BookId) -> Result<usize, OrderError> {
        debug!("Sending request");
        let open = self
            .inner
            .list(Some(Filter::new(move |o: &Order| o.book == book && o.is_outstanding())))
            .await
            .map_err(OrderError::from)?;
        Ok(open.len())
    }

    /// Deletes every order of a book and returns their ids.
    #[instrument(skip(self))]
    pub async fn purge_for_book(&self, book: BookId) -> Result<Vec<OrderId>, OrderError> {
        debug!("Sending request");
        self.inner
            .purge(Filter::new(move |o: &Order| o.book == book))
            .await
            .map_err(OrderError::from)
    }

    /// Deletes every order placed by a user and returns their ids.
    #[instrument(skip(self))]
    pub async fn purge_for_user(&self, user: UserId) -> Result<Vec<OrderId>, OrderError> {
        debug!("Sending request");
        self.inner
            .purge(Filter::new(move |o: &Order| o.user == Some(user)))
            .await
            .map_err(OrderError::from)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
