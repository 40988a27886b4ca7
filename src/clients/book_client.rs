//! # Book Client
//!
//! Provides a high‑level API for interacting with the `Book` actor.
//! It wraps a `ResourceClient<Book>` and exposes domain‑specific methods.
use crate::book_actor::{BookAction, BookActionResult, BookError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{AuthorId, Book, BookCreate, BookId, BookUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Book actor.
#[derive(Clone)]
pub struct BookClient {
    inner: ResourceClient<Book>,
}

impl BookClient {
    pub fn new(inner: ResourceClient<Book>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &ResourceClient<Book> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BookError::from(e)
    }
}

impl BookClient {
    /// Adds a book to the catalog and returns its id. [`ActorClient::create_and_get`]
    /// returns the stored record instead.
    #[instrument(skip(self))]
    pub async fn create_book(&self, params: BookCreate) -> Result<BookId, BookError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(BookError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_book(&self, id: BookId, update: BookUpdate) -> Result<Book, BookError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(BookError::from)
    }

    /// Links authors to a book and returns how many were not linked before.
    #[instrument(skip(self))]
    pub async fn add_authors(&self, id: BookId, authors: Vec<AuthorId>) -> Result<usize, BookError> {
        debug!("Adding {} authors to {}", authors.len(), id);
        match self
            .inner
            .perform_action(id, BookAction::AddAuthors(authors))
            .await
        {
            Ok(BookActionResult::AuthorsAdded(n)) => Ok(n),
            Ok(other) => Err(BookError::ActorCommunicationError(format!(
                "unexpected result for AddAuthors: {:?}",
                other
            ))),
            Err(e) => Err(BookError::from(e)),
        }
    }

    /// Unlinks authors from a book and returns how many were actually linked.
    #[instrument(skip(self))]
    pub async fn remove_authors(&self, id: BookId, authors: Vec<AuthorId>) -> Result<usize, BookError> {
        debug!("Removing {} authors from {}", authors.len(), id);
        match self
            .inner
            .perform_action(id, BookAction::RemoveAuthors(authors))
            .await
        {
            Ok(BookActionResult::AuthorsRemoved(n)) => Ok(n),
            Ok(other) => Err(BookError::ActorCommunicationError(format!(
                "unexpected result for RemoveAuthors: {:?}",
                other
            ))),
            Err(e) => Err(BookError::from(e)),
        }
    }

    /// Every book, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.get_all().await
    }
}
