//! Entity trait implementation for the Book domain type.
//!
//! Includes the author association actions.

use super::actions::{BookAction, BookActionResult};
use super::error::BookError;
use crate::framework::ActorEntity;
use crate::model::{Book, BookCreate, BookId, BookUpdate, BOOK_NAME_MAX_LEN, DEFAULT_COPIES, DEFAULT_DESCRIPTION};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Update = BookUpdate;
    type Action = BookAction;
    type ActionResult = BookActionResult;
    type Context = ();
    type Error = BookError;

    /// Creates a new Book, filling in the default description and copy count.
    fn from_create_params(id: BookId, params: BookCreate) -> Result<Self, BookError> {
        if params.name.chars().count() > BOOK_NAME_MAX_LEN {
            return Err(BookError::ValidationError(format!(
                "name longer than {} characters",
                BOOK_NAME_MAX_LEN
            )));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            count: params.count.unwrap_or(DEFAULT_COPIES),
            authors: params.authors.into_iter().collect(),
        })
    }

    /// Handles updates to the Book entity.
    ///
    /// The name limit is not enforced here.
    async fn on_update(&mut self, update: BookUpdate, _ctx: &()) -> Result<(), BookError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(count) = update.count {
            self.count = count;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: BookAction, _ctx: &()) -> Result<BookActionResult, BookError> {
        match action {
            BookAction::AddAuthors(authors) => {
                let added = authors.into_iter().filter(|a| self.authors.insert(*a)).count();
                Ok(BookActionResult::AuthorsAdded(added))
            }
            BookAction::RemoveAuthors(authors) => {
                let removed = authors.iter().filter(|a| self.authors.remove(*a)).count();
                Ok(BookActionResult::AuthorsRemoved(removed))
            }
        }
    }
}
