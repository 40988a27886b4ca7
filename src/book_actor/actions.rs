//! Custom actions for the Book actor.
//!
//! Author associations are edited in bulk through actions rather than through
//! [`BookUpdate`](crate::model::BookUpdate), which only touches the scalar fields.

use crate::model::AuthorId;

/// Custom actions for Book entities.
#[derive(Debug, Clone)]
pub enum BookAction {
    /// Associates the given authors. Authors already linked are skipped.
    AddAuthors(Vec<AuthorId>),
    /// Drops the given authors. Authors not linked are skipped.
    RemoveAuthors(Vec<AuthorId>),
}

/// Results from BookActions - variants match 1:1 with BookAction
#[derive(Debug, Clone, PartialEq)]
pub enum BookActionResult {
    /// Number of associations actually added.
    AuthorsAdded(usize),
    /// Number of associations actually removed.
    AuthorsRemoved(usize),
}
