/// Represents a book title in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Book`](#impl-ActorEntity-for-Book) for details on:
/// - Creation parameters ([`BookCreate`])
/// - Update parameters ([`BookUpdate`])
/// - Custom actions ([`BookAction`](crate::book_actor::BookAction))
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Longest accepted book name, in characters. Checked at creation only.
pub const BOOK_NAME_MAX_LEN: usize = 128;

/// Copies on hand when a book is created without a count.
pub const DEFAULT_COPIES: u32 = 10;

pub const DEFAULT_DESCRIPTION: &str = "Default description";

/// Type-safe identifier for Books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(pub u32);

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "book_{}", self.0)
    }
}

/// Identifier of an author. Authors live outside this crate; books only keep the ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub u32);

impl From<u32> for AuthorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "author_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub description: String,
    /// Copies owned by the library; caps the number of outstanding orders.
    pub count: u32,
    pub authors: BTreeSet<AuthorId>,
}

/// Payload for creating a new book.
#[derive(Debug, Clone, Deserialize)]
pub struct BookCreate {
    pub name: String,
    pub description: Option<String>,
    pub count: Option<u32>,
    #[serde(default)]
    pub authors: Vec<AuthorId>,
}

impl BookCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            count: None,
            authors: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_authors(mut self, authors: impl IntoIterator<Item = AuthorId>) -> Self {
        self.authors = authors.into_iter().collect();
        self
    }
}

/// Payload for updating a book. `Some` always overwrites, including `""` and `0`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub count: Option<u32>,
}

impl BookUpdate {
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn count(mut self, value: u32) -> Self {
        self.count = Some(value);
        self
    }
}

/// Flat view of a [`Book`] with author ids in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub count: u32,
    pub authors: Vec<u32>,
}

impl Book {
    pub fn to_record(&self) -> BookRecord {
        BookRecord {
            id: self.id.0,
            name: self.name.clone(),
            description: self.description.clone(),
            count: self.count,
            authors: self.authors.iter().map(|a| a.0).collect(),
        }
    }
}
