/// Represents a loan of one book copy.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderUpdate`])
use crate::model::{BookId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub book: BookId,
    /// Borrower, if the loan is attributed to one.
    pub user: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub planned_return_at: DateTime<Utc>,
    /// Unset while the book is still out.
    pub returned_at: Option<DateTime<Utc>>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    pub user: Option<UserId>,
    pub book: BookId,
    pub planned_return_at: DateTime<Utc>,
}

/// Payload for updating an order. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderUpdate {
    pub planned_return_at: Option<DateTime<Utc>>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl OrderUpdate {
    pub fn planned_return_at(mut self, at: DateTime<Utc>) -> Self {
        self.planned_return_at = Some(at);
        self
    }

    pub fn returned_at(mut self, at: DateTime<Utc>) -> Self {
        self.returned_at = Some(at);
        self
    }
}

/// Flat view of an [`Order`]. Timestamps are Unix epoch seconds.
///
/// Also reads the older `plated_end_at` / `end_at` field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: u32,
    pub book: u32,
    pub user: Option<u32>,
    pub created_at: i64,
    #[serde(alias = "plated_end_at")]
    pub planned_return_at: i64,
    #[serde(alias = "end_at")]
    pub returned_at: Option<i64>,
}

impl Order {
    /// An order is outstanding until its book comes back.
    pub fn is_outstanding(&self) -> bool {
        self.returned_at.is_none()
    }

    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            id: self.id.0,
            book: self.book.0,
            user: self.user.map(|u| u.0),
            created_at: self.created_at.timestamp(),
            planned_return_at: self.planned_return_at.timestamp(),
            returned_at: self.returned_at.map(|at| at.timestamp()),
        }
    }
}
