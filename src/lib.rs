//! # Library Actors
//!
//! The backend of a small lending library: users, books and the orders that lend books
//! to users, each managed by its own Tokio actor.
//!
//! ## Core Concepts
//!
//! ### One generic actor, three entities
//! `ResourceActor<T: ActorEntity>` owns a store and runs the request loop once for every entity.
//! [`User`](model::User), [`Book`](model::Book) and [`Order`](model::Order) only supply
//! validation, update rules and hooks.
//!
//! ### Inventory-limited loans
//! An order can only be created while the book has a copy that is not out. The check runs
//! inside the Order actor's `on_create` hook with the current orders in hand, so two loans
//! can never race for the last copy.
//!
//! ### Typed errors
//! Each actor has its own error enum (`UserError`, `BookError`, `OrderError`). Hook errors
//! travel through the framework boxed and are downcast back by the clients, so callers can
//! match on `OrderError::InventoryExhausted` directly.
//!
//! ### Late-bound context
//! Dependencies are injected via `run(context)`, not at construction. The Order actor runs
//! with `(UserClient, BookClient)`.
//!
//! ## Module Tour
//!
//! - [`framework`] - `ActorEntity`, `ResourceActor`, `ResourceClient`, `ActorClient`, mocks
//! - [`model`] - records, ids, payloads and their serializable views
//! - [`user_actor`], [`book_actor`], [`order_actor`] - entity implementations and errors
//! - [`clients`] - typed clients that hide message passing
//! - [`lifecycle`] - [`LibrarySystem`](lifecycle::LibrarySystem), cascades, tracing setup
//! - [`config`] - environment configuration
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod book_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod user_actor;
