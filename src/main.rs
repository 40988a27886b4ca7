//! Walks through a lending cycle: register a reader, catalog a single-copy book, lend it,
//! watch a second loan bounce off the inventory check, return it and lend again.

use chrono::{Duration, Utc};
use library_actors::config::LibraryConfig;
use library_actors::framework::ActorClient;
use library_actors::lifecycle::{setup_tracing, LibraryError, LibrarySystem};
use library_actors::model::{AuthorId, BookCreate, OrderCreate, UserCreate, UserUpdate};
use library_actors::order_actor::OrderError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    dotenvy::dotenv().ok();
    let config = LibraryConfig::from_env()?;
    setup_tracing(config.log_format);

    info!("Starting library system");
    let system = LibrarySystem::with_config(&config);

    let span = tracing::info_span!("registration");
    let user_id = async {
        let params = UserCreate::new("alice@example.com", "s3cret", "Alice", "Marie", "Smith");
        let id = system.user_client.create_user(params).await?;
        system
            .user_client
            .update_user(id, UserUpdate::default().is_active(true))
            .await?;
        Ok::<_, LibraryError>(id)
    }
    .instrument(span)
    .await?;

    let book_id = system
        .book_client
        .create_book(
            BookCreate::new("The Left Hand of Darkness")
                .with_count(1)
                .with_authors([AuthorId(1)]),
        )
        .await?;

    let loan = |user| OrderCreate {
        user: Some(user),
        book: book_id,
        planned_return_at: Utc::now() + Duration::days(14),
    };

    let span = tracing::info_span!("lending");
    async {
        let first = system.order_client.create_order(loan(user_id)).await?;
        info!(order = %first, "Book lent");

        match system.order_client.create_order(loan(user_id)).await {
            Err(e @ OrderError::InventoryExhausted { .. }) => warn!(error = %e, "Second loan refused"),
            other => warn!(?other, "Second loan was expected to fail"),
        }

        system.order_client.return_book(first).await?;
        let second = system.order_client.create_order(loan(user_id)).await?;
        info!(order = %second, "Book lent again after return");
        Ok::<_, LibraryError>(())
    }
    .instrument(span)
    .await?;

    if let Some(user) = system.user_client.get(user_id).await? {
        print_json(&user.to_record());
    }
    if let Some(book) = system.book_client.get(book_id).await? {
        print_json(&book.to_record());
    }
    for order in system.order_client.list_orders().await? {
        print_json(&order.to_record());
    }

    system.delete_book(book_id).await?;
    let left = system.order_client.list_orders().await?.len();
    info!(orders_left = left, "Book removed with its orders");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}

fn print_json<T: serde::Serialize>(record: &T) {
    match serde_json::to_string(record) {
        Ok(line) => println!("{}", line),
        Err(e) => warn!(error = %e, "Could not serialize record"),
    }
}
