use chrono::{DateTime, Duration, Utc};
use library_actors::book_actor::BookError;
use library_actors::framework::ActorClient;
use library_actors::lifecycle::LibrarySystem;
use library_actors::model::{
    AuthorId, BookCreate, BookId, BookUpdate, OrderCreate, OrderUpdate, Role, UserCreate, UserId,
    UserUpdate,
};
use library_actors::order_actor::OrderError;
use library_actors::user_actor::UserError;

fn alice() -> UserCreate {
    UserCreate::new("alice@example.com", "s3cret", "Alice", "Marie", "Smith")
}

fn loan(user: Option<UserId>, book: BookId) -> OrderCreate {
    OrderCreate {
        user,
        book,
        planned_return_at: Utc::now() + Duration::days(14),
    }
}

/// Full end-to-end test with all real actors.
#[tokio::test]
async fn test_full_library_integration() {
    let system = LibrarySystem::new();

    let user_id = system
        .user_client
        .create_user(alice())
        .await
        .expect("Failed to create user");
    let user = system
        .user_client
        .get(user_id)
        .await
        .expect("Failed to get user")
        .expect("User not found");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.first_name, "Alice");
    assert_eq!(user.middle_name, "Marie");
    assert_eq!(user.last_name, "Smith");
    assert_eq!(user.role, Role::Visitor);
    assert!(!user.is_active);

    let by_email = system
        .user_client
        .get_by_email("alice@example.com")
        .await
        .unwrap()
        .expect("lookup by email");
    assert_eq!(by_email, user);

    let book_id = system
        .book_client
        .create_book(BookCreate::new("Kindred").with_count(1))
        .await
        .expect("Failed to create book");

    let first = system
        .order_client
        .create_order(loan(Some(user_id), book_id))
        .await
        .expect("first loan");

    let refused = system
        .order_client
        .create_order(loan(Some(user_id), book_id))
        .await;
    assert!(matches!(refused, Err(OrderError::InventoryExhausted { .. })));

    system
        .order_client
        .update_order(first, OrderUpdate::default().returned_at(Utc::now()))
        .await
        .unwrap();
    let third = system
        .order_client
        .create_order(loan(Some(user_id), book_id))
        .await;
    assert!(third.is_ok(), "loan after return failed: {:?}", third);

    let outstanding = system.order_client.list_outstanding_orders().await.unwrap();
    assert_eq!(outstanding.len(), 1);
    assert_eq!(Some(outstanding[0].id), third.ok());

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_user_validation_and_uniqueness() {
    let system = LibrarySystem::new();
    system.user_client.create_user(alice()).await.unwrap();

    let duplicate = system.user_client.create_user(alice()).await.unwrap_err();
    assert_eq!(duplicate, UserError::AlreadyExists("alice@example.com".into()));

    let long_email = format!("{}@example.com", "x".repeat(100));
    for email in ["bob.example.com", "", long_email.as_str()] {
        let mut params = alice();
        params.email = email.to_string();
        let err = system.user_client.create_user(params).await.unwrap_err();
        assert!(matches!(err, UserError::ValidationError(_)), "{:?}", err);
    }

    let mut nameless = alice();
    nameless.email = "carol@example.com".into();
    nameless.first_name = None;
    assert!(system.user_client.create_user(nameless).await.is_err());

    // Only the first user made it in, and rejected creates did not consume ids.
    let users = system.user_client.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    let dave = UserCreate::new("dave@example.com", "pw", "Dave", "J", "Doe");
    assert_eq!(system.user_client.create_user(dave).await.unwrap(), UserId(2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_updates() {
    let system = LibrarySystem::new();
    let id = system.user_client.create_user(alice()).await.unwrap();
    let before = system.user_client.get(id).await.unwrap().unwrap();

    let named = system
        .user_client
        .update_user(id, UserUpdate::default().middle_name("Rose").role(Role::Admin))
        .await
        .unwrap();
    assert_eq!(named.middle_name, "Rose");
    assert_eq!(named.first_name, before.first_name);
    assert_eq!(named.role_name(), "admin");
    assert!(named.updated_at > before.updated_at);
    assert_eq!(named.created_at, before.created_at);

    let positional = system
        .user_client
        .update_user_inserting_middle_name(id, (None, Some("--".to_string()), None, None, None, None))
        .await
        .unwrap();
    assert_eq!(positional.middle_name, "Ro--se");
    assert!(positional.updated_at > named.updated_at);

    let empty = system
        .user_client
        .update_user(id, UserUpdate::default())
        .await
        .unwrap();
    assert_eq!(empty.middle_name, "Ro--se");
    assert!(empty.updated_at > positional.updated_at);

    let missing = system
        .user_client
        .update_user(UserId(99), UserUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(missing, UserError::NotFound("user_99".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_book_catalog() {
    let system = LibrarySystem::new();

    let too_long = system
        .book_client
        .create_book(BookCreate::new("a".repeat(129)))
        .await
        .unwrap_err();
    assert!(matches!(too_long, BookError::ValidationError(_)));

    let id = system
        .book_client
        .create_book(BookCreate::new("Beloved").with_authors([AuthorId(3), AuthorId(1)]))
        .await
        .unwrap();
    let book = system.book_client.get(id).await.unwrap().unwrap();
    assert_eq!(book.count, 10);
    assert_eq!(book.description, "Default description");
    assert_eq!(book.to_record().authors, vec![1, 3]);

    let updated = system
        .book_client
        .update_book(id, BookUpdate::default().count(0))
        .await
        .unwrap();
    assert_eq!(updated.count, 0);
    assert_eq!(updated.name, "Beloved");

    assert_eq!(system.book_client.add_authors(id, vec![AuthorId(1), AuthorId(2)]).await.unwrap(), 1);
    assert_eq!(system.book_client.remove_authors(id, vec![AuthorId(9)]).await.unwrap(), 0);

    assert_eq!(system.book_client.list_books().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_reports_once() {
    let system = LibrarySystem::new();
    let user = system.user_client.create_user(alice()).await.unwrap();
    let book = system.book_client.create_book(BookCreate::new("Piranesi")).await.unwrap();
    let order = system.order_client.create_order(loan(None, book)).await.unwrap();

    assert!(system.order_client.delete(order).await.unwrap());
    assert!(!system.order_client.delete(order).await.unwrap());
    assert!(system.user_client.delete(user).await.unwrap());
    assert!(!system.user_client.delete(user).await.unwrap());
    assert!(system.book_client.delete(book).await.unwrap());
    assert!(!system.book_client.delete(book).await.unwrap());

    assert!(system.user_client.get(user).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_records_use_epoch_seconds() {
    let system = LibrarySystem::new();
    let user_id = system.user_client.create_user(alice()).await.unwrap();
    let book_id = system.book_client.create_book(BookCreate::new("Middlemarch")).await.unwrap();

    let planned = DateTime::from_timestamp(1_900_000_000, 0).unwrap();
    let order_id = system
        .order_client
        .create_order(OrderCreate {
            user: Some(user_id),
            book: book_id,
            planned_return_at: planned,
        })
        .await
        .unwrap();

    let user = system.user_client.get(user_id).await.unwrap().unwrap();
    let record = user.to_record();
    assert_eq!(record.created_at, user.created_at.timestamp());
    assert_eq!(record.updated_at, user.updated_at.timestamp());

    let order = system.order_client.get(order_id).await.unwrap().unwrap();
    let json = serde_json::to_value(order.to_record()).unwrap();
    assert_eq!(json["planned_return_at"], 1_900_000_000i64);
    assert_eq!(json["created_at"], order.created_at.timestamp());
    assert_eq!(json["returned_at"], serde_json::Value::Null);
    assert_eq!(json["user"], 1);

    system.shutdown().await.unwrap();
}

/// N concurrent loans against a book with k copies yield exactly min(N, k) successes.
#[tokio::test]
async fn test_concurrent_orders() {
    let system = LibrarySystem::new();
    let user_id = system.user_client.create_user(alice()).await.unwrap();
    let book_id = system
        .book_client
        .create_book(BookCreate::new("Limited Edition").with_count(3))
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let order_client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            order_client.create_order(loan(Some(user_id), book_id)).await
        }));
    }

    let mut successful = 0;
    let mut exhausted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(OrderError::InventoryExhausted { .. }) => exhausted += 1,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    assert_eq!(successful, 3, "Expected exactly 3 successful orders");
    assert_eq!(exhausted, 7);
    assert_eq!(system.order_client.outstanding_for_book(book_id).await.unwrap(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleting_book_or_user_cascades_to_orders() {
    let system = LibrarySystem::new();
    let alice_id = system.user_client.create_user(alice()).await.unwrap();
    let bob_id = system
        .user_client
        .create_user(UserCreate::new("bob@example.com", "pw", "Bob", "K", "Lane"))
        .await
        .unwrap();
    let kept = system.book_client.create_book(BookCreate::new("Kept")).await.unwrap();
    let doomed = system.book_client.create_book(BookCreate::new("Doomed")).await.unwrap();

    system.order_client.create_order(loan(Some(alice_id), doomed)).await.unwrap();
    system.order_client.create_order(loan(Some(bob_id), doomed)).await.unwrap();
    let bobs_kept = system.order_client.create_order(loan(Some(bob_id), kept)).await.unwrap();
    system.order_client.create_order(loan(Some(alice_id), kept)).await.unwrap();

    assert!(system.delete_book(doomed).await.unwrap());
    let left = system.order_client.list_orders().await.unwrap();
    assert_eq!(left.len(), 2);
    assert!(left.iter().all(|o| o.book == kept));

    let late = system.order_client.create_order(loan(Some(alice_id), doomed)).await;
    assert_eq!(late.unwrap_err(), OrderError::InvalidBook(doomed.to_string()));

    assert!(system.delete_user(alice_id).await.unwrap());
    let left = system.order_client.list_orders().await.unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, bobs_kept);

    assert!(!system.delete_book(doomed).await.unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_update_only_touches_supplied_fields() {
    let system = LibrarySystem::new();
    let book_id = system.book_client.create_book(BookCreate::new("Dune")).await.unwrap();
    let order_id = system.order_client.create_order(loan(None, book_id)).await.unwrap();
    let created = system.order_client.get(order_id).await.unwrap().unwrap();

    let extended = DateTime::from_timestamp(1_900_259_200, 0).unwrap();
    let moved = system
        .order_client
        .update_order(order_id, OrderUpdate::default().planned_return_at(extended))
        .await
        .unwrap();
    assert_eq!(moved.planned_return_at, extended);
    assert_eq!(moved.returned_at, None);
    assert_eq!(moved.created_at, created.created_at);

    let back = Utc::now();
    let returned = system
        .order_client
        .update_order(order_id, OrderUpdate::default().returned_at(back))
        .await
        .unwrap();
    assert_eq!(returned.planned_return_at, extended);
    assert_eq!(returned.returned_at, Some(back));

    let stored = system.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(stored, returned);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_and_get_returns_the_stored_record() {
    let system = LibrarySystem::new();

    let user = system.user_client.create_and_get(alice()).await.unwrap();
    assert_eq!(user.id, UserId(1));
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(system.user_client.get(user.id).await.unwrap(), Some(user.clone()));

    let duplicate = system.user_client.create_and_get(alice()).await.unwrap_err();
    assert_eq!(duplicate, UserError::AlreadyExists("alice@example.com".into()));

    let book = system
        .book_client
        .create_and_get(BookCreate::new("Kindred").with_count(1))
        .await
        .unwrap();
    assert_eq!(book.count, 1);
    assert_eq!(book.description, "Default description");

    let order = system
        .order_client
        .create_and_get(loan(Some(user.id), book.id))
        .await
        .unwrap();
    assert_eq!(order.user, Some(user.id));
    assert!(order.is_outstanding());

    let refused = system
        .order_client
        .create_and_get(loan(Some(user.id), book.id))
        .await;
    assert!(matches!(refused, Err(OrderError::InventoryExhausted { .. })));

    system.shutdown().await.unwrap();
}
