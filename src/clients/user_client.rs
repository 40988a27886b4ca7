//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes domain‑specific methods.
use crate::framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use crate::model::{PositionalUserUpdate, User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

impl UserClient {
    /// Registers a user.
    ///
    /// Fails with `ValidationError` for a malformed email or a missing/over-long name, and
    /// with `AlreadyExists` when the email is taken. Returns the new id; use
    /// [`ActorClient::create_and_get`] for the stored record.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(UserError::from)
    }

    /// Looks a user up by exact email. Unknown emails are `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let wanted = email.to_string();
        let mut found = self
            .inner
            .list(Some(Filter::new(move |u: &User| u.email == wanted)))
            .await
            .map_err(UserError::from)?;
        Ok(found.pop())
    }

    /// Applies the supplied fields, replacing the middle name if one is given.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(UserError::from)
    }

    /// Positional update. The middle slot is inserted into the existing middle name at its
    /// midpoint instead of replacing it.
    #[instrument(skip(self))]
    pub async fn update_user_inserting_middle_name(
        &self,
        id: UserId,
        update: PositionalUserUpdate,
    ) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .update(id, UserUpdate::from(update))
            .await
            .map_err(UserError::from)
    }

    /// Every user, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_get, expect_update, MockClient};
    use crate::framework::ActorEntity;
    use crate::model::MiddleNameEdit;

    fn alice() -> User {
        User::from_create_params(
            UserId(1),
            UserCreate::new("alice@example.com", "pw", "Alice", "Marie", "Smith"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_positional_update_sends_splice() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let user_client = UserClient::new(client);

        let task = tokio::spawn(async move {
            user_client
                .update_user_inserting_middle_name(
                    UserId(1),
                    (None, Some("Jo".to_string()), None, None, None, None),
                )
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, UserId(1));
        assert_eq!(update.middle_name, Some(MiddleNameEdit::Splice("Jo".into())));
        responder.send(Ok(alice())).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            UserError::AlreadyExists("alice@example.com".into()),
        )));

        let client = UserClient::new(mock.client());
        let err = client
            .create_user(UserCreate::new("alice@example.com", "pw", "A", "B", "C"))
            .await
            .unwrap_err();
        assert_eq!(err, UserError::AlreadyExists("alice@example.com".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_by_email_uses_list() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![alice()]);
        mock.expect_list().return_ok(vec![]);

        let client = UserClient::new(mock.client());
        let found = client.get_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.unwrap().id, UserId(1));
        assert!(client.get_by_email("nobody@example.com").await.unwrap().is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_delete_is_false() {
        let mut mock = MockClient::<User>::new();
        mock.expect_delete(UserId(5))
            .return_err(FrameworkError::NotFound("user_5".into()));

        let client = UserClient::new(mock.client());
        assert!(!client.delete(UserId(5)).await.unwrap());
    }

    #[tokio::test]
    async fn test_named_update_replaces_middle_name() {
        let mut mock = MockClient::<User>::new();
        let mut renamed = alice();
        renamed.middle_name = "Rose".into();
        mock.expect_update(UserId(1)).return_ok(renamed);
        mock.expect_update(UserId(2))
            .return_err(FrameworkError::NotFound("user_2".into()));

        let client = UserClient::new(mock.client());
        let user = client
            .update_user(UserId(1), UserUpdate::default().middle_name("Rose"))
            .await
            .unwrap();
        assert_eq!(user.middle_name, "Rose");

        let err = client
            .update_user(UserId(2), UserUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err, UserError::NotFound("user_2".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_sends_requested_id() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let user_client = UserClient::new(client);

        let task = tokio::spawn(async move { user_client.get(UserId(4)).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, UserId(4));
        responder.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_failure_is_a_communication_error() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        mock.expect_delete(UserId(1)).return_ok();

        let client = UserClient::new(mock.client());
        assert!(matches!(
            client.list_users().await,
            Err(UserError::ActorCommunicationError(_))
        ));
        assert!(client.delete(UserId(1)).await.unwrap());
        mock.verify();
    }
}
