//! Entity trait implementation for the User domain type.
//!
//! Field validation runs in `from_create_params`; the email uniqueness check runs in
//! `on_create` against the actor's store.

use super::error::UserError;
use crate::framework::{ActorEntity, Store};
use crate::model::{
    splice_middle_name, MiddleNameEdit, User, UserCreate, UserId, UserUpdate, EMAIL_MAX_LEN,
    NAME_MAX_LEN,
};
use async_trait::async_trait;
use chrono::Utc;

fn validate_email(email: &str) -> Result<(), UserError> {
    if email.is_empty() || !email.contains('@') || email.chars().count() > EMAIL_MAX_LEN {
        return Err(UserError::ValidationError(format!("invalid email: {:?}", email)));
    }
    Ok(())
}

fn required_name(field: &str, value: Option<String>) -> Result<String, UserError> {
    match value {
        None => Err(UserError::ValidationError(format!("{} is required", field))),
        Some(v) if v.chars().count() > NAME_MAX_LEN => Err(UserError::ValidationError(format!(
            "{} longer than {} characters",
            field, NAME_MAX_LEN
        ))),
        Some(v) => Ok(v),
    }
}

fn fits(name: &str) -> bool {
    name.chars().count() <= NAME_MAX_LEN
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    /// Builds a visitor account, inactive, with both timestamps set to now.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        validate_email(&params.email)?;
        let first_name = required_name("first_name", params.first_name)?;
        let middle_name = required_name("middle_name", params.middle_name)?;
        let last_name = required_name("last_name", params.last_name)?;

        let now = Utc::now();
        Ok(Self {
            id,
            email: params.email,
            first_name,
            middle_name,
            last_name,
            password: params.password,
            role: Default::default(),
            is_active: false,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_create(&mut self, store: &Store<Self>, _ctx: &()) -> Result<(), UserError> {
        if store.values().any(|u| u.email == self.email) {
            return Err(UserError::AlreadyExists(self.email.clone()));
        }
        Ok(())
    }

    /// Applies the supplied fields.
    ///
    /// Names longer than the limit are skipped rather than rejected, and the update still
    /// succeeds. `updated_at` is always stamped.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(first_name) = update.first_name.filter(|n| fits(n)) {
            self.first_name = first_name;
        }
        match update.middle_name {
            Some(MiddleNameEdit::Replace(middle)) if fits(&middle) => self.middle_name = middle,
            Some(MiddleNameEdit::Splice(insert)) => {
                if let Some(spliced) = splice_middle_name(&self.middle_name, &insert).filter(|n| fits(n)) {
                    self.middle_name = spliced;
                }
            }
            _ => {}
        }
        if let Some(last_name) = update.last_name.filter(|n| fits(n)) {
            self.last_name = last_name;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.touch();
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Password, Role};
    use std::collections::HashMap;

    fn params() -> UserCreate {
        UserCreate::new("ann@example.com", "pw", "Ann", "Maria", "Cole")
    }

    fn build() -> User {
        User::from_create_params(UserId(1), params()).unwrap()
    }

    #[test]
    fn new_user_defaults() {
        let user = build();
        assert_eq!(user.role, Role::Visitor);
        assert!(!user.is_active);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn rejects_bad_emails() {
        let long = format!("{}@x.io", "a".repeat(EMAIL_MAX_LEN));
        for email in ["", "no-at-sign", long.as_str()] {
            let mut p = params();
            p.email = email.to_string();
            assert!(matches!(
                User::from_create_params(UserId(1), p),
                Err(UserError::ValidationError(_))
            ));
        }
    }

    #[test]
    fn email_at_limit_is_accepted() {
        let mut p = params();
        p.email = format!("{}@x.io", "a".repeat(EMAIL_MAX_LEN - 5));
        assert_eq!(p.email.chars().count(), EMAIL_MAX_LEN);
        assert!(User::from_create_params(UserId(1), p).is_ok());
    }

    #[test]
    fn rejects_missing_or_long_names() {
        let mut missing = params();
        missing.middle_name = None;
        assert!(User::from_create_params(UserId(1), missing).is_err());

        let mut long = params();
        long.last_name = Some("x".repeat(NAME_MAX_LEN + 1));
        assert!(User::from_create_params(UserId(1), long).is_err());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let mut store = HashMap::new();
        store.insert(UserId(1), build());

        let mut again = User::from_create_params(UserId(2), params()).unwrap();
        let err = again.on_create(&store, &()).await.unwrap_err();
        assert_eq!(err, UserError::AlreadyExists("ann@example.com".into()));
    }

    #[tokio::test]
    async fn named_update_skips_long_names() {
        let mut user = build();
        let before = user.updated_at;
        let update = UserUpdate::default()
            .first_name("x".repeat(NAME_MAX_LEN + 1))
            .last_name("Dale")
            .is_active(true);
        user.on_update(update, &()).await.unwrap();

        assert_eq!(user.first_name, "Ann");
        assert_eq!(user.last_name, "Dale");
        assert!(user.is_active);
        assert!(user.updated_at > before);
    }

    #[tokio::test]
    async fn splice_update_inserts_into_middle_name() {
        let mut user = build();
        user.on_update(UserUpdate::from((None, Some("--".to_string()), None, None, None, None)), &())
            .await
            .unwrap();
        assert_eq!(user.middle_name, "Ma--ria");
    }

    #[tokio::test]
    async fn splice_into_empty_middle_name_is_ignored() {
        let mut user = build();
        user.middle_name.clear();
        user.on_update(UserUpdate::from((None, Some("Q".to_string()), None, None, None, None)), &())
            .await
            .unwrap();
        assert_eq!(user.middle_name, "");
    }

    #[tokio::test]
    async fn overlong_splice_is_ignored() {
        let mut user = build();
        let insert = "y".repeat(NAME_MAX_LEN);
        user.on_update(UserUpdate::from((None, Some(insert), None, None, None, None)), &())
            .await
            .unwrap();
        assert_eq!(user.middle_name, "Maria");
    }

    #[tokio::test]
    async fn password_and_role_overwrite() {
        let mut user = build();
        let update = UserUpdate::default().password(Password::from("new")).role(Role::Admin);
        user.on_update(update, &()).await.unwrap();
        assert_eq!(user.password.expose(), "new");
        assert_eq!(user.role_name(), "admin");
    }
}
