use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted email address, in characters.
pub const EMAIL_MAX_LEN: usize = 100;

/// Longest accepted first, middle or last name, in characters.
pub const NAME_MAX_LEN: usize = 20;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Access level of a user. Stored as the integer code `0` (visitor) or `1` (admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Role {
    #[default]
    Visitor,
    Admin,
}

impl Role {
    pub fn code(self) -> u8 {
        match self {
            Role::Visitor => 0,
            Role::Admin => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Role::Visitor),
            1 => Some(Role::Admin),
            _ => None,
        }
    }

    /// Display label, `"visitor"` or `"admin"`.
    pub fn label(self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::Admin => "admin",
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self {
        role.code()
    }
}

impl TryFrom<u8> for Role {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Role::from_code(code).ok_or_else(|| format!("unknown role code {}", code))
    }
}

/// An opaque password. Never printed and never serialized.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Password {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for Password {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Represents a registered library user.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub password: Password,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new user.
///
/// The name fields are optional so a missing name can be reported as a validation error
/// rather than silently defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: Password,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserCreate {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<Password>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: Some(first_name.into()),
            middle_name: Some(middle_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

/// How an update touches the stored middle name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum MiddleNameEdit {
    /// Overwrite the middle name.
    Replace(String),
    /// Insert the text at the character midpoint of the current middle name.
    Splice(String),
}

/// Payload for updating an existing user. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub middle_name: Option<MiddleNameEdit>,
    pub last_name: Option<String>,
    pub password: Option<Password>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl UserUpdate {
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn middle_name(mut self, value: impl Into<String>) -> Self {
        self.middle_name = Some(MiddleNameEdit::Replace(value.into()));
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn password(mut self, value: impl Into<Password>) -> Self {
        self.password = Some(value.into());
        self
    }

    pub fn role(mut self, value: Role) -> Self {
        self.role = Some(value);
        self
    }

    pub fn is_active(mut self, value: bool) -> Self {
        self.is_active = Some(value);
        self
    }
}

/// Positional update: `(first_name, middle_insert, last_name, password, role, is_active)`.
///
/// Unlike [`UserUpdate::middle_name`], the second slot is spliced into the existing middle name.
pub type PositionalUserUpdate = (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<Password>,
    Option<Role>,
    Option<bool>,
);

impl From<PositionalUserUpdate> for UserUpdate {
    fn from(
        (first_name, middle_insert, last_name, password, role, is_active): PositionalUserUpdate,
    ) -> Self {
        Self {
            first_name,
            middle_name: middle_insert.map(MiddleNameEdit::Splice),
            last_name,
            password,
            role,
            is_active,
        }
    }
}

/// Flat, password-free view of a [`User`]. Timestamps are Unix epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub role: u8,
    pub is_active: bool,
}

impl User {
    pub fn role_name(&self) -> &'static str {
        self.role.label()
    }

    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            id: self.id.0,
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            created_at: self.created_at.timestamp(),
            updated_at: self.updated_at.timestamp(),
            role: self.role.code(),
            is_active: self.is_active,
        }
    }

    /// Stamps `updated_at`, always moving it forward even if the clock has not.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/// Inserts `insert` at the character midpoint of `middle`.
///
/// Returns `None` when `middle` is empty, since there is nothing to split.
pub fn splice_middle_name(middle: &str, insert: &str) -> Option<String> {
    if middle.is_empty() {
        return None;
    }
    let half = middle.chars().count() / 2;
    let at = middle
        .char_indices()
        .nth(half)
        .map(|(idx, _)| idx)
        .unwrap_or(middle.len());
    let mut spliced = String::with_capacity(middle.len() + insert.len());
    spliced.push_str(&middle[..at]);
    spliced.push_str(insert);
    spliced.push_str(&middle[at..]);
    Some(spliced)
}
