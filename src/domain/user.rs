//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Record;

/// User domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user
    pub fn new(id: String, data: CreateUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            age: data.age.and_then(|a| u32::try_from(a).ok()).unwrap_or_default(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the fields present in `updates`; absent fields are kept
    pub fn apply(&mut self, updates: UpdateUser) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(email) = updates.email {
            self.email = email;
        }
        if let Some(age) = updates.age.and_then(|a| u32::try_from(a).ok()) {
            self.age = age;
        }
        if let Some(is_active) = updates.is_active {
            self.is_active = is_active;
        }
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// User creation payload.
///
/// Missing fields deserialize to empty values so that validation can report
/// every problem at once.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Display name (at least 2 characters once trimmed)
    #[serde(default)]
    #[validate(custom(
        function = "crate::domain::rules::validate_name",
        message = "Name is required and must be at least 2 characters long"
    ))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address, unique among users
    #[serde(default)]
    #[validate(custom(
        function = "crate::domain::rules::validate_email",
        message = "Valid email is required"
    ))]
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Age in years
    #[validate(
        required(message = "Age must be a number between 0 and 150"),
        range(
            min = "crate::config::MIN_AGE",
            max = "crate::config::MAX_AGE",
            message = "Age must be a number between 0 and 150"
        )
    )]
    #[schema(example = 30, minimum = 0, maximum = 150)]
    pub age: Option<i64>,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: Some(i64::from(age)),
        }
    }
}

/// User update payload; only present fields are validated and applied
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(custom(
        function = "crate::domain::rules::validate_name",
        message = "Name must be at least 2 characters long"
    ))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[validate(custom(
        function = "crate::domain::rules::validate_email",
        message = "Email must be valid"
    ))]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[validate(range(
        min = "crate::config::MIN_AGE",
        max = "crate::config::MAX_AGE",
        message = "Age must be a number between 0 and 150"
    ))]
    #[schema(example = 31)]
    pub age: Option<i64>,
    pub is_active: Option<bool>,
}

impl UpdateUser {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = 30)]
    pub age: u32,
    pub is_active: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
            is_active: user.is_active,
        }
    }
}
