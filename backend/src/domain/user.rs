//! User records and the shapes they pass through on the way to the store.
//!
//! - [`UserCandidate`]: what a client submitted; nothing is guaranteed.
//! - [`NewUser`]: a candidate that passed the presence rule.
//! - [`User`]: a persisted record with its store-assigned identifier.
//! - [`UserPatch`]: a partial update merged into an existing record.

use serde::{Deserialize, Serialize};

use super::UserId;
use super::presence::{MissingFieldsError, Presence, missing_fields};

/// User submitted for creation, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCandidate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<f64>,
}

impl UserCandidate {
    /// Convenience constructor for fully populated candidates.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: impl Into<f64>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            age: Some(age.into()),
        }
    }
}

/// User that satisfies the presence rule and may be persisted.
///
/// ## Invariants
/// - `name` and `email` are non-empty.
/// - `age` is non-zero.
///
/// # Examples
/// ```
/// use user_product_backend::domain::{NewUser, UserCandidate};
///
/// let user = NewUser::try_from(UserCandidate::new("Ada", "ada@example.com", 36))
///     .expect("complete candidate");
/// assert_eq!(user.email(), "ada@example.com");
///
/// let incomplete = UserCandidate { age: Some(0.0), ..UserCandidate::new("Ada", "a@x", 1) };
/// assert!(NewUser::try_from(incomplete).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    name: String,
    email: String,
    age: f64,
}

impl NewUser {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address; the business uniqueness key.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Age as submitted; any JSON number is accepted.
    pub fn age(&self) -> f64 {
        self.age
    }

    /// Attach a store-assigned identifier.
    pub fn into_user(self, id: UserId) -> User {
        let Self { name, email, age } = self;
        User {
            id,
            name,
            email,
            age,
        }
    }
}

impl TryFrom<UserCandidate> for NewUser {
    type Error = MissingFieldsError;

    fn try_from(value: UserCandidate) -> Result<Self, Self::Error> {
        let missing = missing_fields([
            ("name", value.name.is_present()),
            ("email", value.email.is_present()),
            ("age", value.age.is_present()),
        ]);
        let UserCandidate {
            name: Some(name),
            email: Some(email),
            age: Some(age),
        } = value
        else {
            return Err(MissingFieldsError { fields: missing });
        };
        MissingFieldsError::check(missing)?;
        Ok(Self { name, email, age })
    }
}

/// Persisted user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: f64,
}

impl User {
    /// Apply a partial update in place; absent fields are left untouched.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

/// Partial update payload for `PATCH /users/{userId}`.
///
/// Supplied fields overwrite stored values without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<f64>,
}

impl UserPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}
