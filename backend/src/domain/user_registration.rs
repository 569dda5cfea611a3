//! User creation with validation and email deduplication.
//!
//! Batches are processed strictly in submission order:
//!
//! 1. each candidate is checked against the presence rule; the first
//!    incomplete candidate aborts the whole batch before anything is written;
//! 2. each complete candidate costs one `find_by_email` lookup, awaited
//!    before the next candidate is looked at;
//! 3. candidates without a stored match are written together with a single
//!    `insert_many`, even when other candidates were rejected.
//!
//! Only stored data is consulted, so two candidates in the same batch that
//! share a new email are both inserted. Nothing serialises concurrent
//! requests either: two batches racing on the same new email can both win.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    UserCreation, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{
    Error, MissingFieldsError, NewUser, Submission, User, UserCandidate, UserId, UserPatch,
};

/// Message reported when a candidate lacks a required field.
pub const MISSING_USER_FIELDS: &str = "Missing required user fields";
/// Message reported when a single candidate's email is already stored.
pub const DUPLICATE_EMAIL: &str = "User with this email already exists";

/// User service implementing the user driving ports.
#[derive(Clone)]
pub struct UserRegistrationService<R> {
    users: Arc<R>,
}

impl<R> UserRegistrationService<R> {
    /// Create a new service over the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

fn validate(candidate: UserCandidate, index: Option<usize>) -> Result<NewUser, Error> {
    NewUser::try_from(candidate).map_err(|MissingFieldsError { fields }| {
        Error::invalid_request(MISSING_USER_FIELDS).with_details(json!({
            "code": "missing_field",
            "fields": fields,
            "index": index,
        }))
    })
}

impl<R> UserRegistrationService<R>
where
    R: UserRepository,
{
    async fn email_taken(&self, email: &str) -> Result<bool, Error> {
        let existing = self
            .users
            .find_by_email(email)
            .await
            .map_err(map_persistence_error)?;
        Ok(existing.is_some())
    }

    async fn register_one(&self, candidate: UserCandidate) -> Result<UserCreation, Error> {
        let user = validate(candidate, None)?;
        if self.email_taken(user.email()).await? {
            debug!(email = user.email(), "email already registered");
            return Err(Error::conflict(DUPLICATE_EMAIL)
                .with_details(json!({ "code": "duplicate_email", "emails": [user.email()] })));
        }

        let created = self
            .users
            .insert_one(user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %created.id, "user created");
        Ok(UserCreation::Created {
            inserted: vec![created],
        })
    }

    async fn register_batch(&self, candidates: Vec<UserCandidate>) -> Result<UserCreation, Error> {
        let submitted = candidates.len();
        let mut insertable = Vec::with_capacity(submitted);
        let mut rejected = Vec::new();

        for (index, candidate) in candidates.into_iter().enumerate() {
            let user = validate(candidate, Some(index))?;
            if self.email_taken(user.email()).await? {
                debug!(index, email = user.email(), "email already registered");
                rejected.push(user.email().to_owned());
            } else {
                insertable.push(user);
            }
        }

        let inserted = if insertable.is_empty() {
            Vec::new()
        } else {
            self.users
                .insert_many(insertable)
                .await
                .map_err(map_persistence_error)?
        };

        info!(
            submitted,
            inserted = inserted.len(),
            rejected = rejected.len(),
            "user batch processed"
        );

        if rejected.is_empty() {
            Ok(UserCreation::Created { inserted })
        } else {
            Ok(UserCreation::PartialConflict { inserted, rejected })
        }
    }
}

#[async_trait]
impl<R> UsersCommand for UserRegistrationService<R>
where
    R: UserRepository,
{
    async fn create(&self, submission: Submission<UserCandidate>) -> Result<UserCreation, Error> {
        match submission {
            Submission::Single(candidate) => self.register_one(candidate).await,
            Submission::Batch(candidates) => self.register_batch(candidates).await,
        }
    }

    async fn update(&self, id: &UserId, patch: UserPatch) -> Result<(), Error> {
        if patch.is_empty() {
            debug!(user_id = %id, "empty user patch; nothing to update");
            return Ok(());
        }
        self.users
            .update(id, &patch)
            .await
            .map_err(map_persistence_error)
    }

    async fn delete(&self, id: &UserId) -> Result<(), Error> {
        self.users.delete(id).await.map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersQuery for UserRegistrationService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_persistence_error)
    }
}

#[cfg(test)]
mod tests;
