//! Port abstraction for the user collection of the record store.
//!
//! The store is an external collaborator: it looks records up by exact
//! field match, inserts them (one or many at a time), and updates or deletes
//! them by identifier. It enforces no email uniqueness of its own.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, UserPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
    }
}

/// Driven port over the stored users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the first user whose email matches exactly.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Persist one user and return it with its assigned identifier.
    async fn insert_one(&self, user: NewUser) -> Result<User, UserPersistenceError>;

    /// Persist several users in one operation, preserving input order.
    async fn insert_many(&self, users: Vec<NewUser>) -> Result<Vec<User>, UserPersistenceError>;

    /// Return every stored user.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Merge `patch` into the user with `id`.
    ///
    /// Unknown identifiers are not an error.
    async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<(), UserPersistenceError>;

    /// Remove the user with `id`.
    ///
    /// Unknown identifiers are not an error.
    async fn delete(&self, id: &UserId) -> Result<(), UserPersistenceError>;
}
