//! Driving port for user mutations.
//!
//! Inbound adapters hand submissions and patches to this port and translate
//! the outcome into their own protocol.

use async_trait::async_trait;

use crate::domain::{Error, Submission, User, UserCandidate, UserId, UserPatch};

/// Outcome of a user creation request that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCreation {
    /// Every candidate was persisted.
    Created {
        /// Persisted users in submission order.
        inserted: Vec<User>,
    },
    /// Some candidates clashed with stored emails; the rest were persisted.
    PartialConflict {
        /// Persisted users in submission order.
        inserted: Vec<User>,
        /// Emails that already existed, in submission order.
        rejected: Vec<String>,
    },
}

impl UserCreation {
    /// Users written by this request.
    pub fn inserted(&self) -> &[User] {
        match self {
            Self::Created { inserted } | Self::PartialConflict { inserted, .. } => inserted,
        }
    }

    /// Emails rejected as duplicates; empty unless the outcome is a partial conflict.
    pub fn rejected(&self) -> &[String] {
        match self {
            Self::Created { .. } => &[],
            Self::PartialConflict { rejected, .. } => rejected,
        }
    }
}

/// Domain use-case port for creating, updating, and deleting users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate, deduplicate, and persist one or many candidates.
    async fn create(&self, submission: Submission<UserCandidate>) -> Result<UserCreation, Error>;

    /// Merge a partial update into the user with `id`.
    async fn update(&self, id: &UserId, patch: UserPatch) -> Result<(), Error>;

    /// Delete the user with `id`.
    async fn delete(&self, id: &UserId) -> Result<(), Error>;
}
