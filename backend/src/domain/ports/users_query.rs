//! Driving port for user-facing reads.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
