//! Shared Diesel error mapping for the record-store repositories.
//!
//! Both repositories expose a `Connection`/`Query` error pair, so the
//! mapping is written once against constructor closures.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Ping { message } => message,
    };
    connection(message)
}

/// Map Diesel error variants into query or connection errors.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::BrokenTransactionManager => connection("database connection error"),
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::UserPersistenceError;
    use rstest::rstest;

    #[rstest]
    fn pool_failures_become_connection_errors() {
        let err: UserPersistenceError =
            map_basic_pool_error(PoolError::checkout("timed out"), UserPersistenceError::connection);
        assert_eq!(err, UserPersistenceError::connection("timed out"));
    }

    #[rstest]
    #[case(diesel::result::Error::NotFound, UserPersistenceError::query("record not found"))]
    #[case(diesel::result::Error::BrokenTransactionManager, UserPersistenceError::connection("database connection error"))]
    #[case(diesel::result::Error::RollbackTransaction, UserPersistenceError::query("database error"))]
    fn diesel_failures_are_classified(
        #[case] error: diesel::result::Error,
        #[case] expected: UserPersistenceError,
    ) {
        let mapped = map_basic_diesel_error(
            error,
            UserPersistenceError::query,
            UserPersistenceError::connection,
        );
        assert_eq!(mapped, expected);
    }
}
