//! Shared Diesel and pool error mapping for the repositories.
//!
//! Every repository port error has a `Connection` and a `Query` variant;
//! these helpers decide which one a failure belongs to.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Pool failures always mean the database is unreachable.
pub(crate) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    connection(error.into_message())
}

/// Classify a Diesel failure, logging the driver detail at debug level.
///
/// Closed connections and failed sends map to `connection`; everything else,
/// constraint violations included, maps to `query`.
pub(crate) fn map_diesel_error<E>(
    error: DieselError,
    query: impl FnOnce(String) -> E,
    connection: impl FnOnce(String) -> E,
) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => debug!(
            ?kind,
            message = info.message(),
            constraint = info.constraint_name(),
            "diesel operation failed"
        ),
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand,
            _,
        ) => connection("database connection error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => query(format!(
            "unique constraint violated: {}",
            info.constraint_name().unwrap_or("unknown")
        )),
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            query(format!(
                "foreign key constraint violated: {}",
                info.constraint_name().unwrap_or("unknown")
            ))
        }
        DieselError::QueryBuilderError(_) => query("database query error".to_owned()),
        _ => query("database error".to_owned()),
    }
}
