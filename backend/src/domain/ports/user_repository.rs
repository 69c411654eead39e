//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}" as service_unavailable,
        /// Query or mutation failed, including duplicate emails.
        Query { message: String } => "user repository query failed: {message}" as internal,
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError>;
}
