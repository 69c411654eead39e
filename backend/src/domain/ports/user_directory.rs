//! Driving port for user registration.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Register a user. A duplicate email fails in storage, not here.
    async fn create(&self, user: NewUser) -> Result<User, Error>;

    async fn list(&self) -> Result<Vec<User>, Error>;

    async fn delete(&self, id: UserId) -> Result<(), Error>;
}
