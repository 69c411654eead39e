//! User registration service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ports::{UserDirectory, UserRepository};
use super::{Error, NewUser, User, UserId, timestamp_now};

/// Service implementing [`UserDirectory`].
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    user_repo: Arc<R>,
}

impl<R> UserDirectoryService<R> {
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserDirectory for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn create(&self, user: NewUser) -> Result<User, Error> {
        let record = user.into_user(timestamp_now());
        self.user_repo.insert(&record).await?;
        info!(user_id = %record.id, campus_id = %record.campus_id, "user created");
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<User>, Error> {
        Ok(self.user_repo.list().await?)
    }

    async fn delete(&self, id: UserId) -> Result<(), Error> {
        if !self.user_repo.delete(id).await? {
            return Err(Error::not_found("User not found"));
        }
        Ok(())
    }
}
