//! Driven port for campus persistence.

use async_trait::async_trait;

use crate::domain::{Campus, CampusId, CampusPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by campus repository adapters.
    pub enum CampusRepositoryError {
        /// A connection could not be checked out or was lost.
        Connection { message: String } => "campus repository connection failed: {message}" as service_unavailable,
        /// Query or constraint failure.
        Query { message: String } => "campus repository query failed: {message}" as internal,
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampusRepository: Send + Sync {
    /// Look up a campus by its exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Campus>, CampusRepositoryError>;

    async fn find_by_id(&self, id: CampusId) -> Result<Option<Campus>, CampusRepositoryError>;

    async fn insert(&self, campus: &Campus) -> Result<(), CampusRepositoryError>;

    /// All campuses, oldest first.
    async fn list(&self) -> Result<Vec<Campus>, CampusRepositoryError>;

    /// Apply a non-empty patch; `None` when no row has `id`.
    async fn update(
        &self,
        id: CampusId,
        patch: &CampusPatch,
    ) -> Result<Option<Campus>, CampusRepositoryError>;

    /// Remove the campus and everything hanging off it. Returns whether a
    /// row was deleted.
    async fn delete(&self, id: CampusId) -> Result<bool, CampusRepositoryError>;
}
