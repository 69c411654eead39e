//! Driving port for campus management.
//!
//! HTTP handlers depend on this trait rather than on a repository so that
//! uniqueness and not-found rules live in one place.

use async_trait::async_trait;

use crate::domain::{Campus, CampusId, CampusPatch, Error, NewCampus};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampusDirectory: Send + Sync {
    /// Register a campus; `Conflict` when the name is taken.
    async fn create(&self, campus: NewCampus) -> Result<Campus, Error>;

    async fn list(&self) -> Result<Vec<Campus>, Error>;

    /// Apply `patch`; `NotFound` when `id` is unknown.
    async fn update(&self, id: CampusId, patch: CampusPatch) -> Result<Campus, Error>;

    /// Delete the campus and its dependants; `NotFound` when `id` is unknown.
    async fn delete(&self, id: CampusId) -> Result<(), Error>;
}
