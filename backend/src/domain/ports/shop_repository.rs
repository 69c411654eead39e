//! Driven port for shop persistence.

use async_trait::async_trait;

use crate::domain::{CampusId, Shop, ShopFilter, ShopId, ShopPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by shop repository adapters.
    pub enum ShopRepositoryError {
        Connection { message: String } => "shop repository connection failed: {message}" as service_unavailable,
        Query { message: String } => "shop repository query failed: {message}" as internal,
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// Look up the shop called `name` on `campus_id`.
    async fn find_by_campus_and_name(
        &self,
        campus_id: CampusId,
        name: &str,
    ) -> Result<Option<Shop>, ShopRepositoryError>;

    async fn find_by_id(&self, id: ShopId) -> Result<Option<Shop>, ShopRepositoryError>;

    async fn insert(&self, shop: &Shop) -> Result<(), ShopRepositoryError>;

    async fn list(&self, filter: ShopFilter) -> Result<Vec<Shop>, ShopRepositoryError>;

    async fn update(
        &self,
        id: ShopId,
        patch: &ShopPatch,
    ) -> Result<Option<Shop>, ShopRepositoryError>;

    async fn delete(&self, id: ShopId) -> Result<bool, ShopRepositoryError>;
}
