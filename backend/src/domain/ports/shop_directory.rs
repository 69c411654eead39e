//! Driving port for shop management.

use async_trait::async_trait;

use crate::domain::{Error, NewShop, Shop, ShopFilter, ShopId, ShopPatch};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShopDirectory: Send + Sync {
    /// Open a shop; `Conflict` when the campus already has a shop of that name.
    async fn create(&self, shop: NewShop) -> Result<Shop, Error>;

    async fn list(&self, filter: ShopFilter) -> Result<Vec<Shop>, Error>;

    async fn update(&self, id: ShopId, patch: ShopPatch) -> Result<Shop, Error>;

    async fn delete(&self, id: ShopId) -> Result<(), Error>;
}
