//! Driving port for shop price lists.

use async_trait::async_trait;

use crate::domain::{Error, NewShopPricing, PricingId, ShopId, ShopPricing};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PricingCatalogue: Send + Sync {
    /// Add a price row. Duplicate size/colour rows are accepted.
    async fn create(&self, pricing: NewShopPricing) -> Result<ShopPricing, Error>;

    async fn list(&self, shop_id: ShopId) -> Result<Vec<ShopPricing>, Error>;

    async fn delete(&self, id: PricingId) -> Result<(), Error>;
}
