//! Driven port for shop price lists.

use async_trait::async_trait;

use crate::domain::{PricingId, ShopId, ShopPricing};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by pricing repository adapters.
    pub enum PricingRepositoryError {
        Connection { message: String } => "pricing repository connection failed: {message}" as service_unavailable,
        Query { message: String } => "pricing repository query failed: {message}" as internal,
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PricingRepository: Send + Sync {
    async fn insert(&self, pricing: &ShopPricing) -> Result<(), PricingRepositoryError>;

    /// Rows belonging to `shop_id`; empty for an unknown shop.
    async fn list_for_shop(&self, shop_id: ShopId)
    -> Result<Vec<ShopPricing>, PricingRepositoryError>;

    async fn delete(&self, id: PricingId) -> Result<bool, PricingRepositoryError>;
}
