//! Price list service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ports::{PricingCatalogue, PricingRepository};
use super::{Error, NewShopPricing, PricingId, ShopId, ShopPricing};

/// Service implementing [`PricingCatalogue`].
#[derive(Clone)]
pub struct PricingCatalogueService<R> {
    pricing_repo: Arc<R>,
}

impl<R> PricingCatalogueService<R> {
    pub fn new(pricing_repo: Arc<R>) -> Self {
        Self { pricing_repo }
    }
}

#[async_trait]
impl<R> PricingCatalogue for PricingCatalogueService<R>
where
    R: PricingRepository,
{
    async fn create(&self, pricing: NewShopPricing) -> Result<ShopPricing, Error> {
        // TODO: decide whether (shop_id, size, color_mode) should be unique;
        // existing data may already hold duplicates.
        let record = pricing.into_pricing();
        self.pricing_repo.insert(&record).await?;
        info!(pricing_id = %record.id, shop_id = %record.shop_id, "pricing created");
        Ok(record)
    }

    async fn list(&self, shop_id: ShopId) -> Result<Vec<ShopPricing>, Error> {
        Ok(self.pricing_repo.list_for_shop(shop_id).await?)
    }

    async fn delete(&self, id: PricingId) -> Result<(), Error> {
        if !self.pricing_repo.delete(id).await? {
            return Err(Error::not_found("Pricing not found"));
        }
        Ok(())
    }
}
