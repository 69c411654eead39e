//! PostgreSQL-backed `PricingRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PricingRepository, PricingRepositoryError};
use crate::domain::{ParseEnumError, PricingId, ShopId, ShopPricing};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::ShopPricingRow;
use super::pool::{DbPool, PoolError};
use super::schema::shop_pricing;

/// Diesel implementation of [`PricingRepository`].
#[derive(Clone)]
pub struct DieselPricingRepository {
    pool: DbPool,
}

impl DieselPricingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> PricingRepositoryError {
    map_pool_error(error, PricingRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> PricingRepositoryError {
    map_diesel_error(
        error,
        PricingRepositoryError::query,
        PricingRepositoryError::connection,
    )
}

fn row_to_pricing(row: ShopPricingRow) -> Result<ShopPricing, PricingRepositoryError> {
    let id = row.id;
    let invalid =
        |err: ParseEnumError| PricingRepositoryError::query(format!("pricing {id}: {err}"));
    Ok(ShopPricing {
        id: PricingId::from_uuid(row.id),
        shop_id: ShopId::from_uuid(row.shop_id),
        size: row.size.parse().map_err(invalid)?,
        color_mode: row.color_mode.parse().map_err(invalid)?,
        normal_rate: row.normal_rate,
        bulk_rate: row.bulk_rate,
        bulk_threshold: row.bulk_threshold,
    })
}

#[async_trait]
impl PricingRepository for DieselPricingRepository {
    async fn insert(&self, pricing: &ShopPricing) -> Result<(), PricingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = ShopPricingRow {
            id: *pricing.id.as_uuid(),
            shop_id: *pricing.shop_id.as_uuid(),
            size: pricing.size.as_str().to_owned(),
            color_mode: pricing.color_mode.as_str().to_owned(),
            normal_rate: pricing.normal_rate,
            bulk_rate: pricing.bulk_rate,
            bulk_threshold: pricing.bulk_threshold,
        };
        diesel::insert_into(shop_pricing::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn list_for_shop(
        &self,
        shop_id: ShopId,
    ) -> Result<Vec<ShopPricing>, PricingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<ShopPricingRow> = shop_pricing::table
            .filter(shop_pricing::shop_id.eq(shop_id.as_uuid()))
            .order((
                shop_pricing::size.asc(),
                shop_pricing::color_mode.asc(),
                shop_pricing::id.asc(),
            ))
            .select(ShopPricingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter().map(row_to_pricing).collect()
    }

    async fn delete(&self, id: PricingId) -> Result<bool, PricingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(shop_pricing::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }
}
