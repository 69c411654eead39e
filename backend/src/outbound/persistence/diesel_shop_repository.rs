//! PostgreSQL-backed `ShopRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ShopRepository, ShopRepositoryError};
use crate::domain::{CampusId, Shop, ShopFilter, ShopId, ShopPatch};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewShopRow, ShopChangeset, ShopRow};
use super::pool::{DbPool, PoolError};
use super::schema::shops;

/// Diesel implementation of [`ShopRepository`].
#[derive(Clone)]
pub struct DieselShopRepository {
    pool: DbPool,
}

impl DieselShopRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ShopRepositoryError {
    map_pool_error(error, ShopRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ShopRepositoryError {
    map_diesel_error(
        error,
        ShopRepositoryError::query,
        ShopRepositoryError::connection,
    )
}

fn row_to_shop(row: ShopRow) -> Result<Shop, ShopRepositoryError> {
    let execution_mode = row
        .execution_mode
        .parse()
        .map_err(|err| ShopRepositoryError::query(format!("shop {}: {err}", row.id)))?;
    let payment_mode = row
        .payment_mode
        .parse()
        .map_err(|err| ShopRepositoryError::query(format!("shop {}: {err}", row.id)))?;
    Ok(Shop {
        id: ShopId::from_uuid(row.id),
        campus_id: CampusId::from_uuid(row.campus_id),
        name: row.name,
        execution_mode,
        payment_mode,
        is_active: row.is_active,
        created_at: row.created_at,
    })
}

#[async_trait]
impl ShopRepository for DieselShopRepository {
    async fn find_by_campus_and_name(
        &self,
        campus_id: CampusId,
        name: &str,
    ) -> Result<Option<Shop>, ShopRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = shops::table
            .filter(shops::campus_id.eq(campus_id.as_uuid()))
            .filter(shops::name.eq(name))
            .select(ShopRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(row_to_shop).transpose()
    }

    async fn find_by_id(&self, id: ShopId) -> Result<Option<Shop>, ShopRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = shops::table
            .find(id.as_uuid())
            .select(ShopRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(row_to_shop).transpose()
    }

    async fn insert(&self, shop: &Shop) -> Result<(), ShopRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewShopRow {
            id: *shop.id.as_uuid(),
            campus_id: *shop.campus_id.as_uuid(),
            name: &shop.name,
            execution_mode: shop.execution_mode.as_str(),
            payment_mode: shop.payment_mode.as_str(),
            is_active: shop.is_active,
            created_at: shop.created_at,
        };
        diesel::insert_into(shops::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn list(&self, filter: ShopFilter) -> Result<Vec<Shop>, ShopRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let mut query = shops::table.into_boxed();
        if let Some(campus_id) = filter.campus_id {
            query = query.filter(shops::campus_id.eq(*campus_id.as_uuid()));
        }
        let rows: Vec<ShopRow> = query
            .order((shops::created_at.asc(), shops::id.asc()))
            .select(ShopRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter().map(row_to_shop).collect()
    }

    async fn update(
        &self,
        id: ShopId,
        patch: &ShopPatch,
    ) -> Result<Option<Shop>, ShopRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let changes = ShopChangeset {
            name: patch.name(),
            execution_mode: patch.execution_mode().map(|mode| mode.as_str()),
            payment_mode: patch.payment_mode().map(|mode| mode.as_str()),
            is_active: patch.is_active(),
        };
        let row = diesel::update(shops::table.find(id.as_uuid()))
            .set(&changes)
            .returning(ShopRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(row_to_shop).transpose()
    }

    async fn delete(&self, id: ShopId) -> Result<bool, ShopRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(shops::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }
}
