//! PostgreSQL-backed `CampusRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CampusRepository, CampusRepositoryError};
use crate::domain::{Campus, CampusId, CampusPatch};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CampusChangeset, CampusRow, NewCampusRow};
use super::pool::{DbPool, PoolError};
use super::schema::campuses;

/// Diesel implementation of [`CampusRepository`].
#[derive(Clone)]
pub struct DieselCampusRepository {
    pool: DbPool,
}

impl DieselCampusRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CampusRepositoryError {
    map_pool_error(error, CampusRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> CampusRepositoryError {
    map_diesel_error(
        error,
        CampusRepositoryError::query,
        CampusRepositoryError::connection,
    )
}

impl From<CampusRow> for Campus {
    fn from(row: CampusRow) -> Self {
        Self {
            id: CampusId::from_uuid(row.id),
            name: row.name,
            location: row.location,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CampusRepository for DieselCampusRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Campus>, CampusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = campuses::table
            .filter(campuses::name.eq(name))
            .select(CampusRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Campus::from))
    }

    async fn find_by_id(&self, id: CampusId) -> Result<Option<Campus>, CampusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = campuses::table
            .find(id.as_uuid())
            .select(CampusRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Campus::from))
    }

    async fn insert(&self, campus: &Campus) -> Result<(), CampusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewCampusRow {
            id: *campus.id.as_uuid(),
            name: &campus.name,
            location: &campus.location,
            created_at: campus.created_at,
        };
        diesel::insert_into(campuses::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn list(&self) -> Result<Vec<Campus>, CampusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<CampusRow> = campuses::table
            .order((campuses::created_at.asc(), campuses::id.asc()))
            .select(CampusRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Campus::from).collect())
    }

    async fn update(
        &self,
        id: CampusId,
        patch: &CampusPatch,
    ) -> Result<Option<Campus>, CampusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let changes = CampusChangeset {
            name: patch.name(),
            location: patch.location(),
        };
        let row = diesel::update(campuses::table.find(id.as_uuid()))
            .set(&changes)
            .returning(CampusRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Campus::from))
    }

    async fn delete(&self, id: CampusId) -> Result<bool, CampusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(campuses::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }
}
