//! Campus and shop management services.
//!
//! Both services guard creation with a read-before-write uniqueness check.
//! The check is not atomic: a concurrent writer that slips past it is stopped
//! by the storage constraint and surfaces as an internal error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ports::{CampusDirectory, CampusRepository, ShopDirectory, ShopRepository};
use super::{
    Campus, CampusId, CampusPatch, Error, NewCampus, NewShop, Shop, ShopFilter, ShopId, ShopPatch,
    timestamp_now,
};

fn campus_not_found() -> Error {
    Error::not_found("Campus not found")
}

fn shop_not_found() -> Error {
    Error::not_found("Shop not found")
}

/// Service implementing [`CampusDirectory`].
#[derive(Clone)]
pub struct CampusDirectoryService<R> {
    campus_repo: Arc<R>,
}

impl<R> CampusDirectoryService<R> {
    pub fn new(campus_repo: Arc<R>) -> Self {
        Self { campus_repo }
    }
}

#[async_trait]
impl<R> CampusDirectory for CampusDirectoryService<R>
where
    R: CampusRepository,
{
    async fn create(&self, campus: NewCampus) -> Result<Campus, Error> {
        if self.campus_repo.find_by_name(campus.name()).await?.is_some() {
            return Err(Error::conflict(format!(
                "Campus with name '{}' already exists",
                campus.name()
            )));
        }

        let record = campus.into_campus(timestamp_now());
        self.campus_repo.insert(&record).await?;
        info!(campus_id = %record.id, "campus created");
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Campus>, Error> {
        Ok(self.campus_repo.list().await?)
    }

    async fn update(&self, id: CampusId, patch: CampusPatch) -> Result<Campus, Error> {
        let updated = if patch.is_empty() {
            self.campus_repo.find_by_id(id).await?
        } else {
            self.campus_repo.update(id, &patch).await?
        };
        updated.ok_or_else(campus_not_found)
    }

    async fn delete(&self, id: CampusId) -> Result<(), Error> {
        if !self.campus_repo.delete(id).await? {
            return Err(campus_not_found());
        }
        info!(campus_id = %id, "campus deleted");
        Ok(())
    }
}

/// Service implementing [`ShopDirectory`].
#[derive(Clone)]
pub struct ShopDirectoryService<R> {
    shop_repo: Arc<R>,
}

impl<R> ShopDirectoryService<R> {
    pub fn new(shop_repo: Arc<R>) -> Self {
        Self { shop_repo }
    }
}

#[async_trait]
impl<R> ShopDirectory for ShopDirectoryService<R>
where
    R: ShopRepository,
{
    async fn create(&self, shop: NewShop) -> Result<Shop, Error> {
        let existing = self
            .shop_repo
            .find_by_campus_and_name(shop.campus_id(), shop.name())
            .await?;
        if existing.is_some() {
            return Err(Error::conflict(format!(
                "Shop with name '{}' already exists in this campus",
                shop.name()
            )));
        }

        // The campus itself is not looked up; an unknown campus_id fails on
        // the foreign key.
        let record = shop.into_shop(timestamp_now());
        self.shop_repo.insert(&record).await?;
        info!(shop_id = %record.id, campus_id = %record.campus_id, "shop created");
        Ok(record)
    }

    async fn list(&self, filter: ShopFilter) -> Result<Vec<Shop>, Error> {
        Ok(self.shop_repo.list(filter).await?)
    }

    async fn update(&self, id: ShopId, patch: ShopPatch) -> Result<Shop, Error> {
        let updated = if patch.is_empty() {
            self.shop_repo.find_by_id(id).await?
        } else {
            self.shop_repo.update(id, &patch).await?
        };
        updated.ok_or_else(shop_not_found)
    }

    async fn delete(&self, id: ShopId) -> Result<(), Error> {
        if !self.shop_repo.delete(id).await? {
            return Err(shop_not_found());
        }
        info!(shop_id = %id, "shop deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "directory_service_tests.rs"]
mod tests;
