//! In-memory repositories for tests.
//!
//! [`InMemoryStore`] implements every repository port over plain vectors and
//! applies the same uniqueness, foreign-key, and cascade rules as the
//! PostgreSQL schema, so handler and scenario tests observe the behaviour
//! the Diesel adapters would produce. Violations are reported as `Query`
//! errors carrying the constraint name.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    CampusRepository, CampusRepositoryError, PaymentRepository, PaymentRepositoryError,
    PricingRepository, PricingRepositoryError, PrintJobRepository, PrintJobRepositoryError,
    ShopRepository, ShopRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Campus, CampusDirectoryService, CampusId, CampusPatch, Payment, PaymentId, PaymentsService,
    PricingCatalogueService, PricingId, PrintJob, PrintJobsService, Shop, ShopDirectoryService,
    ShopFilter, ShopId, ShopPatch, ShopPricing, User, UserDirectoryService, UserId,
};
use crate::inbound::http::state::HttpStatePorts;

#[derive(Debug, Default)]
struct Tables {
    campuses: Vec<Campus>,
    shops: Vec<Shop>,
    pricing: Vec<ShopPricing>,
    users: Vec<User>,
    jobs: Vec<PrintJob>,
    payments: Vec<Payment>,
}

impl Tables {
    fn unique_violation(constraint: &str) -> String {
        format!("duplicate key value violates unique constraint \"{constraint}\"")
    }

    fn foreign_key_violation(constraint: &str) -> String {
        format!("insert or update violates foreign key constraint \"{constraint}\"")
    }

    fn has_campus(&self, id: CampusId) -> bool {
        self.campuses.iter().any(|campus| campus.id == id)
    }

    fn has_shop(&self, id: ShopId) -> bool {
        self.shops.iter().any(|shop| shop.id == id)
    }

    fn campus_name_taken(&self, name: &str, except: Option<CampusId>) -> bool {
        self.campuses
            .iter()
            .any(|campus| campus.name == name && Some(campus.id) != except)
    }

    fn shop_name_taken(&self, campus_id: CampusId, name: &str, except: Option<ShopId>) -> bool {
        self.shops.iter().any(|shop| {
            shop.campus_id == campus_id && shop.name == name && Some(shop.id) != except
        })
    }

    fn retain_jobs(&mut self, keep: impl Fn(&PrintJob) -> bool) {
        self.jobs.retain(keep);
        let jobs = &self.jobs;
        self.payments
            .retain(|payment| jobs.iter().any(|job| job.id == payment.job_id));
    }

    fn cascade_shop(&mut self, id: ShopId) {
        self.pricing.retain(|row| row.shop_id != id);
        self.retain_jobs(|job| job.shop_id != id);
    }

    fn cascade_user(&mut self, id: UserId) {
        self.retain_jobs(|job| job.user_id != id);
    }

    fn cascade_campus(&mut self, id: CampusId) {
        let shops: Vec<ShopId> = self
            .shops
            .iter()
            .filter(|shop| shop.campus_id == id)
            .map(|shop| shop.id)
            .collect();
        let users: Vec<UserId> = self
            .users
            .iter()
            .filter(|user| user.campus_id == id)
            .map(|user| user.id)
            .collect();
        for shop in shops {
            self.cascade_shop(shop);
        }
        for user in users {
            self.cascade_user(user);
        }
        self.retain_jobs(|job| job.campus_id != id);
        self.shops.retain(|shop| shop.campus_id != id);
        self.users.retain(|user| user.campus_id != id);
    }
}

/// Shared in-memory backing store for all repository ports.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use campus_print::inbound::http::state::HttpState;
/// use campus_print::test_support::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::default());
/// let state = HttpState::new(InMemoryStore::http_ports(&store));
/// let _campuses = state.campuses.clone();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wire the domain services over `store` for the HTTP adapter.
    pub fn http_ports(store: &Arc<Self>) -> HttpStatePorts {
        HttpStatePorts {
            campuses: Arc::new(CampusDirectoryService::new(store.clone())),
            shops: Arc::new(ShopDirectoryService::new(store.clone())),
            pricing: Arc::new(PricingCatalogueService::new(store.clone())),
            users: Arc::new(UserDirectoryService::new(store.clone())),
            jobs: Arc::new(PrintJobsService::new(store.clone())),
            payments: Arc::new(PaymentsService::new(store.clone())),
        }
    }

    /// Insert a print job as the external intake process would.
    ///
    /// # Errors
    ///
    /// Returns the violated constraint when the campus, shop, or user is
    /// missing.
    pub fn seed_job(&self, job: PrintJob) -> Result<(), String> {
        let mut tables = self.tables();
        if !tables.has_campus(job.campus_id) {
            return Err(Tables::foreign_key_violation("print_jobs_campus_id_fkey"));
        }
        if !tables.has_shop(job.shop_id) {
            return Err(Tables::foreign_key_violation("print_jobs_shop_id_fkey"));
        }
        if !tables.users.iter().any(|user| user.id == job.user_id) {
            return Err(Tables::foreign_key_violation("print_jobs_user_id_fkey"));
        }
        tables.jobs.push(job);
        Ok(())
    }

    /// Record a payment against an existing job.
    ///
    /// # Errors
    ///
    /// Returns the violated constraint when the job is missing or already
    /// has a payment.
    pub fn seed_payment(&self, payment: Payment) -> Result<(), String> {
        let mut tables = self.tables();
        if !tables.jobs.iter().any(|job| job.id == payment.job_id) {
            return Err(Tables::foreign_key_violation("payments_job_id_fkey"));
        }
        if tables.payments.iter().any(|p| p.job_id == payment.job_id) {
            return Err(Tables::unique_violation("payments_job_id_key"));
        }
        tables.payments.push(payment);
        Ok(())
    }

    pub fn job_count(&self) -> usize {
        self.tables().jobs.len()
    }

    pub fn payment_count(&self) -> usize {
        self.tables().payments.len()
    }
}

#[async_trait]
impl CampusRepository for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Campus>, CampusRepositoryError> {
        Ok(self
            .tables()
            .campuses
            .iter()
            .find(|campus| campus.name == name)
            .cloned())
    }

    async fn find_by_id(&self, id: CampusId) -> Result<Option<Campus>, CampusRepositoryError> {
        Ok(self
            .tables()
            .campuses
            .iter()
            .find(|campus| campus.id == id)
            .cloned())
    }

    async fn insert(&self, campus: &Campus) -> Result<(), CampusRepositoryError> {
        let mut tables = self.tables();
        if tables.campus_name_taken(&campus.name, None) {
            return Err(CampusRepositoryError::query(Tables::unique_violation(
                "uq_campus_name",
            )));
        }
        tables.campuses.push(campus.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Campus>, CampusRepositoryError> {
        Ok(self.tables().campuses.clone())
    }

    async fn update(
        &self,
        id: CampusId,
        patch: &CampusPatch,
    ) -> Result<Option<Campus>, CampusRepositoryError> {
        let mut tables = self.tables();
        if patch
            .name()
            .is_some_and(|name| tables.campus_name_taken(name, Some(id)))
        {
            return Err(CampusRepositoryError::query(Tables::unique_violation(
                "uq_campus_name",
            )));
        }
        Ok(tables
            .campuses
            .iter_mut()
            .find(|campus| campus.id == id)
            .map(|campus| {
                patch.apply(campus);
                campus.clone()
            }))
    }

    async fn delete(&self, id: CampusId) -> Result<bool, CampusRepositoryError> {
        let mut tables = self.tables();
        if !tables.has_campus(id) {
            return Ok(false);
        }
        tables.cascade_campus(id);
        tables.campuses.retain(|campus| campus.id != id);
        Ok(true)
    }
}

#[async_trait]
impl ShopRepository for InMemoryStore {
    async fn find_by_campus_and_name(
        &self,
        campus_id: CampusId,
        name: &str,
    ) -> Result<Option<Shop>, ShopRepositoryError> {
        Ok(self
            .tables()
            .shops
            .iter()
            .find(|shop| shop.campus_id == campus_id && shop.name == name)
            .cloned())
    }

    async fn find_by_id(&self, id: ShopId) -> Result<Option<Shop>, ShopRepositoryError> {
        Ok(self.tables().shops.iter().find(|shop| shop.id == id).cloned())
    }

    async fn insert(&self, shop: &Shop) -> Result<(), ShopRepositoryError> {
        let mut tables = self.tables();
        if !tables.has_campus(shop.campus_id) {
            return Err(ShopRepositoryError::query(Tables::foreign_key_violation(
                "shops_campus_id_fkey",
            )));
        }
        if tables.shop_name_taken(shop.campus_id, &shop.name, None) {
            return Err(ShopRepositoryError::query(Tables::unique_violation(
                "uq_campus_id_shop_name",
            )));
        }
        tables.shops.push(shop.clone());
        Ok(())
    }

    async fn list(&self, filter: ShopFilter) -> Result<Vec<Shop>, ShopRepositoryError> {
        Ok(self
            .tables()
            .shops
            .iter()
            .filter(|shop| filter.matches(shop))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: ShopId,
        patch: &ShopPatch,
    ) -> Result<Option<Shop>, ShopRepositoryError> {
        let mut tables = self.tables();
        let campus_id = tables
            .shops
            .iter()
            .find(|shop| shop.id == id)
            .map(|shop| shop.campus_id);
        let clashes = match (campus_id, patch.name()) {
            (Some(campus_id), Some(name)) => tables.shop_name_taken(campus_id, name, Some(id)),
            _ => false,
        };
        if clashes {
            return Err(ShopRepositoryError::query(Tables::unique_violation(
                "uq_campus_id_shop_name",
            )));
        }
        Ok(tables.shops.iter_mut().find(|shop| shop.id == id).map(|shop| {
            patch.apply(shop);
            shop.clone()
        }))
    }

    async fn delete(&self, id: ShopId) -> Result<bool, ShopRepositoryError> {
        let mut tables = self.tables();
        if !tables.has_shop(id) {
            return Ok(false);
        }
        tables.cascade_shop(id);
        tables.shops.retain(|shop| shop.id != id);
        Ok(true)
    }
}

#[async_trait]
impl PricingRepository for InMemoryStore {
    async fn insert(&self, pricing: &ShopPricing) -> Result<(), PricingRepositoryError> {
        let mut tables = self.tables();
        if !tables.has_shop(pricing.shop_id) {
            return Err(PricingRepositoryError::query(Tables::foreign_key_violation(
                "shop_pricing_shop_id_fkey",
            )));
        }
        tables.pricing.push(pricing.clone());
        Ok(())
    }

    async fn list_for_shop(
        &self,
        shop_id: ShopId,
    ) -> Result<Vec<ShopPricing>, PricingRepositoryError> {
        Ok(self
            .tables()
            .pricing
            .iter()
            .filter(|row| row.shop_id == shop_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: PricingId) -> Result<bool, PricingRepositoryError> {
        let mut tables = self.tables();
        let before = tables.pricing.len();
        tables.pricing.retain(|row| row.id != id);
        Ok(tables.pricing.len() != before)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut tables = self.tables();
        if !tables.has_campus(user.campus_id) {
            return Err(UserRepositoryError::query(Tables::foreign_key_violation(
                "users_campus_id_fkey",
            )));
        }
        if tables.users.iter().any(|existing| existing.email == user.email) {
            return Err(UserRepositoryError::query(Tables::unique_violation(
                "users_email_key",
            )));
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.tables().users.clone())
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError> {
        let mut tables = self.tables();
        if !tables.users.iter().any(|user| user.id == id) {
            return Ok(false);
        }
        tables.cascade_user(id);
        tables.users.retain(|user| user.id != id);
        Ok(true)
    }
}

#[async_trait]
impl PrintJobRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<PrintJob>, PrintJobRepositoryError> {
        Ok(self.tables().jobs.clone())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Payment>, PaymentRepositoryError> {
        Ok(self.tables().payments.clone())
    }

    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, PaymentRepositoryError> {
        Ok(self
            .tables()
            .payments
            .iter()
            .find(|payment| payment.id == id)
            .cloned())
    }
}
