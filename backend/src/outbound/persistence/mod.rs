//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories are thin: they translate between the row structs in
//! `models.rs` and domain records, and classify failures into the port error
//! enums. Uniqueness and cascade rules live in the schema.
//!
//! # Example
//!
//! ```no_run
//! use campus_print::outbound::persistence::{DbPool, DieselCampusRepository, PoolConfig};
//!
//! let pool = DbPool::new_lazy(&PoolConfig::new("postgres://localhost/campus_print"));
//! let campuses = DieselCampusRepository::new(pool);
//! # let _ = campuses;
//! ```

mod diesel_campus_repository;
mod diesel_error_mapping;
mod diesel_ledger_repository;
mod diesel_pricing_repository;
mod diesel_shop_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_campus_repository::DieselCampusRepository;
pub use diesel_ledger_repository::{DieselPaymentRepository, DieselPrintJobRepository};
pub use diesel_pricing_repository::DieselPricingRepository;
pub use diesel_shop_repository::DieselShopRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};
