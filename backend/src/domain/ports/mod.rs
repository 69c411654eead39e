//! Domain ports for the hexagonal boundary.
//!
//! `*Repository` traits are driven ports implemented by the persistence
//! adapter. The remaining traits are driving ports implemented by the domain
//! services and consumed by the HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod campus_directory;
mod campus_repository;
mod payment_repository;
mod pricing_catalogue;
mod pricing_repository;
mod print_job_repository;
mod print_jobs_query;
mod shop_directory;
mod shop_repository;
mod user_directory;
mod user_repository;

pub use campus_directory::CampusDirectory;
#[cfg(test)]
pub use campus_directory::MockCampusDirectory;
#[cfg(test)]
pub use campus_repository::MockCampusRepository;
pub use campus_repository::{CampusRepository, CampusRepositoryError};
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
pub use payment_repository::{PaymentRepository, PaymentRepositoryError};
#[cfg(test)]
pub use pricing_catalogue::MockPricingCatalogue;
pub use pricing_catalogue::PricingCatalogue;
#[cfg(test)]
pub use pricing_repository::MockPricingRepository;
pub use pricing_repository::{PricingRepository, PricingRepositoryError};
#[cfg(test)]
pub use print_job_repository::MockPrintJobRepository;
pub use print_job_repository::{PrintJobRepository, PrintJobRepositoryError};
#[cfg(test)]
pub use print_jobs_query::{MockPaymentsQuery, MockPrintJobsQuery};
pub use print_jobs_query::{PaymentsQuery, PrintJobsQuery};
#[cfg(test)]
pub use shop_directory::MockShopDirectory;
pub use shop_directory::ShopDirectory;
#[cfg(test)]
pub use shop_repository::MockShopRepository;
pub use shop_repository::{ShopRepository, ShopRepositoryError};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
