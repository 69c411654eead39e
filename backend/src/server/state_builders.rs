//! Wiring of Diesel repositories into the domain services behind
//! [`HttpState`].

use std::sync::Arc;

use campus_print::domain::{
    CampusDirectoryService, PaymentsService, PricingCatalogueService, PrintJobsService,
    ShopDirectoryService, UserDirectoryService,
};
use campus_print::inbound::http::state::{HttpState, HttpStatePorts};
use campus_print::outbound::persistence::{
    DbPool, DieselCampusRepository, DieselPaymentRepository, DieselPricingRepository,
    DieselPrintJobRepository, DieselShopRepository, DieselUserRepository,
};

/// Wrap `make_repo(pool)` in `Arc` and hand it to `make_service`.
fn service_over<R, S>(
    pool: &DbPool,
    make_repo: impl FnOnce(DbPool) -> R,
    make_service: impl FnOnce(Arc<R>) -> S,
) -> Arc<S> {
    Arc::new(make_service(Arc::new(make_repo(pool.clone()))))
}

/// Build the handler state with every port backed by `pool`.
pub(crate) fn build_http_state(pool: &DbPool) -> HttpState {
    HttpState::new(HttpStatePorts {
        campuses: service_over(pool, DieselCampusRepository::new, CampusDirectoryService::new),
        shops: service_over(pool, DieselShopRepository::new, ShopDirectoryService::new),
        pricing: service_over(
            pool,
            DieselPricingRepository::new,
            PricingCatalogueService::new,
        ),
        users: service_over(pool, DieselUserRepository::new, UserDirectoryService::new),
        jobs: service_over(pool, DieselPrintJobRepository::new, PrintJobsService::new),
        payments: service_over(pool, DieselPaymentRepository::new, PaymentsService::new),
    })
}
