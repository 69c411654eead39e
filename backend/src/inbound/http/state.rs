//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever see the driving
//! ports, so they can be exercised against mocks or the in-memory store.

use std::sync::Arc;

use crate::domain::ports::{
    CampusDirectory, PaymentsQuery, PricingCatalogue, PrintJobsQuery, ShopDirectory,
    UserDirectory,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub campuses: Arc<dyn CampusDirectory>,
    pub shops: Arc<dyn ShopDirectory>,
    pub pricing: Arc<dyn PricingCatalogue>,
    pub users: Arc<dyn UserDirectory>,
    pub jobs: Arc<dyn PrintJobsQuery>,
    pub payments: Arc<dyn PaymentsQuery>,
}

/// Parameter object used to build [`HttpState`].
///
/// `server::state_builders` fills it with Diesel-backed services; tests use
/// `test_support::InMemoryStore::http_ports`.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub campuses: Arc<dyn CampusDirectory>,
    pub shops: Arc<dyn ShopDirectory>,
    pub pricing: Arc<dyn PricingCatalogue>,
    pub users: Arc<dyn UserDirectory>,
    pub jobs: Arc<dyn PrintJobsQuery>,
    pub payments: Arc<dyn PaymentsQuery>,
}

impl HttpState {
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            campuses,
            shops,
            pricing,
            users,
            jobs,
            payments,
        } = ports;
        Self {
            campuses,
            shops,
            pricing,
            users,
            jobs,
            payments,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
