//! Test helpers for inbound HTTP components.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::Value;
use std::sync::Arc;

use crate::domain::ports::{
    MockCampusDirectory, MockPaymentsQuery, MockPricingCatalogue, MockPrintJobsQuery,
    MockShopDirectory, MockUserDirectory,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::validation::{json_config, query_config};

/// One mock per driving port. Unconfigured mocks panic when called.
#[derive(Default)]
pub struct MockPorts {
    pub campuses: MockCampusDirectory,
    pub shops: MockShopDirectory,
    pub pricing: MockPricingCatalogue,
    pub users: MockUserDirectory,
    pub jobs: MockPrintJobsQuery,
    pub payments: MockPaymentsQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            campuses: Arc::new(self.campuses),
            shops: Arc::new(self.shops),
            pricing: Arc::new(self.pricing),
            users: Arc::new(self.users),
            jobs: Arc::new(self.jobs),
            payments: Arc::new(self.payments),
        })
    }
}

/// Build the `/api` scope over `state` with the production extractor config.
pub fn api_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(query_config())
        .service(web::scope("/api").configure(super::configure))
}

/// Read a response body as JSON.
pub async fn json_body<B>(response: ServiceResponse<B>) -> Value
where
    B: MessageBody,
{
    let body = test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}
