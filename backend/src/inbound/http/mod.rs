//! HTTP inbound adapter exposing the JSON API.
//!
//! Handlers translate requests into driving-port calls and map domain errors
//! onto HTTP responses. Everything except the health probes is mounted under
//! `/api` by [`configure`].

use actix_web::web;

pub mod auth;
pub mod campuses;
pub mod error;
pub mod health;
pub mod ledger;
pub mod pricing;
pub mod schemas;
pub mod shops;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register every `/api` handler on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use campus_print::inbound::http::configure;
///
/// let app = App::new().service(web::scope("/api").configure(configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(auth::logout)
        .service(campuses::create_campus)
        .service(campuses::list_campuses)
        .service(campuses::update_campus)
        .service(campuses::delete_campus)
        .service(shops::create_shop)
        .service(shops::list_shops)
        .service(shops::update_shop)
        .service(shops::delete_shop)
        .service(pricing::create_pricing)
        .service(pricing::list_pricing)
        .service(pricing::delete_pricing)
        .service(users::create_user)
        .service(users::list_users)
        .service(users::delete_user)
        .service(ledger::list_jobs)
        .service(ledger::list_payments)
        .service(ledger::get_payment);
}
