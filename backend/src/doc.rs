//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every handler in the inbound HTTP layer plus the
//! error schema wrappers. The document is served by Swagger UI in debug
//! builds and printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{ColorMode, ExecutionMode, PaperSize, PaymentMode, PrintStatus, UserRole};
use crate::inbound::http::campuses::{CampusCreateRequest, CampusResponse, CampusUpdateRequest};
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::ledger::{JobResponse, PaymentResponse};
use crate::inbound::http::pricing::{PricingCreateRequest, PricingResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, MessageResponse};
use crate::inbound::http::shops::{ShopCreateRequest, ShopResponse, ShopUpdateRequest};
use crate::inbound::http::users::{UserCreateRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus print backend API",
        description = "Administration of campuses, print shops, price lists, and users, \
                       with read access to print jobs and payments."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::campuses::create_campus,
        crate::inbound::http::campuses::list_campuses,
        crate::inbound::http::campuses::update_campus,
        crate::inbound::http::campuses::delete_campus,
        crate::inbound::http::shops::create_shop,
        crate::inbound::http::shops::list_shops,
        crate::inbound::http::shops::update_shop,
        crate::inbound::http::shops::delete_shop,
        crate::inbound::http::pricing::create_pricing,
        crate::inbound::http::pricing::list_pricing,
        crate::inbound::http::pricing::delete_pricing,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::ledger::list_jobs,
        crate::inbound::http::ledger::list_payments,
        crate::inbound::http::ledger::get_payment,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        MessageResponse,
        HealthResponse,
        CampusCreateRequest,
        CampusUpdateRequest,
        CampusResponse,
        ShopCreateRequest,
        ShopUpdateRequest,
        ShopResponse,
        PricingCreateRequest,
        PricingResponse,
        UserCreateRequest,
        UserResponse,
        JobResponse,
        PaymentResponse,
        ExecutionMode,
        PaymentMode,
        PaperSize,
        ColorMode,
        UserRole,
        PrintStatus,
    )),
    tags(
        (name = "auth", description = "Placeholder authentication endpoints"),
        (name = "campuses", description = "Campus administration"),
        (name = "shops", description = "Print shop administration"),
        (name = "pricing", description = "Shop price lists"),
        (name = "users", description = "User registration"),
        (name = "jobs", description = "Print job listing"),
        (name = "payments", description = "Payment lookup"),
        (name = "health", description = "Health checks and probes")
    )
)]
pub struct ApiDoc;
