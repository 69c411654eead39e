//! Domain primitives, ports, and services.
//!
//! Purpose: model campuses, shops, price lists, users, print jobs, and
//! payments independently of HTTP and Diesel. Inputs are validated on
//! construction (`NewCampus::try_new`, `ShopPatch::try_new`, ...) so that
//! services and adapters only ever see well-formed values.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: request correlation identifier carried in task-local storage.
//! - Entity records and their `New*` / `*Patch` inputs.
//! - Services implementing the driving ports in [`ports`].

use chrono::{DateTime, SubsecRound, Utc};

pub mod campus;
mod directory_service;
pub mod enums;
pub mod error;
pub mod ids;
mod ledger_service;
pub mod ports;
pub mod pricing;
mod pricing_service;
pub mod print_job;
pub mod shop;
pub mod trace_id;
pub mod user;
mod user_service;
pub mod validation;

pub use self::campus::{Campus, CampusPatch, NewCampus};
pub use self::directory_service::{CampusDirectoryService, ShopDirectoryService};
pub use self::enums::{
    ColorMode, ExecutionMode, PaperSize, ParseEnumError, PaymentMode, PrintStatus, UserRole,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{CampusId, JobId, PaymentId, PricingId, ShopId, UserId};
pub use self::ledger_service::{PaymentsService, PrintJobsService};
pub use self::pricing::{NewShopPricing, ShopPricing};
pub use self::pricing_service::PricingCatalogueService;
pub use self::print_job::{Payment, PrintJob};
pub use self::shop::{NewShop, Shop, ShopFilter, ShopPatch};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User};
pub use self::user_service::UserDirectoryService;
pub use self::validation::{FieldError, FieldProblem};

/// Current time at the precision PostgreSQL stores (microseconds), so a
/// freshly created record equals the same record read back.
#[must_use]
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
