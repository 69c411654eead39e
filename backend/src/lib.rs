//! Campus print-shop backend library.
//!
//! - [`domain`]: entities, validated inputs, ports, and services.
//! - [`inbound`]: actix-web handlers and HTTP error mapping.
//! - [`outbound`]: Diesel persistence adapters and migrations.
//! - [`middleware`]: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
