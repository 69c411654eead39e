//! OpenAPI schema definitions for the error payload.
//!
//! The domain error type stays free of `utoipa` derives; these wrappers
//! describe its wire shape for the generated document.

use serde::Serialize;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(Serialize, ToSchema)]
#[schema(as = ErrorCode)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCodeSchema {
    /// The request is malformed, fails validation, or conflicts with an
    /// existing record.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A uniqueness rule would be violated.
    Conflict,
    /// The database is unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(Serialize, ToSchema)]
#[schema(as = Error)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "Campus not found")]
    message: String,
    /// Same text as `message`.
    #[schema(example = "Campus not found")]
    detail: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "7f1b5c52-2f6a-4d2c-9d0e-6b8f4b1a0c11")]
    trace_id: Option<String>,
    /// Field-level detail for validation failures.
    details: Option<serde_json::Value>,
}

/// Body of delete and auth responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Campus deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
