//! HTTP adapter mapping for domain errors.
//!
//! The domain error type stays HTTP-agnostic; this module decides status
//! codes and redacts internal failures before they reach clients.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Uniqueness conflicts answer 400, matching the contract existing clients
/// already rely on.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Wire body: the domain payload plus `detail`, a copy of `message` under
/// the key browser clients read.
#[derive(Serialize)]
struct ErrorBody {
    #[serde(flatten)]
    error: Error,
    detail: String,
}

impl From<Error> for ErrorBody {
    fn from(error: Error) -> Self {
        let detail = error.message().to_owned();
        Self { error, detail }
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError => {
                error!(
                    message = self.message(),
                    trace_id = self.trace_id(),
                    "request failed"
                );
            }
            ErrorCode::ServiceUnavailable => {
                warn!(
                    message = self.message(),
                    trace_id = self.trace_id(),
                    "dependency unavailable"
                );
            }
            _ => {}
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody::from(redact_if_internal(self)))
    }
}
