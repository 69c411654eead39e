//! Request decoding helpers for the HTTP adapter.
//!
//! Malformed identifiers, bodies, and query strings all surface as
//! `invalid_request` errors with a `details` object naming the problem.

use std::str::FromStr;

use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::{Error, ParseEnumError};

/// Detail codes for request decoding failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeErrorCode {
    InvalidUuid,
    InvalidValue,
    InvalidBody,
    InvalidQuery,
}

impl DecodeErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidValue => "invalid_value",
            Self::InvalidBody => "invalid_body",
            Self::InvalidQuery => "invalid_query",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let FieldName(field) = field;
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": DecodeErrorCode::InvalidUuid.as_str(),
    }))
}

/// Parse a path or query segment into a typed identifier.
pub(crate) fn parse_id<T>(value: &str, field: FieldName) -> Result<T, Error>
where
    T: FromStr,
{
    value
        .trim()
        .parse()
        .map_err(|_| invalid_uuid_error(field, value))
}

/// Parse a closed-vocabulary field such as `execution_mode` or `role`.
pub(crate) fn parse_enum<T>(value: &str, field: FieldName) -> Result<T, Error>
where
    T: FromStr<Err = ParseEnumError>,
{
    let FieldName(name) = field;
    value.parse().map_err(|err: ParseEnumError| {
        Error::invalid_request(format!("{name}: {err}")).with_details(json!({
            "field": name,
            "value": value,
            "code": DecodeErrorCode::InvalidValue.as_str(),
        }))
    })
}

/// Parse an optional closed-vocabulary field.
pub(crate) fn parse_optional_enum<T>(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<T>, Error>
where
    T: FromStr<Err = ParseEnumError>,
{
    value.map(|raw| parse_enum(raw, field)).transpose()
}

fn decode_error(code: DecodeErrorCode, detail: String) -> actix_web::Error {
    Error::invalid_request(detail)
        .with_details(json!({ "code": code.as_str() }))
        .into()
}

/// JSON extractor configuration mapping body errors to `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        decode_error(
            DecodeErrorCode::InvalidBody,
            format!("invalid request body: {err}"),
        )
    })
}

/// Query extractor configuration mapping errors to `invalid_request`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        decode_error(
            DecodeErrorCode::InvalidQuery,
            format!("invalid query string: {err}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CampusId, ErrorCode, ExecutionMode, UserRole};
    use rstest::rstest;

    #[rstest]
    fn parses_uuid_segments() {
        let id: CampusId = parse_id(
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            FieldName::new("id"),
        )
        .expect("valid uuid");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    fn rejects_non_uuid_segments_with_details() {
        let err = parse_id::<CampusId>("north", FieldName::new("id")).expect_err("invalid");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "id", "value": "north", "code": "invalid_uuid" }))
        );
    }

    #[rstest]
    fn parses_known_enum_values() {
        let role: UserRole = parse_enum("shop_admin", FieldName::new("role")).expect("known role");
        assert_eq!(role, UserRole::ShopAdmin);
        let absent: Option<ExecutionMode> =
            parse_optional_enum(None, FieldName::new("execution_mode")).expect("absent");
        assert!(absent.is_none());
    }

    #[rstest]
    #[case("robot")]
    #[case("MANUAL")]
    fn rejects_unknown_enum_values(#[case] raw: &str) {
        let err = parse_enum::<ExecutionMode>(raw, FieldName::new("execution_mode"))
            .expect_err("unknown mode");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "execution_mode", "value": raw, "code": "invalid_value" }))
        );
    }
}
