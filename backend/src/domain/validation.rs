//! Field-level input validation shared by the entity constructors.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::json;

use super::Error;

/// Maximum length of the free-text columns (`varchar(255)`).
pub const TEXT_MAX: usize = 255;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldProblem {
    #[error("must not be empty")]
    Blank,
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
    #[error("must be a valid email address")]
    InvalidEmail,
}

impl FieldProblem {
    /// Stable code reported to clients in error details.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Blank => "empty",
            Self::TooLong { .. } => "too_long",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

/// A rejected input field.
///
/// # Examples
/// ```
/// use campus_print::domain::{FieldError, FieldProblem};
///
/// let err = FieldError::new("name", FieldProblem::Blank);
/// assert_eq!(err.to_string(), "name must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{field} {problem}")]
pub struct FieldError {
    field: &'static str,
    problem: FieldProblem,
}

impl FieldError {
    #[must_use]
    pub const fn new(field: &'static str, problem: FieldProblem) -> Self {
        Self { field, problem }
    }

    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    #[must_use]
    pub const fn problem(&self) -> FieldProblem {
        self.problem
    }
}

impl From<FieldError> for Error {
    fn from(value: FieldError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field,
            "code": value.problem.code(),
        }))
    }
}

/// Reject blank or over-long free text.
pub(crate) fn bounded_text(field: &'static str, value: String) -> Result<String, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, FieldProblem::Blank));
    }
    if value.chars().count() > TEXT_MAX {
        return Err(FieldError::new(field, FieldProblem::TooLong { max: TEXT_MAX }));
    }
    Ok(value)
}

/// Validate an optional patch field, leaving `None` untouched.
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, FieldError> {
    value.map(|text| bounded_text(field, text)).transpose()
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Check the loose `local@domain.tld` shape and column width.
pub(crate) fn email_address(field: &'static str, value: String) -> Result<String, FieldError> {
    let value = bounded_text(field, value)?;
    if !email_regex().is_match(&value) {
        return Err(FieldError::new(field, FieldProblem::InvalidEmail));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_text_is_rejected(#[case] raw: &str) {
        let err = bounded_text("name", raw.to_owned()).expect_err("blank rejected");
        assert_eq!(err.problem(), FieldProblem::Blank);
    }

    #[rstest]
    fn text_at_the_limit_is_accepted() {
        let raw = "x".repeat(TEXT_MAX);
        assert_eq!(bounded_text("name", raw.clone()), Ok(raw));
    }

    #[rstest]
    fn text_over_the_limit_is_rejected() {
        let err = bounded_text("location", "x".repeat(TEXT_MAX + 1)).expect_err("too long");
        assert_eq!(err.problem(), FieldProblem::TooLong { max: TEXT_MAX });
        assert_eq!(err.field(), "location");
    }

    #[rstest]
    #[case("ada@campus.edu", true)]
    #[case("a.b+c@mail.example.org", true)]
    #[case("no-at-sign.edu", false)]
    #[case("ada@localhost", false)]
    #[case("ada lovelace@campus.edu", false)]
    fn email_shape(#[case] raw: &str, #[case] valid: bool) {
        assert_eq!(email_address("email", raw.to_owned()).is_ok(), valid);
    }

    #[rstest]
    fn converts_into_invalid_request_with_details() {
        let error: Error = FieldError::new("email", FieldProblem::InvalidEmail).into();
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "email", "code": "invalid_email" }))
        );
    }

    #[rstest]
    fn absent_patch_field_stays_absent() {
        assert_eq!(optional_text("name", None), Ok(None));
    }
}
