//! Campus users.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::{bounded_text, email_address};
use super::{CampusId, FieldError, UserId, UserRole};

/// A student or shop administrator registered on a campus.
///
/// ## Invariants
/// - `email` is unique across all users; only storage enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub campus_id: CampusId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Validated registration input.
///
/// # Examples
/// ```
/// use campus_print::domain::{CampusId, NewUser, UserRole};
///
/// let campus = CampusId::random();
/// assert!(NewUser::try_new(campus, "ada@campus.edu", "Ada", UserRole::Student).is_ok());
/// assert!(NewUser::try_new(campus, "not-an-email", "Ada", UserRole::Student).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    campus_id: CampusId,
    email: String,
    name: String,
    role: UserRole,
}

impl NewUser {
    pub fn try_new(
        campus_id: CampusId,
        email: impl Into<String>,
        name: impl Into<String>,
        role: UserRole,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            campus_id,
            email: email_address("email", email.into())?,
            name: bounded_text("name", name.into())?,
            role,
        })
    }

    pub fn campus_id(&self) -> CampusId {
        self.campus_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn into_user(self, created_at: DateTime<Utc>) -> User {
        User {
            id: UserId::random(),
            campus_id: self.campus_id,
            email: self.email,
            name: self.name,
            role: self.role,
            created_at,
        }
    }
}
