//! Campus records and their validated inputs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::{bounded_text, optional_text};
use super::{CampusId, FieldError};

/// A campus hosting shops and users. Names are unique across campuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Campus {
    pub id: CampusId,
    pub name: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a campus.
///
/// # Examples
/// ```
/// use campus_print::domain::NewCampus;
///
/// let campus = NewCampus::try_new("North", "Block A").unwrap();
/// assert_eq!(campus.name(), "North");
/// assert!(NewCampus::try_new(" ", "Block A").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCampus {
    name: String,
    location: String,
}

impl NewCampus {
    pub fn try_new(
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            name: bounded_text("name", name.into())?,
            location: bounded_text("location", location.into())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Materialise the record with a fresh id and creation time.
    #[must_use]
    pub fn into_campus(self, created_at: DateTime<Utc>) -> Campus {
        Campus {
            id: CampusId::random(),
            name: self.name,
            location: self.location,
            created_at,
        }
    }
}

/// Partial update of a campus; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampusPatch {
    name: Option<String>,
    location: Option<String>,
}

impl CampusPatch {
    pub fn try_new(name: Option<String>, location: Option<String>) -> Result<Self, FieldError> {
        Ok(Self {
            name: optional_text("name", name)?,
            location: optional_text("location", location)?,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// `true` when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }

    /// Apply the supplied fields to `campus`.
    pub fn apply(&self, campus: &mut Campus) {
        if let Some(name) = &self.name {
            campus.name.clone_from(name);
        }
        if let Some(location) = &self.location {
            campus.location.clone_from(location);
        }
    }
}
