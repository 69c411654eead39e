//! Shops operating on a campus.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::{bounded_text, optional_text};
use super::{CampusId, ExecutionMode, FieldError, PaymentMode, ShopId};

/// A print shop. `(campus_id, name)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shop {
    pub id: ShopId,
    pub campus_id: CampusId,
    pub name: String,
    pub execution_mode: ExecutionMode,
    pub payment_mode: PaymentMode,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated input for opening a shop. New shops start active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShop {
    campus_id: CampusId,
    name: String,
    execution_mode: ExecutionMode,
    payment_mode: PaymentMode,
}

impl NewShop {
    pub fn try_new(
        campus_id: CampusId,
        name: impl Into<String>,
        execution_mode: ExecutionMode,
        payment_mode: PaymentMode,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            campus_id,
            name: bounded_text("name", name.into())?,
            execution_mode,
            payment_mode,
        })
    }

    pub fn campus_id(&self) -> CampusId {
        self.campus_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn into_shop(self, created_at: DateTime<Utc>) -> Shop {
        Shop {
            id: ShopId::random(),
            campus_id: self.campus_id,
            name: self.name,
            execution_mode: self.execution_mode,
            payment_mode: self.payment_mode,
            is_active: true,
            created_at,
        }
    }
}

/// Partial update of a shop.
///
/// # Examples
/// ```
/// use campus_print::domain::ShopPatch;
///
/// let patch = ShopPatch::default().with_is_active(false);
/// assert_eq!(patch.is_active(), Some(false));
/// assert!(patch.name().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopPatch {
    name: Option<String>,
    execution_mode: Option<ExecutionMode>,
    payment_mode: Option<PaymentMode>,
    is_active: Option<bool>,
}

impl ShopPatch {
    pub fn try_new(
        name: Option<String>,
        execution_mode: Option<ExecutionMode>,
        payment_mode: Option<PaymentMode>,
        is_active: Option<bool>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            name: optional_text("name", name)?,
            execution_mode,
            payment_mode,
            is_active,
        })
    }

    #[must_use]
    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn execution_mode(&self) -> Option<ExecutionMode> {
        self.execution_mode
    }

    pub fn payment_mode(&self) -> Option<PaymentMode> {
        self.payment_mode
    }

    pub fn is_active(&self) -> Option<bool> {
        self.is_active
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.execution_mode.is_none()
            && self.payment_mode.is_none()
            && self.is_active.is_none()
    }

    pub fn apply(&self, shop: &mut Shop) {
        if let Some(name) = &self.name {
            shop.name.clone_from(name);
        }
        if let Some(mode) = self.execution_mode {
            shop.execution_mode = mode;
        }
        if let Some(mode) = self.payment_mode {
            shop.payment_mode = mode;
        }
        if let Some(active) = self.is_active {
            shop.is_active = active;
        }
    }
}

/// Optional narrowing of a shop listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopFilter {
    pub campus_id: Option<CampusId>,
}

impl ShopFilter {
    pub fn matches(&self, shop: &Shop) -> bool {
        self.campus_id.is_none_or(|id| id == shop.campus_id)
    }
}
