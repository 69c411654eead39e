//! Typed identifiers for the print-shop entities.
//!
//! Each identifier wraps a UUID so a shop id can never be handed to a
//! function expecting a campus id. Identifiers are serialised as bare UUID
//! strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Campus`](super::Campus).
    CampusId
);
entity_id!(
    /// Identifier of a [`Shop`](super::Shop).
    ShopId
);
entity_id!(
    /// Identifier of a [`ShopPricing`](super::ShopPricing) row.
    PricingId
);
entity_id!(
    /// Identifier of a [`User`](super::User).
    UserId
);
entity_id!(
    /// Identifier of a [`PrintJob`](super::PrintJob).
    JobId
);
entity_id!(
    /// Identifier of a [`Payment`](super::Payment).
    PaymentId
);
