//! Closed vocabularies stored as text columns.
//!
//! Each enum serialises to the same string it is stored under, so the JSON
//! contract and the database agree on spelling.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error returned when a stored or submitted string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {input}")]
pub struct ParseEnumError {
    /// Which vocabulary was being parsed.
    pub kind: &'static str,
    /// The unrecognised input value.
    pub input: String,
}

macro_rules! stored_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Database and wire representation.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        input: other.to_owned(),
                    }),
                }
            }
        }
    };
}

stored_enum! {
    /// How much staff involvement a shop needs to run a job.
    ExecutionMode as "execution mode" {
        Manual => "manual",
        Assisted => "assisted",
        Auto => "auto",
    }
}

stored_enum! {
    /// Where a shop collects payment.
    PaymentMode as "payment mode" {
        Counter => "counter",
        Prepaid => "prepaid",
        Both => "both",
    }
}

stored_enum! {
    /// Supported paper sizes.
    PaperSize as "paper size" {
        A4 => "A4",
        A3 => "A3",
    }
}

stored_enum! {
    ColorMode as "color mode" {
        /// Black and white.
        Bw => "bw",
        Color => "color",
    }
}

stored_enum! {
    UserRole as "user role" {
        Student => "student",
        ShopAdmin => "shop_admin",
    }
}

stored_enum! {
    /// Lifecycle label of a print job. Transitions are not enforced.
    PrintStatus as "print status" {
        Uploaded => "uploaded",
        PaymentPending => "payment_pending",
        PaymentConfirmed => "payment_confirmed",
        ReadyToPrint => "ready_to_print",
        Printing => "printing",
        Printed => "printed",
        Collected => "collected",
        Cancelled => "cancelled",
    }
}
