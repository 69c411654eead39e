//! Helper macro for repository port error enums.
//!
//! Every variant carries named fields, a display template, and the domain
//! [`Error`](crate::domain::Error) constructor it lowers to. The macro emits
//! the enum, snake_case constructors accepting `impl Into<_>` arguments, and
//! the `From` conversion into the domain error.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:literal as $lowering:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }

        impl From<$name> for $crate::domain::Error {
            fn from(value: $name) -> Self {
                let message = value.to_string();
                match value {
                    $($name::$variant { .. } => $crate::domain::Error::$lowering(message),)+
                }
            }
        }
    };
}

pub(crate) use define_port_error;
