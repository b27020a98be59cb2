//! Request, response and data records for every Comprehend operation
//!
//! All records are plain data. Every member is an `Option`, absent members
//! are omitted from the JSON body, and member names follow the service's
//! PascalCase convention. Which members an operation requires is checked by
//! the operation catalog before a request leaves the client.

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declare a record: every field becomes `Option<T>` with a PascalCase JSON
/// name and a `derive_builder` builder.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Default,
            serde::Serialize,
            serde::Deserialize,
            derive_builder::Builder,
        )]
        #[serde(rename_all = "PascalCase")]
        #[builder(default, setter(into, strip_option), build_fn(error = "crate::Error"))]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Create a builder for this record.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
}

/// Declare a string enum that tolerates values newer than this client.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value this client does not know.
            Unknown(String),
        }

        impl $name {
            /// Every known wire value.
            pub const VALUES: &'static [&'static str] = &[$($wire),*];

            /// The wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)*
                    $name::Unknown(value) => value,
                }
            }

            /// Whether this is a value the client does not know.
            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => $name::$variant,)*
                    other => $name::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::from(value.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Ok($name::from(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok($name::from(value.as_str()))
            }
        }
    };
}

/// Implement [`Paginated`] and [`PageRequest`] for a list operation.
macro_rules! paginated {
    ($request:ty => $response:ty, $items:ident: $item:ty) => {
        impl $crate::types::PageRequest for $request {
            fn set_next_token(&mut self, token: Option<String>) {
                self.next_token = token;
            }
        }

        impl $crate::types::Paginated for $response {
            type Item = $item;

            fn next_token(&self) -> Option<&str> {
                self.next_token.as_deref().filter(|token| !token.is_empty())
            }

            fn items(&self) -> &[Self::Item] {
                self.$items.as_deref().unwrap_or_default()
            }
        }
    };
}

mod batch;
mod classifier;
mod common;
mod dataset;
mod detection;
mod endpoint;
mod flywheel;
mod jobs;
mod model;
mod policy;
mod recognizer;
mod tagging;

pub use batch::*;
pub use classifier::*;
pub use common::*;
pub use dataset::*;
pub use detection::*;
pub use endpoint::*;
pub use flywheel::*;
pub use jobs::*;
pub use model::*;
pub use policy::*;
pub use recognizer::*;
pub use tagging::*;

/// A point in time, carried on the wire as fractional epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// The current time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Build from epoch seconds. Out-of-range values clamp to the epoch.
    pub fn from_epoch_seconds(seconds: f64) -> Self {
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1e9).round().clamp(0.0, 999_999_999.0) as u32;
        Self(
            Utc.timestamp_opt(whole as i64, nanos)
                .single()
                .unwrap_or(DateTime::UNIX_EPOCH),
        )
    }

    /// Fractional epoch seconds.
    pub fn as_epoch_seconds(&self) -> f64 {
        self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) / 1e9
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.to_rfc3339().fmt(f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.timestamp_subsec_nanos() == 0 {
            serializer.serialize_i64(self.0.timestamp())
        } else {
            serializer.serialize_f64(self.as_epoch_seconds())
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        if !seconds.is_finite() {
            return Err(serde::de::Error::custom("timestamp must be a finite number"));
        }
        Ok(Self::from_epoch_seconds(seconds))
    }
}
