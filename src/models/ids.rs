//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are caller-visible strings (default categories use fixed slugs,
//! generated ids are UUIDs). The newtype wrappers prevent accidentally
//! mixing up ids from different entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new random ID
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the underlying string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(TransactionId);
define_id!(CategoryId);
define_id!(BudgetId);
