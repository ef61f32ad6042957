//! Strongly-typed ID wrappers for all entity types
//!
//! The backend issues integer primary keys. Wrapping them in newtypes keeps an
//! event id from being passed where a guest id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw backend id
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the raw backend id
            pub const fn get(&self) -> i64 {
                self.0
            }

            /// Parse an ID from either `42` or the prefixed display form
            pub fn parse(s: &str) -> Result<Self, ParseIntError> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(EventId, "evt-");
define_id!(BudgetItemId, "bud-");
define_id!(GuestId, "gst-");
define_id!(VendorId, "ven-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(EventId::new(42).to_string(), "evt-42");
        assert_eq!(GuestId::new(7).to_string(), "gst-7");
    }

    #[test]
    fn test_id_parse_accepts_both_forms() {
        assert_eq!(EventId::parse("42").unwrap(), EventId::new(42));
        assert_eq!(EventId::parse("evt-42").unwrap(), EventId::new(42));
        assert_eq!(" 9 ".parse::<VendorId>().unwrap(), VendorId::new(9));
        assert!(EventId::parse("evt-abc").is_err());
    }

    #[test]
    fn test_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&BudgetItemId::new(15)).unwrap();
        assert_eq!(json, "15");

        let id: BudgetItemId = serde_json::from_str("15").unwrap();
        assert_eq!(id.get(), 15);
    }
}
