//! Strongly-typed value objects used by reference entities.
//!
//! Identifiers decoded from the query service are checked to be positive, and
//! page numbers are always 1-based, so the view layer can treat them as
//! trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ToolId, "Unique identifier for a tool.");
id_newtype!(SupplierId, "Unique identifier for a supplier.");
id_newtype!(DefectTypeId, "Unique identifier for a defect type.");
id_newtype!(WorkplaceId, "Unique identifier for a workplace.");

/// 1-based page number of a paged listing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "usize", into = "usize")]
pub struct PageNumber(usize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number, treating `0` as the first page.
    pub const fn new(value: usize) -> Self {
        if value == 0 { Self::FIRST } else { Self(value) }
    }

    /// Resolves an optional request parameter, defaulting to the first page.
    pub fn from_param(value: Option<usize>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PageNumber {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<PageNumber> for usize {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}

/// Display name of a reference entry, trimmed and never blank.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceName(String);

impl ReferenceName {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Borrow the name as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ReferenceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ReferenceName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ReferenceName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReferenceName> for String {
    fn from(value: ReferenceName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(ToolId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(SupplierId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(WorkplaceId::new(7).map(WorkplaceId::get), Ok(7));
    }

    #[test]
    fn ids_reject_non_positive_values_when_decoding() {
        let result = serde_json::from_str::<DefectTypeId>("0");
        assert!(result.is_err());

        let id: DefectTypeId = serde_json::from_str("12").expect("valid id");
        assert_eq!(id.get(), 12);
    }

    #[test]
    fn omitted_page_defaults_to_first() {
        assert_eq!(PageNumber::from_param(None), PageNumber::FIRST);
        assert_eq!(PageNumber::from_param(None).get(), 1);
    }

    #[test]
    fn supplied_page_is_kept() {
        for page in [1, 2, 3, 250] {
            assert_eq!(PageNumber::from_param(Some(page)).get(), page);
        }
    }

    #[test]
    fn zero_page_is_first_page() {
        assert_eq!(PageNumber::from_param(Some(0)), PageNumber::FIRST);
        assert_eq!(PageNumber::from(0).get(), 1);
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            ReferenceName::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
        assert!(serde_json::from_str::<ReferenceName>("\"\"").is_err());
    }

    #[test]
    fn names_are_trimmed() {
        let name = ReferenceName::new(" Drill ").expect("valid name");
        assert_eq!(name.as_str(), "Drill");
    }
}
