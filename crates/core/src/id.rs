//! Strongly-typed identifiers used across the domain.

/// Declare a UUID-backed identifier type.
///
/// The generated type is a [`ValueObject`](crate::ValueObject) that can only
/// hold a valid UUID: parsing accepts the canonical hyphenated form
/// (`8-4-4-4-12` hex digits) and nothing else, and fresh ids are random (v4).
///
/// ```ignore
/// catalog_core::uuid_identifier! {
///     /// Identifier of a category.
///     pub struct CategoryId;
/// }
/// ```
#[macro_export]
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $vis:vis struct $t:ident;) => {
        $(#[$meta])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            $crate::__private::serde::Serialize, $crate::__private::serde::Deserialize,
        )]
        #[serde(transparent, crate = "catalog_core::__private::serde")]
        $vis struct $t($crate::__private::uuid::Uuid);

        impl $t {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self($crate::__private::uuid::Uuid::new_v4())
            }

            /// Parse a canonical hyphenated UUID string.
            pub fn parse(input: &str) -> $crate::DomainResult<Self> {
                $crate::id::parse_canonical(input).map(Self)
            }

            pub fn from_uuid(uuid: $crate::__private::uuid::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &$crate::__private::uuid::Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$crate::__private::uuid::Uuid> for $t {
            fn from(value: $crate::__private::uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $crate::__private::uuid::Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }
    };
}

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Length of the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
const CANONICAL_LEN: usize = 36;

/// Parse a UUID, accepting only the canonical hyphenated representation.
///
/// `Uuid::try_parse` also accepts the simple, braced and URN forms; those are
/// rejected here by length before parsing.
pub fn parse_canonical(input: &str) -> DomainResult<Uuid> {
    if input.len() != CANONICAL_LEN {
        return Err(DomainError::invalid_id(input));
    }
    Uuid::try_parse(input).map_err(|_| DomainError::invalid_id(input))
}

uuid_identifier! {
    /// Generic entity identifier, for entities that don't need their own id type.
    pub struct EntityId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueObject;

    const VALID: &str = "123e4567-e89b-12d3-a456-426614174000";

    #[test]
    fn rejects_malformed_input() {
        let err = EntityId::parse("invalid-uuid").unwrap_err();
        assert_eq!(err, DomainError::InvalidIdentifierFormat("invalid-uuid".to_string()));
    }

    #[test]
    fn rejects_non_canonical_forms() {
        for input in [
            "",
            "123e4567e89b12d3a456426614174000",
            "{123e4567-e89b-12d3-a456-426614174000}",
            "urn:uuid:123e4567-e89b-12d3-a456-426614174000",
            "123e4567-e89b-12d3-a456-42661417400g",
            "123e4567-e89b-12d3-a456_426614174000",
        ] {
            assert!(
                matches!(EntityId::parse(input), Err(DomainError::InvalidIdentifierFormat(_))),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn accepts_canonical_input_and_round_trips() {
        let id = EntityId::parse(VALID).unwrap();
        assert_eq!(id.to_string(), VALID);

        let upper: EntityId = VALID.to_uppercase().parse().unwrap();
        assert!(upper.equals(Some(&id)));
    }

    #[test]
    fn generated_ids_are_well_formed_and_distinct() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
        assert_eq!(EntityId::parse(&a.to_string()).unwrap(), a);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntityId::parse(VALID).unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!(VALID));
    }
}
