//! Entity trait: identity + continuity across state changes.

use crate::value_object::ValueObject;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: ValueObject + Eq + core::hash::Hash + core::fmt::Display;

    /// Concrete type name, as reported in `NotFound` errors.
    const ENTITY_TYPE: &'static str;

    /// Returns the entity identifier.
    fn entity_id(&self) -> &Self::Id;

    /// Flat JSON projection of the public attributes (id included).
    fn to_json(&self) -> serde_json::Value;
}
