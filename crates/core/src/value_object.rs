//! Value object trait: equality by value, not identity.
//!
//! Value objects carry no identity of their own. They are defined entirely by
//! their attribute values, so two instances holding the same values are equal.

/// Marker trait for value objects, with a null-safe equality helper.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: compared field by field (`EntityId`, a price, a date range)
/// - **Entity**: compared by identifier (`Category` with a `CategoryId`)
///
/// ## Immutability
///
/// Value objects expose no mutators. To "change" one, build a new instance.
/// Identifiers lean on this: once an `EntityId` exists it stays valid.
///
/// ## Equality
///
/// Structural equality comes from `PartialEq` (usually derived, which compares
/// every field in declaration order). [`ValueObject::equals`] adds the
/// "absent operand" case: comparing against `None` is `false`, never a panic.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let a = Money { amount: 100, currency: "USD".to_string() };
/// let b = Money { amount: 100, currency: "USD".to_string() };
/// assert!(a.equals(Some(&b)));
/// assert!(!a.equals(None));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Structural equality against an optional operand.
    fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct StringValueObject(String);

    impl ValueObject for StringValueObject {}

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct ComplexValueObject {
        prop1: String,
        prop2: i64,
    }

    impl ValueObject for ComplexValueObject {}

    #[test]
    fn equal_values_are_equal() {
        let a = StringValueObject("test".to_string());
        let b = StringValueObject("test".to_string());
        assert!(a.equals(Some(&b)));

        let a = ComplexValueObject {
            prop1: "test".to_string(),
            prop2: 123,
        };
        let b = a.clone();
        assert!(a.equals(Some(&b)));
    }

    #[test]
    fn different_values_are_not_equal() {
        let a = StringValueObject("test".to_string());
        let b = StringValueObject("different value".to_string());
        assert!(!a.equals(Some(&b)));

        let a = ComplexValueObject {
            prop1: "test".to_string(),
            prop2: 123,
        };
        let b = ComplexValueObject {
            prop1: "test".to_string(),
            prop2: 456,
        };
        assert!(!a.equals(Some(&b)));
    }

    #[test]
    fn absent_operand_is_never_equal() {
        let a = StringValueObject("test".to_string());
        assert!(!a.equals(None));

        let c = ComplexValueObject {
            prop1: "test".to_string(),
            prop2: 123,
        };
        assert!(!c.equals(None));
    }
}
