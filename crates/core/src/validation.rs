//! Field-level validation: explicit rule tables and aggregated errors.
//!
//! A [`RuleSet`] is an ordered list of `(field, check, message)` rules. Every
//! rule is evaluated (no short-circuiting), and the failing messages are
//! collected per field into [`FieldErrors`], in declaration order. Entities run
//! their rule set on every constructing or mutating call and surface failures
//! as a [`ValidationError`].

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Field name → ordered violation messages.
///
/// Fields keep the order in which their first violation was recorded, which
/// for a [`RuleSet`] is the rule declaration order. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to `field`, creating the entry on first use.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field.to_string(), vec![message])),
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// True if `field` carries `message` among its violations.
    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.get(field)
            .is_some_and(|messages| messages.iter().any(|m| m == message))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (idx, (field, messages)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

/// Aggregated validation failure.
///
/// Holds one [`FieldErrors`] per invalid object: a single entry for an entity
/// check, several for bulk validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[error("Entity Validation Error: {}", describe(.errors))]
#[serde(transparent)]
pub struct ValidationError {
    errors: Vec<FieldErrors>,
}

fn describe(errors: &[FieldErrors]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

impl ValidationError {
    pub fn new(errors: FieldErrors) -> Self {
        Self {
            errors: vec![errors],
        }
    }

    pub fn from_entries(errors: Vec<FieldErrors>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldErrors] {
        &self.errors
    }

    /// Number of invalid fields across all entries.
    pub fn count(&self) -> usize {
        self.errors.iter().map(FieldErrors::len).sum()
    }

    /// True if any entry reports `message` for `field`.
    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.errors.iter().any(|e| e.contains(field, message))
    }
}

type Check<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A single `(field, check, message)` rule. The check returns `true` when valid.
pub struct FieldRule<T> {
    field: &'static str,
    check: Check<T>,
    message: String,
}

impl<T> FieldRule<T> {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T> core::fmt::Debug for FieldRule<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Ordered rule table for `T`.
#[derive(Debug)]
pub struct RuleSet<T> {
    rules: Vec<FieldRule<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T: 'static> RuleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom rule.
    pub fn rule(
        mut self,
        field: &'static str,
        check: impl Fn(&T) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.rules.push(FieldRule {
            field,
            check: Box::new(check),
            message: message.into(),
        });
        self
    }

    pub fn not_empty(self, field: &'static str, get: fn(&T) -> &str) -> Self {
        self.rule(
            field,
            move |data| !get(data).is_empty(),
            format!("{field} should not be empty"),
        )
    }

    /// Length is counted in characters, not bytes.
    pub fn min_length(self, field: &'static str, get: fn(&T) -> &str, min: usize) -> Self {
        self.rule(
            field,
            move |data| get(data).chars().count() >= min,
            format!("{field} must be longer than or equal to {min} characters"),
        )
    }

    pub fn max_length(self, field: &'static str, get: fn(&T) -> &str, max: usize) -> Self {
        self.rule(
            field,
            move |data| get(data).chars().count() <= max,
            format!("{field} must be shorter than or equal to {max} characters"),
        )
    }

    /// Like [`RuleSet::max_length`], but `None` always passes.
    pub fn optional_max_length(
        self,
        field: &'static str,
        get: fn(&T) -> Option<&str>,
        max: usize,
    ) -> Self {
        self.rule(
            field,
            move |data| get(data).is_none_or(|value| value.chars().count() <= max),
            format!("{field} must be shorter than or equal to {max} characters"),
        )
    }
}

impl<T> RuleSet<T> {
    /// Evaluate every rule against `data`.
    pub fn evaluate(&self, data: &T) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for rule in &self.rules {
            if !(rule.check)(data) {
                errors.add(rule.field, rule.message.clone());
            }
        }
        errors
    }

    pub fn rules(&self) -> &[FieldRule<T>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Validator contract: check a candidate and keep the last computed errors.
pub trait ValidatorFields<T> {
    /// Returns `true` when `data` is fully valid.
    fn validate(&mut self, data: &T) -> bool;

    /// Errors from the last `validate` call (`None` before the first call).
    fn errors(&self) -> Option<&FieldErrors>;
}

/// Generic rule-table validator.
#[derive(Debug)]
pub struct RuleValidator<T> {
    rules: RuleSet<T>,
    errors: Option<FieldErrors>,
}

impl<T> RuleValidator<T> {
    pub fn new(rules: RuleSet<T>) -> Self {
        Self {
            rules,
            errors: None,
        }
    }

    /// Validate and convert failure into a [`ValidationError`].
    pub fn check(&mut self, data: &T) -> Result<(), ValidationError> {
        if self.validate(data) {
            return Ok(());
        }
        Err(ValidationError::new(self.errors.clone().unwrap_or_default()))
    }
}

impl<T> ValidatorFields<T> for RuleValidator<T> {
    fn validate(&mut self, data: &T) -> bool {
        let errors = self.rules.evaluate(data);
        let valid = errors.is_empty();
        if !valid {
            tracing::debug!(invalid_fields = errors.len(), "validation failed");
        }
        self.errors = Some(errors);
        valid
    }

    fn errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }
}

/// Validate every item, aggregating one [`FieldErrors`] per invalid item.
pub fn validate_all<T, V>(validator: &mut V, items: &[T]) -> Result<(), ValidationError>
where
    V: ValidatorFields<T>,
{
    let mut invalid = Vec::new();
    for item in items {
        if !validator.validate(item) {
            invalid.push(validator.errors().cloned().unwrap_or_default());
        }
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::from_entries(invalid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Profile {
        name: String,
        bio: Option<String>,
        age: i32,
    }

    impl Profile {
        fn name(&self) -> &str {
            &self.name
        }

        fn bio(&self) -> Option<&str> {
            self.bio.as_deref()
        }
    }

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            bio: None,
            age: 30,
        }
    }

    fn rules() -> RuleSet<Profile> {
        RuleSet::new()
            .not_empty("name", Profile::name)
            .min_length("name", Profile::name, 3)
            .max_length("name", Profile::name, 10)
            .optional_max_length("bio", Profile::bio, 5)
            .rule("age", |p: &Profile| p.age >= 0, "age must not be negative")
    }

    #[test]
    fn valid_data_yields_no_errors() {
        let mut validator = RuleValidator::new(rules());
        assert!(validator.validate(&profile("Alice")));
        assert!(validator.errors().unwrap().is_empty());
    }

    #[test]
    fn errors_are_none_before_first_validation() {
        let validator = RuleValidator::new(rules());
        assert!(validator.errors().is_none());
    }

    #[test]
    fn all_failing_rules_for_a_field_are_kept_in_order() {
        let mut validator = RuleValidator::new(rules());
        assert!(!validator.validate(&profile("")));

        let errors = validator.errors().unwrap();
        assert_eq!(
            errors.get("name").unwrap(),
            [
                "name should not be empty",
                "name must be longer than or equal to 3 characters",
            ]
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn fields_follow_declaration_order() {
        let mut validator = RuleValidator::new(rules());
        let data = Profile {
            name: "a-very-long-name".to_string(),
            bio: Some("too long bio".to_string()),
            age: -1,
        };
        assert!(!validator.validate(&data));

        let errors = validator.errors().unwrap();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["name", "bio", "age"]);
        assert!(errors.contains("bio", "bio must be shorter than or equal to 5 characters"));
        assert!(errors.contains("age", "age must not be negative"));
    }

    #[test]
    fn optional_rule_skips_absent_values() {
        let mut validator = RuleValidator::new(rules());
        let data = Profile {
            bio: None,
            ..profile("Alice")
        };
        assert!(validator.validate(&data));
    }

    #[test]
    fn length_counts_characters() {
        let mut validator = RuleValidator::new(rules());
        // 3 characters, 6 bytes.
        assert!(validator.validate(&profile("ééé")));
    }

    #[test]
    fn last_errors_are_replaced_on_each_call() {
        let mut validator = RuleValidator::new(rules());
        assert!(!validator.validate(&profile("")));
        assert!(validator.validate(&profile("Alice")));
        assert!(validator.errors().unwrap().is_empty());
    }

    #[test]
    fn check_wraps_errors() {
        let mut validator = RuleValidator::new(rules());
        let err = validator.check(&profile("ab")).unwrap_err();
        assert_eq!(err.count(), 1);
        assert!(err.contains("name", "name must be longer than or equal to 3 characters"));
        assert_eq!(
            err.to_string(),
            "Entity Validation Error: name: name must be longer than or equal to 3 characters"
        );
    }

    #[test]
    fn validate_all_aggregates_one_entry_per_invalid_item() {
        let mut validator = RuleValidator::new(rules());
        let items = [profile("Alice"), profile(""), profile("Bob"), profile("ab")];

        let err = validate_all(&mut validator, &items).unwrap_err();
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.count(), 2);
        assert!(err.errors()[0].contains("name", "name should not be empty"));
        assert!(err.errors()[1].contains("name", "name must be longer than or equal to 3 characters"));
    }

    #[test]
    fn validate_all_passes_for_valid_items() {
        let mut validator = RuleValidator::new(rules());
        assert!(validate_all(&mut validator, &[profile("Alice"), profile("Bob")]).is_ok());
    }

    #[test]
    fn rule_set_exposes_declared_rules() {
        let rules = rules();
        assert_eq!(rules.len(), 5);
        assert!(!rules.is_empty());
        assert!(RuleSet::<Profile>::new().is_empty());

        let declared: Vec<_> = rules.rules().iter().map(FieldRule::field).collect();
        assert_eq!(declared, ["name", "name", "name", "bio", "age"]);
        assert_eq!(rules.rules()[0].message(), "name should not be empty");
        assert_eq!(rules.rules()[4].message(), "age must not be negative");
    }

    #[test]
    fn field_errors_iterate_in_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("bio", "second");
        errors.add("name", "third");

        let entries: Vec<_> = errors.iter().collect();
        assert_eq!(
            entries,
            [
                ("name", &["first".to_string(), "third".to_string()][..]),
                ("bio", &["second".to_string()][..]),
            ]
        );
        assert_eq!(errors.to_string(), "name: first, third; bio: second");
    }

    #[test]
    fn field_errors_serialize_as_object() {
        let mut errors = FieldErrors::new();
        errors.add("name", "name should not be empty");
        errors.add("name", "name must be longer than or equal to 3 characters");
        errors.add("bio", "bio must be shorter than or equal to 5 characters");

        let json = serde_json::to_value(ValidationError::new(errors)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "name": [
                    "name should not be empty",
                    "name must be longer than or equal to 3 characters"
                ],
                "bio": ["bio must be shorter than or equal to 5 characters"]
            }])
        );
    }
}
