//! Category rule table.

use catalog_core::{RuleSet, RuleValidator};

use crate::category::Category;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

pub type CategoryValidator = RuleValidator<Category>;

/// `name` is required and 3..=255 characters. `description` and `is_active`
/// are optional and typed, so they carry no rules.
pub fn category_rules() -> RuleSet<Category> {
    RuleSet::new()
        .not_empty("name", Category::name)
        .min_length("name", Category::name, NAME_MIN_LENGTH)
        .max_length("name", Category::name, NAME_MAX_LENGTH)
}

pub fn category_validator() -> CategoryValidator {
    RuleValidator::new(category_rules())
}
