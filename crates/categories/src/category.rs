use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use catalog_core::{DomainResult, Entity};

use crate::validator::category_validator;

catalog_core::uuid_identifier! {
    /// Category identifier.
    pub struct CategoryId;
}

/// Constructor input. Omitted fields get defaults: a fresh id, no
/// description, active, created now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryProps {
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Command: CreateCategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Entity: Category.
///
/// Always valid: construction and every mutation run the full rule table and
/// only commit state that passes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(props: CategoryProps) -> DomainResult<Self> {
        let category = Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        };
        category.validate()?;
        Ok(category)
    }

    /// Factory for new categories (id and timestamp are always generated).
    pub fn create(cmd: CreateCategory) -> DomainResult<Self> {
        Self::new(CategoryProps {
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
            ..Default::default()
        })
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        self.mutate(|c| c.name = name)
    }

    pub fn change_description(&mut self, description: Option<String>) -> DomainResult<()> {
        self.mutate(|c| c.description = description)
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        self.mutate(|c| c.is_active = true)
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        self.mutate(|c| c.is_active = false)
    }

    /// Run the full rule table against the current state.
    pub fn validate(&self) -> DomainResult<()> {
        category_validator().check(self)?;
        Ok(())
    }

    // Changes are applied to a copy; `self` is only replaced once the copy is valid.
    fn mutate(&mut self, change: impl FnOnce(&mut Self)) -> DomainResult<()> {
        let mut candidate = self.clone();
        change(&mut candidate);
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    const ENTITY_TYPE: &'static str = "Category";

    fn entity_id(&self) -> &Self::Id {
        &self.category_id
    }

    fn to_json(&self) -> JsonValue {
        json!({
            "category_id": self.category_id.to_string(),
            "name": self.name,
            "description": self.description,
            "is_active": self.is_active,
            "created_at": self.created_at,
        })
    }
}
