//! Category Store
//!
//! Runtime rule table for one directory: the builtin set merged with the
//! overrides from `config.toml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::builtin::{
    BuiltinCategorySet, CategoryDef, CERTIFICATION_CATEGORIES, DEFAULT_CATEGORY_PRIORITY,
    PROJECT_CATEGORIES,
};

/// Ordered category definitions with a default bucket
#[derive(Debug, Clone)]
pub struct CategoryStore {
    set_name: String,
    default: String,
    categories: Vec<CategoryDef>,
}

impl CategoryStore {
    pub fn from_builtin(set: &BuiltinCategorySet) -> Self {
        Self {
            set_name: set.name.to_string(),
            default: set.default.to_string(),
            categories: set.categories.iter().map(CategoryDef::from).collect(),
        }
    }

    /// Builtin project buckets
    pub fn projects() -> Self {
        Self::from_builtin(&PROJECT_CATEGORIES)
    }

    /// Builtin certification buckets
    pub fn certifications() -> Self {
        Self::from_builtin(&CERTIFICATION_CATEGORIES)
    }

    /// Apply config overrides
    ///
    /// - same name: replaced in place (display position kept)
    /// - new name: appended, in name order
    /// - `default`: replaces the fallback bucket
    pub fn with_config(mut self, config: &CategoriesConfig) -> Self {
        for (name, entry) in &config.categories {
            let def = CategoryDef {
                name: name.clone(),
                description: entry.description.clone(),
                patterns: entry.patterns.clone(),
                priority: entry.priority.unwrap_or(DEFAULT_CATEGORY_PRIORITY),
            };
            match self.categories.iter_mut().find(|c| &c.name == name) {
                Some(existing) => *existing = def,
                None => self.categories.push(def),
            }
        }
        if let Some(default) = &config.default {
            self.default = default.clone();
        }
        self
    }

    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    pub fn default_name(&self) -> &str {
        &self.default
    }

    pub fn get(&self, name: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Definitions in evaluation order (priority descending, stable)
    pub fn by_priority(&self) -> Vec<&CategoryDef> {
        let mut categories: Vec<_> = self.categories.iter().collect();
        categories.sort_by(|a, b| b.priority.cmp(&a.priority));
        categories
    }

    /// Definitions in display order
    pub fn all(&self) -> &[CategoryDef] {
        &self.categories
    }

    /// Category names in display order
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

/// One `[categories.<directory>]` section of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesConfig {
    /// Replacement fallback bucket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(flatten)]
    pub categories: BTreeMap<String, CategoryConfigEntry>,
}

impl CategoriesConfig {
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.categories.is_empty()
    }
}

/// A single bucket override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfigEntry {
    #[serde(default)]
    pub description: String,
    pub patterns: Vec<String>,
    #[serde(default)]
    pub priority: Option<i32>,
}
