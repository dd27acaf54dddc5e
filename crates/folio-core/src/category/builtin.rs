//! Builtin Category Definitions
//!
//! Sub-category rule tables for the two directories that group their items:
//! `projects` and `certifications`. Declaration order is display order;
//! `priority` decides evaluation order (higher first, ties in declaration order).

use serde::{Deserialize, Serialize};

/// Default priority
pub const DEFAULT_CATEGORY_PRIORITY: i32 = 100;

/// Project sub-categories
pub const PROJECT_CATEGORIES: BuiltinCategorySet = BuiltinCategorySet {
    name: "projects",
    default: "backend-cloud",
    categories: &[
        BuiltinCategory {
            name: "backend-cloud",
            description: "Backend services, APIs and cloud-native systems on AWS.",
            patterns: &[
                "*aws*",
                "*lambda*",
                "*serverless*",
                "*cloud*",
                "*glue*",
                "*eventbridge*",
                "*sns*",
                "*node*",
                "*express*",
                "*api*",
                "*backend*",
                "*mongo*",
            ],
            priority: DEFAULT_CATEGORY_PRIORITY,
        },
        BuiltinCategory {
            name: "machine-learning",
            description: "Model training, data science and distributed data processing.",
            patterns: &[
                "*machine learning*",
                "*sklearn*",
                "*scikit*",
                "*random forest*",
                "*gradient boosting*",
                "*linear regression*",
                "*pandas*",
                "*numpy*",
                "*spark*",
                "*pyspark*",
                "*als*",
            ],
            priority: 200,
        },
        BuiltinCategory {
            name: "frontend",
            description: "Web front ends. Assigned through the project's explicit category.",
            patterns: &[],
            priority: 50,
        },
        BuiltinCategory {
            name: "console",
            description: "Console programs.",
            patterns: &["*hospital management*"],
            priority: 400,
        },
        BuiltinCategory {
            name: "mobile",
            description: "Flutter and Firebase mobile applications.",
            patterns: &["*flutter*", "*dart*", "*firebase*", "*riverpod*", "*mobile*"],
            priority: 300,
        },
    ],
};

/// Certification sub-categories
pub const CERTIFICATION_CATEGORIES: BuiltinCategorySet = BuiltinCategorySet {
    name: "certifications",
    default: "software-engineering",
    categories: &[
        BuiltinCategory {
            name: "cloud-computing",
            description: "AWS and general cloud credentials.",
            patterns: &["*aws*", "*cloud*"],
            priority: 200,
        },
        BuiltinCategory {
            name: "software-engineering",
            description: "Programming, web and security credentials. Default bucket.",
            patterns: &[],
            priority: DEFAULT_CATEGORY_PRIORITY,
        },
        BuiltinCategory {
            name: "machine-learning",
            description: "Machine learning, data science and generative AI.",
            patterns: &[
                "*machine learning*",
                "*generative ai*",
                "*pandas*",
                "*kaggle*",
                "*databricks*",
            ],
            priority: 150,
        },
        BuiltinCategory {
            name: "language-academics",
            description: "Language proficiency and academic credential evaluations.",
            patterns: &["*english*", "*wes*", "*education*", "*academic*"],
            priority: 300,
        },
    ],
};

/// A named, ordered rule table with a fallback bucket
#[derive(Debug, Clone, Copy)]
pub struct BuiltinCategorySet {
    /// Directory the set belongs to
    pub name: &'static str,
    /// Bucket for items no rule matches
    pub default: &'static str,
    pub categories: &'static [BuiltinCategory],
}

/// Static definition of one bucket
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// Unique key, also the pseudo directory name
    pub name: &'static str,
    pub description: &'static str,
    /// Glob patterns matched against lowercased item text
    pub patterns: &'static [&'static str],
    /// Higher is evaluated first
    pub priority: i32,
}

/// Runtime category definition
///
/// Built from a builtin entry or from the `[categories]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    pub description: String,
    pub patterns: Vec<String>,
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    DEFAULT_CATEGORY_PRIORITY
}

impl From<&BuiltinCategory> for CategoryDef {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            name: builtin.name.to_string(),
            description: builtin.description.to_string(),
            patterns: builtin.patterns.iter().map(|s| s.to_string()).collect(),
            priority: builtin.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets_contain_their_default() {
        for set in [PROJECT_CATEGORIES, CERTIFICATION_CATEGORIES] {
            assert!(
                set.categories.iter().any(|c| c.name == set.default),
                "{} lacks default bucket {}",
                set.name,
                set.default
            );
        }
    }

    #[test]
    fn test_builtin_names_unique() {
        for set in [PROJECT_CATEGORIES, CERTIFICATION_CATEGORIES] {
            let mut names: Vec<_> = set.categories.iter().map(|c| c.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), set.categories.len());
        }
    }

    #[test]
    fn test_category_def_from_builtin() {
        let builtin = &PROJECT_CATEGORIES.categories[0];
        let def = CategoryDef::from(builtin);
        assert_eq!(def.name, "backend-cloud");
        assert_eq!(def.priority, DEFAULT_CATEGORY_PRIORITY);
        assert!(def.patterns.contains(&"*aws*".to_string()));
    }
}
