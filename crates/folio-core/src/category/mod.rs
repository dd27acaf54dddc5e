//! # Category Module
//!
//! Splits the `projects` and `certifications` directories into sub-directories
//! by classifying each item's free text against an ordered rule list.
//!
//! - `builtin`: builtin rule tables
//! - `store`: runtime rule table (builtin + config overrides)
//! - `classifier`: the classifier
//!
//! ```rust
//! use folio_core::category::CategoryClassifier;
//!
//! let classifier = CategoryClassifier::projects().unwrap();
//! assert_eq!(classifier.classify("Quiz App Flutter, Dart"), "mobile");
//! assert_eq!(classifier.classify("Something else entirely"), "backend-cloud");
//! ```

mod builtin;
mod classifier;
mod store;

pub use builtin::{
    BuiltinCategory, BuiltinCategorySet, CategoryDef, CERTIFICATION_CATEGORIES,
    DEFAULT_CATEGORY_PRIORITY, PROJECT_CATEGORIES,
};
pub use classifier::{CategoryClassifier, Classification};
pub use store::{CategoriesConfig, CategoryConfigEntry, CategoryStore};
