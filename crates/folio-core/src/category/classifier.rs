//! Category Classifier
//!
//! Buckets free text by the first matching rule of a [`CategoryStore`].

use glob::Pattern;

use crate::error::{FolioError, Result};

use super::builtin::CategoryDef;
use super::store::CategoryStore;

/// Result of classifying one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Position of the item in the classified input
    pub index: usize,
    /// Bucket name
    pub category: String,
    /// Pattern that decided the bucket; `None` for explicit or default placement
    pub matched: Option<String>,
}

/// Rule-based classifier
///
/// Every text lands in exactly one bucket: the first rule (by priority) with a
/// matching pattern wins, otherwise the store's default bucket.
pub struct CategoryClassifier {
    store: CategoryStore,
    compiled: Vec<(String, Vec<Pattern>)>,
}

impl CategoryClassifier {
    pub fn new(store: CategoryStore) -> Result<Self> {
        if store.get(store.default_name()).is_none() {
            return Err(FolioError::MissingDefaultBucket {
                set: store.set_name().to_string(),
                name: store.default_name().to_string(),
            });
        }

        let mut compiled = Vec::new();
        for cat in store.by_priority() {
            let patterns = cat
                .patterns
                .iter()
                .map(|p| {
                    Pattern::new(&p.to_lowercase()).map_err(|e| FolioError::InvalidPattern {
                        category: cat.name.clone(),
                        pattern: p.clone(),
                        message: e.to_string(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            compiled.push((cat.name.clone(), patterns));
        }

        Ok(Self { store, compiled })
    }

    /// Classifier over the builtin project rules
    pub fn projects() -> Result<Self> {
        Self::new(CategoryStore::projects())
    }

    /// Classifier over the builtin certification rules
    pub fn certifications() -> Result<Self> {
        Self::new(CategoryStore::certifications())
    }

    /// Category names in display order
    pub fn category_names(&self) -> Vec<&str> {
        self.store.names()
    }

    pub fn get_category(&self, name: &str) -> Option<&CategoryDef> {
        self.store.get(name)
    }

    pub fn default_category(&self) -> &str {
        self.store.default_name()
    }

    /// Bucket for a single text; matching is case-insensitive
    pub fn classify(&self, text: &str) -> &str {
        self.classify_with_pattern(text).0
    }

    fn classify_with_pattern(&self, text: &str) -> (&str, Option<&str>) {
        let text = text.to_lowercase();
        for (name, patterns) in &self.compiled {
            if let Some(pattern) = patterns.iter().find(|p| p.matches(&text)) {
                return (name.as_str(), Some(pattern.as_str()));
            }
        }
        (self.store.default_name(), None)
    }

    /// Classify a sequence of `(text, explicit bucket)` pairs.
    ///
    /// An explicit bucket that names a known category wins over the rules;
    /// an unknown one is ignored with a warning.
    pub fn classify_all<'a, I>(&self, items: I) -> Vec<Classification>
    where
        I: IntoIterator<Item = (String, Option<&'a str>)>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(index, (text, explicit))| {
                if let Some(name) = explicit {
                    if self.store.get(name).is_some() {
                        return Classification {
                            index,
                            category: name.to_string(),
                            matched: None,
                        };
                    }
                    tracing::warn!(
                        set = self.store.set_name(),
                        category = name,
                        "ignoring unknown explicit category"
                    );
                }
                let (category, matched) = self.classify_with_pattern(&text);
                Classification {
                    index,
                    category: category.to_string(),
                    matched: matched.map(str::to_string),
                }
            })
            .collect()
    }
}
