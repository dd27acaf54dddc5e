//! Portfolio content
//!
//! The read-only data source behind every view: about fields, experience,
//! education, projects, skills and certifications. A builtin document is
//! embedded at compile time; a user TOML file with the same schema may
//! replace it.

use std::fs;
use std::path::Path;

use chrono::Month;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Builtin content document
pub const BUILTIN_CONTENT: &str = include_str!("../data/profile.toml");

static BUILTIN: OnceCell<Content> = OnceCell::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub basics: Basics,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub online: Vec<Link>,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub coursework: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// External page listing every certification
    #[serde(default)]
    pub verify_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basics {
    pub full_name: String,
    /// Short lowercase name used in prompts (`<handle>@portfolio`)
    pub handle: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub org: String,
    pub period: String,
    pub summary: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl Experience {
    /// Organization name without the trailing "— location" part
    pub fn org_name(&self) -> &str {
        self.org.split('—').next().unwrap_or(&self.org).trim()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    #[serde(default)]
    pub specialization: Option<String>,
    pub duration: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cgpa: Option<String>,
    #[serde(default)]
    pub focus: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub duration: String,
    pub stack: String,
    pub summary: String,
    #[serde(default)]
    pub link: Option<String>,
    /// Explicit sub-category; wins over rule classification when it names a known bucket
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issued: String,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
}

impl Content {
    /// Parse a content document. Experience is reordered newest first.
    pub fn from_toml_str(text: &str, source_name: &str) -> Result<Self> {
        let mut content: Content =
            toml::from_str(text).map_err(|e| FolioError::ContentParse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        content.sort_experience();
        Ok(content)
    }

    /// Load a content document from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::ContentNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        let content = Self::from_toml_str(&text, &path.display().to_string())?;
        tracing::info!(path = %path.display(), "loaded content file");
        Ok(content)
    }

    /// The embedded document (parsed once per process)
    pub fn builtin() -> Result<Self> {
        BUILTIN
            .get_or_try_init(|| Self::from_toml_str(BUILTIN_CONTENT, "builtin"))
            .cloned()
    }

    /// Load from `path` when given, otherwise fall back to the builtin document
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    fn sort_experience(&mut self) {
        // Stable: entries starting in the same month keep document order.
        self.experience
            .sort_by_key(|item| std::cmp::Reverse(period_start_key(&item.period)));
    }
}

/// Sort key for the start of a period such as `"July 2024 – October 2024"`.
///
/// Finds the first `<word> <yyyy>` pair. An unknown month word counts as
/// January; a period without any such pair yields 0.
pub fn period_start_key(period: &str) -> u32 {
    let words: Vec<&str> = period.split_whitespace().collect();
    for pair in words.windows(2) {
        let word = pair[0].trim_matches(|c: char| !c.is_alphabetic());
        let year = pair[1].trim_end_matches(|c: char| !c.is_ascii_digit());
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let Ok(year) = year.parse::<u32>() else {
            continue;
        };
        let month = word
            .parse::<Month>()
            .map(|m| m.number_from_month())
            .unwrap_or(1);
        return year * 12 + month;
    }
    0
}
